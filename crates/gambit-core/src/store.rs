//! Decision store: durable history + per-episode choice tracking.
//!
//! The store owns two pieces of state. The scope-keyed counter history is
//! durable and survives restarts through [`Snapshot`]. The episode choice
//! log is transient: it records which options were picked during the
//! current episode so a single win/loss report can credit all of them at
//! once, and it dies with the store.
//!
//! One store instance expects one caller. There is no locking discipline;
//! concurrent use has to be serialized outside.

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{
    DecisionHistory, EpisodeId, EpisodeLog, GambitError, ScopeHistory,
};
use crate::model::ProbabilityModel;
use crate::snapshot::Snapshot;
use crate::summary::{OptionStats, ScopeSummary, StoreSummary};

/// Scope used when the caller does not name one.
pub const DEFAULT_SCOPE: &str = "Default";

/// Construction parameters for a [`DecisionStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Where the history document lives.
    pub path: PathBuf,

    /// Create an empty history when `path` does not exist. When false, a
    /// missing file fails [`DecisionStore::open`].
    pub create_on_missing: bool,

    /// Persist automatically on every `report_result` (unless the call
    /// overrides it).
    pub autosave: bool,

    /// Weighting of history into sampling probabilities.
    pub model: ProbabilityModel,

    /// Seed for the sampling RNG. `None` seeds from entropy; tests pass a
    /// fixed seed for reproducible draws.
    pub seed: Option<u64>,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_on_missing: true,
            autosave: true,
            model: ProbabilityModel::default(),
            seed: None,
        }
    }
}

/// One decision: the option picked and the probability mass it held at the
/// moment of the draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub option: String,
    pub probability: f64,
}

/// Persistent, adaptive multi-choice decision engine.
#[derive(Debug)]
pub struct DecisionStore {
    config: StoreConfig,
    history: DecisionHistory,
    episode_log: EpisodeLog,
    episode: EpisodeId,
    episodes_reported: u64,
    rng: StdRng,
}

impl DecisionStore {
    /// Open a store backed by `config.path`, loading existing history or
    /// creating an empty one per `config.create_on_missing`.
    ///
    /// A fresh episode is begun implicitly.
    pub fn open(config: StoreConfig) -> Result<Self, GambitError> {
        if !config.path.exists() {
            if config.create_on_missing {
                Snapshot::empty().write(&config.path)?;
            } else {
                return Err(GambitError::MissingHistory {
                    path: config.path.clone(),
                });
            }
        }
        let snapshot = Snapshot::read(&config.path)?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            history: snapshot.scopes,
            episode_log: EpisodeLog::default(),
            episode: EpisodeId::new(),
            episodes_reported: snapshot.episodes_reported,
            rng,
        })
    }

    /// Pick one of `options` for `scope`, weighted by history.
    ///
    /// Records missing from the scope are created with zero counters, so a
    /// never-seen option or scope is fine. Options present in the scope's
    /// history but absent from `options` do not influence this decision.
    /// The chosen option's `chosen_count` is incremented and the choice is
    /// logged against the current episode.
    ///
    /// `options` must not contain duplicates: they are not deduplicated
    /// here, and a duplicate corrupts the counter alignment.
    ///
    /// # Errors
    ///
    /// [`GambitError::EmptyOptions`] on an empty `options` slice;
    /// [`GambitError::ZeroWeightSum`] from the probability model.
    pub fn decide(&mut self, options: &[&str], scope: &str) -> Result<Choice, GambitError> {
        if options.is_empty() {
            return Err(GambitError::EmptyOptions);
        }

        let records = self.history.entry(scope.to_string()).or_default();
        for option in options {
            records.entry((*option).to_string()).or_default();
        }

        // Counter vectors in caller order. The first element of that order
        // is the one that absorbs the model's truncation residual.
        let mut chosen = Vec::with_capacity(options.len());
        let mut won = Vec::with_capacity(options.len());
        for option in options {
            let record = records.get(*option).copied().unwrap_or_default();
            chosen.push(record.chosen_count);
            won.push(record.won_count);
        }

        let probs = self.config.model.probabilities(&chosen, &won)?;
        let index = self.sample_index(&probs);
        let option = options[index];

        if let Some(record) = self
            .history
            .get_mut(scope)
            .and_then(|records| records.get_mut(option))
        {
            record.chosen_count += 1;
        }
        self.episode_log.record(scope, option);

        Ok(Choice {
            option: option.to_string(),
            probability: probs[index],
        })
    }

    /// [`Self::decide`] under the [`DEFAULT_SCOPE`].
    pub fn decide_default(&mut self, options: &[&str]) -> Result<Choice, GambitError> {
        self.decide(options, DEFAULT_SCOPE)
    }

    /// Report the outcome of the current episode.
    ///
    /// On a win, every option chosen during the episode (per scope, once
    /// each) gets its `won_count` incremented. A loss changes no counters.
    ///
    /// `persist` overrides the autosave setting for this call: `Some(true)`
    /// saves now, `Some(false)` skips saving, `None` follows
    /// `config.autosave`.
    ///
    /// The episode log is deliberately not cleared: reporting twice without
    /// an intervening [`Self::begin_episode`] credits the same choices
    /// twice. Callers mark the boundary explicitly.
    pub fn report_result(&mut self, won: bool, persist: Option<bool>) -> Result<(), GambitError> {
        if won {
            for (scope, options) in self.episode_log.iter() {
                let records = self.history.entry(scope.clone()).or_default();
                for option in options {
                    records.entry(option.clone()).or_default().won_count += 1;
                }
            }
        }
        self.episodes_reported += 1;

        match persist {
            Some(true) => self.save(),
            Some(false) => Ok(()),
            None if self.config.autosave => self.save(),
            None => Ok(()),
        }
    }

    /// Start a new episode: clear the choice log and mint a fresh ID.
    pub fn begin_episode(&mut self) -> EpisodeId {
        self.episode_log.clear();
        self.episode = EpisodeId::new();
        self.episode
    }

    /// Persist the current history to the configured path.
    pub fn save(&self) -> Result<(), GambitError> {
        Snapshot::new(self.history.clone(), self.episodes_reported).write(&self.config.path)
    }

    /// Replace the in-memory history with whatever the configured path
    /// holds. The episode log is untouched.
    pub fn load(&mut self) -> Result<(), GambitError> {
        let snapshot = Snapshot::read(&self.config.path)?;
        self.history = snapshot.scopes;
        self.episodes_reported = snapshot.episodes_reported;
        Ok(())
    }

    /// Serializable statistics over every scope and option.
    pub fn summary(&self) -> StoreSummary {
        let scopes = self
            .history
            .iter()
            .map(|(scope, records)| {
                let options = records
                    .iter()
                    .map(|(option, record)| {
                        (
                            option.clone(),
                            OptionStats {
                                chosen_count: record.chosen_count,
                                won_count: record.won_count,
                                win_rate: record.win_rate(),
                                exploration_bonus: self
                                    .config
                                    .model
                                    .exploration_bonus(record.chosen_count),
                                suspicious: record.won_count > record.chosen_count,
                            },
                        )
                    })
                    .collect();
                let decisions = records.values().map(|r| r.chosen_count).sum();
                (scope.clone(), ScopeSummary { decisions, options })
            })
            .collect();

        StoreSummary {
            episodes_reported: self.episodes_reported,
            scopes,
        }
    }

    pub fn episode(&self) -> EpisodeId {
        self.episode
    }

    pub fn episodes_reported(&self) -> u64 {
        self.episodes_reported
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn history(&self) -> &DecisionHistory {
        &self.history
    }

    pub fn scope(&self, name: &str) -> Option<&ScopeHistory> {
        self.history.get(name)
    }

    /// Categorical draw by CDF inversion over one uniform sample.
    fn sample_index(&mut self, probs: &[f64]) -> usize {
        let r: f64 = self.rng.gen_range(0.0..1.0);
        let mut cdf = 0.0;
        for (i, p) in probs.iter().enumerate() {
            cdf += *p;
            if r < cdf {
                return i;
            }
        }
        // Numerical fallback.
        probs.len() - 1
    }
}
