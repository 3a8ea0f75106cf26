//! Episode identity and the per-episode choice log.
//!
//! The choice log is transient state: it exists only so a later win/loss
//! report can credit every decision made during the episode without the
//! caller re-supplying its choices. It is never persisted.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Identifier of one episode (one match, one game, one round of use).
///
/// ULID-backed so IDs sort by creation time and need no coordination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EpisodeId(Ulid);

impl EpisodeId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for EpisodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "episode-{}", self.0)
    }
}

/// Which options were chosen under which scopes during the current episode.
///
/// Set semantics: an option appears at most once per scope no matter how
/// many times it was chosen, so a win credits it exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeLog {
    choices: BTreeMap<String, BTreeSet<String>>,
}

impl EpisodeLog {
    /// Remember that `option` was chosen under `scope` this episode.
    /// Idempotent if already present.
    pub fn record(&mut self, scope: &str, option: &str) {
        self.choices
            .entry(scope.to_string())
            .or_default()
            .insert(option.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn clear(&mut self) {
        self.choices.clear();
    }

    /// Iterate `(scope, options chosen under it)` for result crediting.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.choices.iter()
    }
}
