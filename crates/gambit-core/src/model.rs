//! Probability model: win/chosen counters in, sampling distribution out.
//!
//! This is the judgment core of the engine. It is pure: no state, no I/O,
//! same inputs always produce the same vector. The balance it strikes:
//!
//! - **Exploitation**: options with a stronger historical win rate get more
//!   probability mass.
//! - **Exploration**: options with few samples get a bonus that starts at
//!   1.0 for a never-chosen option and decays toward 0.0 as `chosen_count`
//!   grows, so new options are tried before the history dominates.
//!
//! The output is a valid categorical distribution: every element is
//! non-negative and the vector sums to 1.0 at the configured precision.
//! Heuristic by design; this is not UCB or Thompson sampling.

use crate::domain::GambitError;

/// How the per-option win rate is computed from its counters.
///
/// The legacy division got the counters the wrong way around, producing a
/// reciprocal ratio that can exceed 1.0. It stays selectable so stores
/// built under it keep their sampling behavior; new deployments get the
/// intended rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WinRateStrategy {
    /// `won / chosen`, guarded on `chosen == 0`. A rate in `[0, 1]`.
    #[default]
    WonOverChosen,

    /// `chosen / won`, guarded on `won == 0`. The inverted legacy division;
    /// unbounded above.
    ChosenOverWon,
}

impl WinRateStrategy {
    fn rate(&self, chosen: u64, won: u64) -> f64 {
        match self {
            WinRateStrategy::WonOverChosen => {
                if chosen == 0 {
                    0.0
                } else {
                    won as f64 / chosen as f64
                }
            }
            WinRateStrategy::ChosenOverWon => {
                if won == 0 {
                    0.0
                } else {
                    chosen as f64 / won as f64
                }
            }
        }
    }
}

/// Tunable weighting of history into a sampling distribution.
///
/// Example with `falloff_rate = 1.0`:
/// - chosen 0 times: bonus 1.0 (full exploration weight)
/// - chosen 1 time:  bonus ~0.54
/// - chosen 3 times: bonus ~0.10
/// - chosen 10 times: bonus ~0.0001
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityModel {
    /// The higher this value, the quicker the exploration bonus falls off
    /// as `chosen_count` climbs.
    pub falloff_rate: f64,

    /// Decimal digits kept when truncating each probability. The truncation
    /// residual lands on the first element so the vector still sums to 1.0.
    pub rounding_precision: u32,

    /// Win-rate division to apply.
    pub strategy: WinRateStrategy,
}

impl Default for ProbabilityModel {
    fn default() -> Self {
        Self {
            falloff_rate: 1.0,
            rounding_precision: 4,
            strategy: WinRateStrategy::default(),
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl ProbabilityModel {
    /// Low-sample-size bonus for an option chosen `chosen` times.
    ///
    /// `1 - 2 * (sigmoid(chosen * falloff_rate) - 0.5)`: exactly 1.0 at
    /// zero samples, asymptotically 0.0 as samples accumulate.
    pub fn exploration_bonus(&self, chosen: u64) -> f64 {
        1.0 - 2.0 * (sigmoid(chosen as f64 * self.falloff_rate) - 0.5)
    }

    /// Turn aligned `chosen`/`won` counter slices into a categorical
    /// distribution over the same indices.
    ///
    /// The caller keeps the two slices aligned and in the option order it
    /// will sample with; index 0 of that order absorbs the truncation
    /// residual.
    ///
    /// # Errors
    ///
    /// [`GambitError::ZeroWeightSum`] when every weight is zero (possible
    /// once heavily-sampled options have a fully decayed bonus and no wins).
    pub fn probabilities(&self, chosen: &[u64], won: &[u64]) -> Result<Vec<f64>, GambitError> {
        let weighted: Vec<f64> = chosen
            .iter()
            .zip(won)
            .map(|(&c, &w)| self.strategy.rate(c, w) + self.exploration_bonus(c))
            .collect();

        let sum: f64 = weighted.iter().sum();
        if sum <= 0.0 || !sum.is_finite() {
            return Err(GambitError::ZeroWeightSum);
        }

        let mut probs: Vec<f64> = weighted
            .into_iter()
            .map(|w| self.truncate(w / sum))
            .collect();

        // Truncation only ever removes mass, so the residual is
        // non-negative and the fixed-up vector stays a distribution.
        let truncated_sum: f64 = probs.iter().sum();
        probs[0] += 1.0 - truncated_sum;

        Ok(probs)
    }

    /// Floor to `rounding_precision` decimal digits. Truncation, not
    /// nearest-rounding.
    fn truncate(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.rounding_precision as i32);
        (value * factor).floor() / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn assert_is_distribution(probs: &[f64]) {
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12, "sum={sum}");
        for p in probs {
            assert!(p.is_finite());
            assert!(*p >= 0.0, "negative probability {p}");
        }
    }

    #[test]
    fn never_chosen_option_gets_full_bonus() {
        let model = ProbabilityModel::default();
        assert_eq!(model.exploration_bonus(0), 1.0);
    }

    #[rstest]
    #[case(0.5)]
    #[case(1.0)]
    #[case(3.0)]
    fn bonus_decays_as_samples_accumulate(#[case] falloff_rate: f64) {
        let model = ProbabilityModel {
            falloff_rate,
            ..ProbabilityModel::default()
        };
        let b1 = model.exploration_bonus(1);
        let b5 = model.exploration_bonus(5);
        let b50 = model.exploration_bonus(50);
        assert!(b1 < 1.0);
        assert!(b5 < b1);
        assert!(b50 < b5);
        assert!(b50 >= 0.0);
    }

    #[test]
    fn higher_falloff_decays_faster() {
        let slow = ProbabilityModel {
            falloff_rate: 0.5,
            ..ProbabilityModel::default()
        };
        let fast = ProbabilityModel {
            falloff_rate: 2.0,
            ..ProbabilityModel::default()
        };
        assert!(fast.exploration_bonus(2) < slow.exploration_bonus(2));
    }

    #[test]
    fn fresh_options_split_evenly() {
        let model = ProbabilityModel::default();
        let probs = model.probabilities(&[0, 0], &[0, 0]).unwrap();
        assert_eq!(probs, vec![0.5, 0.5]);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(7)]
    fn uniform_over_n_fresh_options(#[case] n: usize) {
        let model = ProbabilityModel::default();
        let probs = model.probabilities(&vec![0; n], &vec![0; n]).unwrap();
        assert_is_distribution(&probs);
        // All tails equal; only index 0 may differ by the residual.
        for pair in probs[1..].windows(2) {
            assert_eq!(pair[0], pair[1]);
        }
        // Index 0 exceeds the tail by at most the total truncation loss.
        assert!(probs[0] - probs[n - 1] <= n as f64 * 1e-4);
    }

    #[test]
    fn wins_shift_mass_toward_the_winner() {
        let model = ProbabilityModel::default();
        let probs = model.probabilities(&[5, 5], &[4, 1]).unwrap();
        assert_is_distribution(&probs);
        assert!(probs[0] > probs[1]);
        assert!(probs[0] < 1.0);
    }

    #[test]
    fn residual_lands_on_the_first_element() {
        let model = ProbabilityModel::default();
        // weighted: [1/3, 1/3, 1/3] → truncated 0.3333 each, residual 0.0001.
        let probs = model.probabilities(&[0, 0, 0], &[0, 0, 0]).unwrap();
        assert!(probs[0] > probs[1]);
        assert_eq!(probs[1], probs[2]);
        assert_is_distribution(&probs);
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(6)]
    fn sums_to_one_at_any_precision(#[case] precision: u32) {
        let model = ProbabilityModel {
            rounding_precision: precision,
            ..ProbabilityModel::default()
        };
        let probs = model
            .probabilities(&[12, 3, 0, 44], &[7, 1, 0, 20])
            .unwrap();
        assert_is_distribution(&probs);
    }

    #[test]
    fn all_zero_weights_is_a_computation_error() {
        let model = ProbabilityModel::default();
        // Sampled so heavily the bonus underflows to 0.0, and never won.
        let err = model.probabilities(&[1_000], &[0]).unwrap_err();
        assert!(matches!(err, GambitError::ZeroWeightSum));
    }

    #[test]
    fn strategies_disagree_on_lopsided_history() {
        // Option 0: 10 picks, 9 wins. Option 1: 4 picks, 1 win.
        let chosen = [10, 4];
        let won = [9, 1];

        let intended = ProbabilityModel::default()
            .probabilities(&chosen, &won)
            .unwrap();
        let legacy = ProbabilityModel {
            strategy: WinRateStrategy::ChosenOverWon,
            ..ProbabilityModel::default()
        }
        .probabilities(&chosen, &won)
        .unwrap();

        // The intended rate favors the option that actually wins more
        // often; the inverted division favors the one that wins less.
        assert!(intended[0] > intended[1]);
        assert!(legacy[1] > legacy[0]);
        assert_is_distribution(&intended);
        assert_is_distribution(&legacy);
    }

    #[test]
    fn legacy_rate_matches_the_inverted_division() {
        let s = WinRateStrategy::ChosenOverWon;
        assert_eq!(s.rate(6, 2), 3.0);
        assert_eq!(s.rate(6, 0), 0.0);

        let s = WinRateStrategy::WonOverChosen;
        assert_eq!(s.rate(6, 2), 1.0 / 3.0);
        assert_eq!(s.rate(0, 0), 0.0);
    }
}
