//! Per-option history records.
//!
//! An [`OptionRecord`] is the durable unit of learning: how often an option
//! was picked under a scope, and how many of the episodes it participated in
//! were won. The nested maps built from it are the single source of truth
//! for every probability the engine produces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Win/chosen counters for one option under one scope.
///
/// `won_count` should never exceed `chosen_count`, but nothing enforces
/// that: a hand-edited snapshot can violate it and the engine will keep
/// computing. [`crate::summary`] flags such records instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    /// Times this option was selected under this scope.
    pub chosen_count: u64,

    /// Times an episode in which this option was chosen ended in a win.
    pub won_count: u64,
}

impl OptionRecord {
    /// Fraction of selections that ended in a win; 0.0 when never chosen.
    pub fn win_rate(&self) -> f64 {
        if self.chosen_count == 0 {
            0.0
        } else {
            self.won_count as f64 / self.chosen_count as f64
        }
    }
}

/// Option identifier → counters, one map per scope.
///
/// BTreeMap keeps snapshot serialization in a stable key order.
pub type ScopeHistory = BTreeMap<String, OptionRecord>;

/// Scope identifier → per-option history. The durable state of a store.
pub type DecisionHistory = BTreeMap<String, ScopeHistory>;
