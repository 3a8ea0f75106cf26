//! Serializable statistics views over a store's history.
//!
//! These are observation types only: building one never mutates the store,
//! and nothing here feeds back into decision making. Useful for dashboards,
//! demo output, and auditing a history file by hand.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Statistics for one option under one scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionStats {
    pub chosen_count: u64,
    pub won_count: u64,

    /// `won / chosen`, regardless of the configured sampling strategy.
    pub win_rate: f64,

    /// The exploration bonus this option would receive right now.
    pub exploration_bonus: f64,

    /// True when `won_count > chosen_count`. The engine never enforces
    /// that invariant, so audits need a way to spot violations.
    pub suspicious: bool,
}

/// Statistics for one scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeSummary {
    /// Total decisions made under this scope.
    pub decisions: u64,

    pub options: BTreeMap<String, OptionStats>,
}

/// Statistics for the whole store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSummary {
    /// Results reported over the store's lifetime.
    pub episodes_reported: u64,

    pub scopes: BTreeMap<String, ScopeSummary>,
}
