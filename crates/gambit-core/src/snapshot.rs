//! Durable snapshot of the decision history.
//!
//! One JSON document per store. The persistence contract is the round-trip
//! law (`read(write(h)) == h` for the history), not the byte layout:
//! `version` and `saved_at` are bookkeeping, recorded on every write and
//! ignored on load.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DecisionHistory, GambitError};

/// Current document version. Recorded for future migration, not validated.
const SNAPSHOT_VERSION: u32 = 1;

/// The persisted form of a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,

    /// When this document was written.
    pub saved_at: DateTime<Utc>,

    /// Total results reported over the store's lifetime.
    #[serde(default)]
    pub episodes_reported: u64,

    /// scope → option → counters. The source of truth.
    pub scopes: DecisionHistory,
}

impl Snapshot {
    pub fn empty() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            episodes_reported: 0,
            scopes: DecisionHistory::new(),
        }
    }

    pub fn new(scopes: DecisionHistory, episodes_reported: u64) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            saved_at: Utc::now(),
            episodes_reported,
            scopes,
        }
    }

    /// Load a snapshot from `path`.
    pub fn read(path: &Path) -> Result<Self, GambitError> {
        let bytes = fs::read(path).map_err(|source| GambitError::Storage {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|source| GambitError::Encoding {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write this snapshot to `path`, replacing any existing document.
    pub fn write(&self, path: &Path) -> Result<(), GambitError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|source| GambitError::Encoding {
                path: path.to_path_buf(),
                source,
            })?;
        fs::write(path, json).map_err(|source| GambitError::Storage {
            path: path.to_path_buf(),
            source,
        })
    }
}
