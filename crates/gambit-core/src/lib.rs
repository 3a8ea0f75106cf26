//! gambit-core
//!
//! A persistent, adaptive multi-choice decision engine. Given a set of
//! mutually-exclusive options and a named scope, it picks one option using
//! a probability distribution derived from historical win/chosen counts,
//! then retroactively credits every choice made during an episode once the
//! caller reports whether that episode was won.
//!
//! # Module map
//! - **domain**: records, episode tracking, errors
//! - **model**: pure counters → probability-vector weighting
//! - **store**: the stateful engine (`decide` / `report_result` / episodes)
//! - **snapshot**: durable JSON document, load/save
//! - **summary**: serializable statistics views
//!
//! # Quick start
//! ```no_run
//! use gambit_core::{DecisionStore, StoreConfig};
//!
//! # fn main() -> Result<(), gambit_core::GambitError> {
//! let mut store = DecisionStore::open(StoreConfig::new("data/history.json"))?;
//!
//! let choice = store.decide(&["FourRax", "FiveRax"], "build")?;
//! // ... play the match with choice.option ...
//! store.report_result(true, None)?;
//! store.begin_episode();
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod model;
pub mod snapshot;
pub mod store;
pub mod summary;

pub use domain::{DecisionHistory, EpisodeId, EpisodeLog, GambitError, OptionRecord, ScopeHistory};
pub use model::{ProbabilityModel, WinRateStrategy};
pub use snapshot::Snapshot;
pub use store::{Choice, DecisionStore, StoreConfig, DEFAULT_SCOPE};
pub use summary::{OptionStats, ScopeSummary, StoreSummary};
