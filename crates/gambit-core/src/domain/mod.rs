//! Domain model (records, episodes, errors).

pub mod episode;
pub mod errors;
pub mod record;

pub use episode::{EpisodeId, EpisodeLog};
pub use errors::GambitError;
pub use record::{DecisionHistory, OptionRecord, ScopeHistory};
