//! Core domain logic for Eventbook.
//! This crate is the single source of truth for the event collection.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date::{format_long, parse_ymd};
pub use model::event::{Event, EventId, EventValidationError};
pub use repo::slot_repo::{
    RepoError, RepoResult, SlotRepository, SqliteSlotRepository, EVENTS_SLOT_KEY,
};
pub use store::event_store::{EventStore, StoreError, StoreResult};
pub use store::sample::{contains_sample_titles, sample_events, SAMPLE_EVENT_TITLES};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
