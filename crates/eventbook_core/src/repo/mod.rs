//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the slot contract the event store persists through.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Slot writes replace the whole value; there is no partial update.
//! - Repository construction fails on connections that skipped schema
//!   bootstrap instead of failing later mid-operation.

pub mod slot_repo;
