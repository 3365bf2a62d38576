//! Event store.
//!
//! # Responsibility
//! - Own the authoritative in-memory ordered event sequence.
//! - Mirror the full sequence to the persistence slot after every mutation.
//! - Allocate event ids from a monotonic counter.
//!
//! # Invariants
//! - `list()` order is insertion order.
//! - After any successful mutation the slot holds the current sequence.
//! - `next_id()` results are strictly increasing and never collide with an
//!   id already present when the store was loaded.

use crate::model::event::{Event, EventId, EventValidationError};
use crate::repo::slot_repo::{RepoError, SlotRepository};
use crate::store::sample::{contains_sample_titles, sample_events};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for event mutations and slot synchronization.
#[derive(Debug)]
pub enum StoreError {
    Validation(EventValidationError),
    Repo(RepoError),
    Serialize(serde_json::Error),
    /// The fixed sample batch was already inserted (matched by title).
    SampleBatchExists,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize events: {err}"),
            Self::SampleBatchExists => write!(f, "sample events are already present"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::SampleBatchExists => None,
        }
    }
}

impl From<EventValidationError> for StoreError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Authoritative in-memory event sequence with a durable slot mirror.
///
/// One store instance is created at process start and passed by reference
/// to whatever frontend drives it; it holds no global state.
pub struct EventStore<R: SlotRepository> {
    repo: R,
    events: Vec<Event>,
    next_id: EventId,
}

impl<R: SlotRepository> EventStore<R> {
    /// Loads the store from the persistence slot. Runs once at startup.
    ///
    /// An absent slot starts an empty collection. A malformed slot value is
    /// logged at warn level and likewise treated as empty; the next
    /// successful mutation overwrites it.
    pub fn load(repo: R) -> StoreResult<Self> {
        let events = match repo.read_slot()? {
            None => Vec::new(),
            Some(text) => match serde_json::from_str::<Vec<Event>>(&text) {
                Ok(events) => events,
                Err(err) => {
                    warn!("event=store_load module=store status=malformed_slot error={err}");
                    Vec::new()
                }
            },
        };

        let next_id = events
            .iter()
            .map(|event| event.id)
            .max()
            .map_or(1, |max| max + 1);

        info!(
            "event=store_load module=store status=ok count={} next_id={next_id}",
            events.len()
        );

        Ok(Self {
            repo,
            events,
            next_id,
        })
    }

    /// Allocates the next unique event id.
    pub fn next_id(&mut self) -> EventId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends one event to the end of the sequence and flushes the slot.
    ///
    /// The id is caller-assigned and not checked for uniqueness against
    /// existing entries; callers obtain fresh ids from `next_id()`.
    pub fn add(&mut self, event: Event) -> StoreResult<()> {
        event.validate()?;
        self.bump_next_id(event.id);
        self.events.push(event);
        self.persist()
    }

    /// Appends a batch in order and flushes the slot once.
    ///
    /// Carries no duplicate policy of its own; callers with preconditions
    /// check before calling (see `add_sample_batch`).
    pub fn add_many(&mut self, events: Vec<Event>) -> StoreResult<()> {
        for event in &events {
            event.validate()?;
        }
        for event in events {
            self.bump_next_id(event.id);
            self.events.push(event);
        }
        self.persist()
    }

    /// Inserts the fixed sample batch, all or nothing.
    ///
    /// # Errors
    /// - `StoreError::SampleBatchExists` when any existing event's title
    ///   matches a sample title; nothing is inserted in that case.
    pub fn add_sample_batch(&mut self) -> StoreResult<()> {
        if contains_sample_titles(&self.events) {
            return Err(StoreError::SampleBatchExists);
        }

        let ids = [self.next_id(), self.next_id(), self.next_id()];
        self.add_many(sample_events(ids).to_vec())
    }

    /// Removes the first event with a matching id.
    ///
    /// A non-matching id leaves the sequence unchanged and is not an
    /// error; the slot is flushed either way. Returns whether a removal
    /// happened.
    pub fn remove_by_id(&mut self, id: EventId) -> StoreResult<bool> {
        let removed = match self.events.iter().position(|event| event.id == id) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => false,
        };

        self.persist()?;
        Ok(removed)
    }

    /// Empties the collection and flushes the slot.
    pub fn clear(&mut self) -> StoreResult<()> {
        self.events.clear();
        self.persist()
    }

    /// Returns the full ordered sequence, read-only, for rendering.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serializes the full sequence and overwrites the slot value.
    ///
    /// Write failures are not swallowed; they propagate to the caller and
    /// leave the previous slot value in place.
    pub fn persist(&self) -> StoreResult<()> {
        let value = serde_json::to_string(&self.events)?;
        if let Err(err) = self.repo.write_slot(&value) {
            error!(
                "event=slot_write module=store status=error count={} error={err}",
                self.events.len()
            );
            return Err(err.into());
        }
        Ok(())
    }

    fn bump_next_id(&mut self, id: EventId) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }
}
