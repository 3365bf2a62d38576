//! Fixed demonstration events and their insertion precondition.
//!
//! # Responsibility
//! - Define the three demonstration events offered by frontends.
//! - Expose the title-equality precondition guarding their insertion.
//!
//! # Invariants
//! - `SAMPLE_EVENT_TITLES` matches `sample_events` output order exactly.
//! - The batch is insertable at most once per collection.

use crate::model::event::{Event, EventId};
use chrono::NaiveDate;

/// Titles of the fixed demonstration events, in insertion order.
pub const SAMPLE_EVENT_TITLES: [&str; 3] = [
    "Tech Conference 2026",
    "Design Workshop",
    "Developer Meetup",
];

/// Returns true when any existing event already uses a sample title.
///
/// This is the named precondition for `EventStore::add_sample_batch`.
/// Titles are compared by exact string equality; the check is usable on
/// any event slice independently of the bulk-insert call site.
pub fn contains_sample_titles(events: &[Event]) -> bool {
    events
        .iter()
        .any(|event| SAMPLE_EVENT_TITLES.contains(&event.title.as_str()))
}

/// Builds the demonstration batch with caller-provided ids.
pub fn sample_events(ids: [EventId; 3]) -> [Event; 3] {
    [
        Event::new(
            ids[0],
            SAMPLE_EVENT_TITLES[0],
            date(2026, 3, 15),
            "Conference",
            "Annual technology conference featuring the latest innovations \
             in AI and software development.",
        ),
        Event::new(
            ids[1],
            SAMPLE_EVENT_TITLES[1],
            date(2026, 4, 20),
            "Workshop",
            "Hands-on workshop covering modern UI/UX design principles and tools.",
        ),
        Event::new(
            ids[2],
            SAMPLE_EVENT_TITLES[2],
            date(2026, 5, 10),
            "Meetup",
            "Monthly meetup for local developers to network and share knowledge.",
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("sample dates are valid")
}
