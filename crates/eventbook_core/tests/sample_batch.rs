use eventbook_core::db::open_db_in_memory;
use eventbook_core::{
    contains_sample_titles, parse_ymd, sample_events, Event, EventStore, SqliteSlotRepository,
    StoreError, SAMPLE_EVENT_TITLES,
};
use rusqlite::Connection;

fn load_store(conn: &Connection) -> EventStore<SqliteSlotRepository<'_>> {
    let repo = SqliteSlotRepository::try_new(conn).unwrap();
    EventStore::load(repo).unwrap()
}

#[test]
fn sample_batch_appends_three_events_in_fixed_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = load_store(&conn);

    store.add_sample_batch().unwrap();

    let titles: Vec<_> = store.list().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, SAMPLE_EVENT_TITLES);
    assert_eq!(store.list()[0].category, "Conference");
    assert_eq!(store.list()[0].date, parse_ymd("2026-03-15").unwrap());
}

#[test]
fn sample_batch_ids_are_consecutive_and_unique() {
    let conn = open_db_in_memory().unwrap();
    let mut store = load_store(&conn);

    store.add_sample_batch().unwrap();

    let ids: Vec<_> = store.list().iter().map(|e| e.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn sample_batch_is_rejected_in_full_when_any_title_exists() {
    let conn = open_db_in_memory().unwrap();
    let mut store = load_store(&conn);

    let id = store.next_id();
    store
        .add(Event::new(
            id,
            "Design Workshop",
            parse_ymd("2026-02-01").unwrap(),
            "Workshop",
            "",
        ))
        .unwrap();

    let err = store.add_sample_batch().unwrap_err();
    assert!(matches!(err, StoreError::SampleBatchExists));
    assert_eq!(store.len(), 1);
}

#[test]
fn sample_batch_cannot_be_inserted_twice() {
    let conn = open_db_in_memory().unwrap();
    let mut store = load_store(&conn);

    store.add_sample_batch().unwrap();
    let err = store.add_sample_batch().unwrap_err();

    assert!(matches!(err, StoreError::SampleBatchExists));
    assert_eq!(store.len(), 3);
}

#[test]
fn contains_sample_titles_matches_exact_titles_only() {
    let make = |title: &str| Event::new(1, title, parse_ymd("2026-01-10").unwrap(), "Meetup", "");

    assert!(contains_sample_titles(&[make("Developer Meetup")]));
    assert!(!contains_sample_titles(&[make("developer meetup")]));
    assert!(!contains_sample_titles(&[make("Developer Meetup 2026")]));
    assert!(!contains_sample_titles(&[]));
}

#[test]
fn sample_events_use_the_provided_ids() {
    let batch = sample_events([10, 11, 12]);

    let ids: Vec<_> = batch.iter().map(|e| e.id).collect();
    assert_eq!(ids, [10, 11, 12]);

    for event in &batch {
        assert!(event.validate().is_ok());
        assert!(!event.description.is_empty());
    }
}
