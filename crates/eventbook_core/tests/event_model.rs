use chrono::NaiveDate;
use eventbook_core::{parse_ymd, Event, EventValidationError};

fn date(value: &str) -> NaiveDate {
    parse_ymd(value).unwrap()
}

#[test]
fn event_new_sets_fields() {
    let event = Event::new(7, "Standup", date("2026-01-10"), "Meetup", "");

    assert_eq!(event.id, 7);
    assert_eq!(event.title, "Standup");
    assert_eq!(event.date, date("2026-01-10"));
    assert_eq!(event.category, "Meetup");
    assert_eq!(event.description, "");
}

#[test]
fn validate_accepts_empty_description() {
    let event = Event::new(1, "Standup", date("2026-01-10"), "Meetup", "");
    assert!(event.validate().is_ok());
}

#[test]
fn validate_rejects_blank_title() {
    let empty = Event::new(1, "", date("2026-01-10"), "Meetup", "");
    assert_eq!(empty.validate(), Err(EventValidationError::BlankTitle));

    let whitespace = Event::new(1, "   ", date("2026-01-10"), "Meetup", "");
    assert_eq!(whitespace.validate(), Err(EventValidationError::BlankTitle));
}

#[test]
fn validate_rejects_blank_category() {
    let event = Event::new(1, "Standup", date("2026-01-10"), " ", "");
    assert_eq!(event.validate(), Err(EventValidationError::BlankCategory));
}

#[test]
fn event_serialization_uses_expected_wire_fields() {
    let event = Event::new(
        42,
        "Tech Conference 2026",
        date("2026-03-15"),
        "Conference",
        "Annual technology conference.",
    );

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["title"], "Tech Conference 2026");
    assert_eq!(json["date"], "2026-03-15");
    assert_eq!(json["category"], "Conference");
    assert_eq!(json["description"], "Annual technology conference.");

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn deserialize_rejects_non_calendar_date() {
    let value = serde_json::json!({
        "id": 1,
        "title": "bad date",
        "date": "2026-02-30",
        "category": "Meetup",
        "description": ""
    });

    assert!(serde_json::from_value::<Event>(value).is_err());
}
