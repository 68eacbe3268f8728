use chrono::{DateTime, Duration, TimeZone, Utc};
use rangeform_core::db::open_db_in_memory;
use rangeform_core::{
    Event, EventListQuery, EventRepository, EventValidationError, RepoError,
    SqliteEventRepository,
};
use rusqlite::Connection;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, day, hour, 0, 0).unwrap()
}

#[test]
fn create_and_get_roundtrip_preserves_times() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    // Millisecond precision survives the epoch-ms columns.
    let start = at(2, 9) + Duration::milliseconds(250);
    let event = Event::new("team offsite", start, start + Duration::hours(3));
    let id = repo.create_event(&event).unwrap();

    let loaded = repo.get_event(id).unwrap().unwrap();
    assert_eq!(loaded.uuid, event.uuid);
    assert_eq!(loaded.title, "team offsite");
    assert_eq!(loaded.time_start, event.time_start);
    assert_eq!(loaded.time_end, event.time_end);
}

#[test]
fn get_missing_event_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let event = Event::new("never stored", at(2, 9), at(2, 10));
    assert!(repo.get_event(event.uuid).unwrap().is_none());
}

#[test]
fn update_existing_event() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let mut event = Event::new("draft", at(2, 9), at(2, 10));
    repo.create_event(&event).unwrap();

    event.title = "rescheduled".to_string();
    event.time_start = at(3, 14);
    event.time_end = at(3, 16);
    repo.update_event(&event).unwrap();

    let loaded = repo.get_event(event.uuid).unwrap().unwrap();
    assert_eq!(loaded.title, "rescheduled");
    assert_eq!(loaded.time_start, at(3, 14));
    assert_eq!(loaded.time_end, at(3, 16));
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let event = Event::new("missing", at(2, 9), at(2, 10));
    let err = repo.update_event(&event).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == event.uuid));
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let reversed = Event::new("bad range", at(2, 10), at(2, 9));
    let err = repo.create_event(&reversed).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(EventValidationError::EndBeforeStart)
    ));

    let untitled = Event::new("   ", at(2, 9), at(2, 10));
    let err = repo.create_event(&untitled).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(EventValidationError::EmptyTitle)
    ));

    let mut valid = Event::new("good range", at(2, 9), at(2, 10));
    repo.create_event(&valid).unwrap();

    valid.time_end = at(2, 8);
    let err = repo.update_event(&valid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(EventValidationError::EndBeforeStart)
    ));

    // The stored row is untouched by the rejected update.
    let loaded = repo.get_event(valid.uuid).unwrap().unwrap();
    assert_eq!(loaded.time_end, at(2, 10));
}

#[test]
fn list_orders_by_start_time() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    let late = Event::new("late", at(5, 9), at(5, 10));
    let early = Event::new("early", at(2, 9), at(2, 10));
    let middle = Event::new("middle", at(3, 9), at(3, 10));
    repo.create_event(&late).unwrap();
    repo.create_event(&early).unwrap();
    repo.create_event(&middle).unwrap();

    let titles: Vec<String> = repo
        .list_events(&EventListQuery::default())
        .unwrap()
        .into_iter()
        .map(|event| event.title)
        .collect();
    assert_eq!(titles, ["early", "middle", "late"]);
}

#[test]
fn list_filters_by_starts_after_and_paginates() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEventRepository::try_new(&conn).unwrap();

    for day in 2..=6 {
        let event = Event::new(format!("day {day}"), at(day, 9), at(day, 10));
        repo.create_event(&event).unwrap();
    }

    let filtered = repo
        .list_events(&EventListQuery {
            starts_after: Some(at(4, 0)),
            ..EventListQuery::default()
        })
        .unwrap();
    let titles: Vec<&str> = filtered.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(titles, ["day 4", "day 5", "day 6"]);

    let paged = repo
        .list_events(&EventListQuery {
            limit: Some(2),
            offset: 1,
            ..EventListQuery::default()
        })
        .unwrap();
    let titles: Vec<&str> = paged.iter().map(|event| event.title.as_str()).collect();
    assert_eq!(titles, ["day 3", "day 4"]);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let Err(err) = SqliteEventRepository::try_new(&conn) else {
        panic!("raw connection must be rejected");
    };
    match err {
        RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        } => assert!(expected_version > 0),
        other => panic!("expected UninitializedConnection, got {other:?}"),
    }
}
