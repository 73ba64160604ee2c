use movie_search_log::*;

#[test]
fn logged_event_is_stored_with_level_and_timestamp() {
    let log = EventLog::open_memory().unwrap();
    log.log_event(
        &EventPayload::Search {
            params: SearchParams::keyword("batman"),
        },
        LogLevel::Info,
    );

    assert_eq!(log.count_events("search").unwrap(), 1);
    let events = log.recent_events("search", 10).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, "info");
    assert!(events[0].payload.contains("batman"));
    assert!(events[0].timestamp.ends_with('Z'));
}

#[test]
fn input_errors_are_logged_at_warning_level() {
    let log = EventLog::open_memory().unwrap();
    log.log_input_error("year_range_input", "20o5");

    let events = log.recent_events("input_error", 10).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, "warning");
    assert!(events[0].payload.contains("20o5"));
}

#[test]
fn recent_events_returns_newest_first() {
    let log = EventLog::open_memory().unwrap();
    for name in ["one", "two", "three"] {
        log.log_event(
            &EventPayload::Lifecycle {
                message: name.to_string(),
            },
            LogLevel::Info,
        );
    }

    let events = log.recent_events("lifecycle", 2).unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].payload.contains("three"));
    assert!(events[1].payload.contains("two"));
}

#[test]
fn generic_payloads_keep_their_event_type() {
    let log = EventLog::open_memory().unwrap();
    log.log_event(
        &EventPayload::Other {
            event_type: "maintenance".to_string(),
            data: serde_json::json!({"action": "compact"}),
        },
        LogLevel::Debug,
    );

    assert_eq!(log.count_events("maintenance").unwrap(), 1);
}

#[test]
fn disconnected_log_swallows_writes() {
    let log = EventLog::disconnected();
    assert!(!log.is_connected());

    log.log_event(
        &EventPayload::Lifecycle {
            message: "application started".to_string(),
        },
        LogLevel::Info,
    );
    log.log_input_error("main_menu", "0");

    assert_eq!(log.count_events("lifecycle").unwrap(), 0);
    assert!(log.recent_events("input_error", 10).unwrap().is_empty());
}

#[test]
fn unreachable_store_degrades_to_disconnected() {
    // Parent "directory" is a plain file, so the store cannot be created
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let log = EventLog::open(&blocker.join("sub").join("events.db"));
    assert!(!log.is_connected());
}

#[test]
fn events_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.db");

    let log = EventLog::open(&path);
    assert!(log.is_connected());
    log.log_event(
        &EventPayload::Lifecycle {
            message: "application started".to_string(),
        },
        LogLevel::Info,
    );
    drop(log);

    let reopened = EventLog::open(&path);
    assert_eq!(reopened.count_events("lifecycle").unwrap(), 1);
}
