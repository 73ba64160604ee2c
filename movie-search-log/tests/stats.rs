use movie_search_log::*;

fn log_search(log: &EventLog, params: SearchParams) {
    log.log_event(&EventPayload::Search { params }, LogLevel::Info);
}

#[test]
fn empty_log_yields_empty_views() {
    let log = EventLog::open_memory().unwrap();
    assert!(top_searches(&log, DEFAULT_STATS_LIMIT).is_empty());
    assert!(recent_unique_searches(&log, DEFAULT_STATS_LIMIT).is_empty());
}

#[test]
fn disconnected_log_yields_unavailable_placeholder() {
    let log = EventLog::disconnected();

    let top = top_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].params, "unavailable");

    let recent = recent_unique_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].params, "unavailable");
}

#[test]
fn top_searches_ranks_by_count() {
    let log = EventLog::open_memory().unwrap();
    for _ in 0..5 {
        log_search(&log, SearchParams::keyword("love"));
    }
    for _ in 0..2 {
        log_search(&log, SearchParams::keyword("war"));
    }

    let top = top_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].label, "keyword search");
    assert_eq!(top[0].params, "'love' (5 times)");
    assert_eq!(top[1].params, "'war' (2 times)");
}

#[test]
fn top_searches_breaks_count_ties_by_recency() {
    let log = EventLog::open_memory().unwrap();
    log_search(&log, SearchParams::keyword("first"));
    log_search(&log, SearchParams::keyword("second"));
    log_search(&log, SearchParams::keyword("first"));
    log_search(&log, SearchParams::keyword("second"));

    let top = top_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(top.len(), 2);
    // Both count 2; "second" was used more recently
    assert_eq!(top[0].params, "'second' (2 times)");
    assert_eq!(top[1].params, "'first' (2 times)");
}

#[test]
fn keyword_normalization_merges_query_shapes() {
    let log = EventLog::open_memory().unwrap();
    log_search(&log, SearchParams::keyword("Love"));
    log_search(&log, SearchParams::keyword(" love "));
    log_search(&log, SearchParams::keyword("love"));

    let top = top_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].params, "'love' (3 times)");
}

#[test]
fn genre_searches_render_with_year_range() {
    let log = EventLog::open_memory().unwrap();
    log_search(&log, SearchParams::genre_year("Drama", 2000, 2005));

    let top = top_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].label, "genre search");
    assert_eq!(top[0].params, "Drama, 2000-2005 (1 times)");
}

#[test]
fn non_search_events_are_excluded() {
    let log = EventLog::open_memory().unwrap();
    log.log_input_error("main_menu", "seven");
    log.log_event(
        &EventPayload::Lifecycle {
            message: "application started".to_string(),
        },
        LogLevel::Info,
    );
    log.log_event(
        &EventPayload::SearchError {
            context: "keyword".to_string(),
            details: "love".to_string(),
            error: "catalog closed".to_string(),
        },
        LogLevel::Error,
    );

    assert!(top_searches(&log, DEFAULT_STATS_LIMIT).is_empty());
    assert!(recent_unique_searches(&log, DEFAULT_STATS_LIMIT).is_empty());
}

#[test]
fn recent_unique_deduplicates_and_orders_newest_first() {
    let log = EventLog::open_memory().unwrap();
    log_search(&log, SearchParams::keyword("love"));
    log_search(&log, SearchParams::keyword("war"));
    log_search(&log, SearchParams::keyword("love"));

    let recent = recent_unique_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].params, "'love'");
    assert_eq!(recent[1].params, "'war'");
}

#[test]
fn recent_unique_treats_kinds_as_distinct_shapes() {
    let log = EventLog::open_memory().unwrap();
    log_search(&log, SearchParams::keyword("drama"));
    log_search(&log, SearchParams::genre_year("Drama", 1990, 1999));

    let recent = recent_unique_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].label, "genre search");
    assert_eq!(recent[1].label, "keyword search");
}

#[test]
fn recent_unique_respects_limit() {
    let log = EventLog::open_memory().unwrap();
    for i in 0..7 {
        log_search(&log, SearchParams::keyword(format!("query {}", i)));
    }

    let recent = recent_unique_searches(&log, DEFAULT_STATS_LIMIT);
    assert_eq!(recent.len(), DEFAULT_STATS_LIMIT);
    assert_eq!(recent[0].params, "'query 6'");
}
