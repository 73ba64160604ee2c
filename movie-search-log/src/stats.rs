//! Statistics views over the event log.
//!
//! Groups recorded searches by kind and normalized parameters to answer
//! "most frequent" and "most recent distinct" queries. Both views are
//! total: an unreachable store or a failed query yields a placeholder
//! entry, never an error.

use rusqlite::{params, Connection};

use crate::event::{EventPayload, LogLevel, SearchKind};
use crate::writer::{EventLog, LogError};

/// Default number of entries returned by the statistics views.
pub const DEFAULT_STATS_LIMIT: usize = 5;

const PLACEHOLDER: &str = "\u{2014}";

/// One row of a statistics view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    /// Most recent use of the group, or a placeholder dash.
    pub timestamp: String,
    /// Derived event-kind description.
    pub label: String,
    /// Rendered parameters.
    pub params: String,
}

impl StatEntry {
    fn unavailable(source: &str) -> Self {
        Self {
            timestamp: PLACEHOLDER.to_string(),
            label: source.to_string(),
            params: "unavailable".to_string(),
        }
    }

    fn error(operation: &str) -> Self {
        Self {
            timestamp: PLACEHOLDER.to_string(),
            label: "error".to_string(),
            params: format!("statistics query failed ({})", operation),
        }
    }
}

/// The most frequent search shapes, ranked by occurrence count.
///
/// Ties are resolved in favor of the more recently used shape. Each
/// entry reports the timestamp of its most recent member.
pub fn top_searches(log: &EventLog, limit: usize) -> Vec<StatEntry> {
    let Some(conn) = log.connection() else {
        return vec![StatEntry::unavailable("event log")];
    };
    match try_top_searches(conn, limit) {
        Ok(entries) => entries,
        Err(e) => stats_error(log, "top_searches", e),
    }
}

/// The most recently used distinct search shapes, newest first.
///
/// Answers "last N distinct query shapes", not "last N log lines": each
/// (kind, signature) group appears at most once.
pub fn recent_unique_searches(log: &EventLog, limit: usize) -> Vec<StatEntry> {
    let Some(conn) = log.connection() else {
        return vec![StatEntry::unavailable("event log")];
    };
    match try_recent_unique_searches(conn, limit) {
        Ok(entries) => entries,
        Err(e) => stats_error(log, "recent_unique_searches", e),
    }
}

fn try_top_searches(conn: &Connection, limit: usize) -> Result<Vec<StatEntry>, LogError> {
    let mut stmt = conn.prepare(
        "SELECT search_kind, signature, COUNT(*) AS uses, MAX(timestamp) AS last_used
         FROM events
         WHERE event_type = 'search'
         GROUP BY search_kind, signature
         ORDER BY uses DESC, last_used DESC, MAX(id) DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit as i64], |row| {
        let kind: Option<String> = row.get(0)?;
        let signature: Option<String> = row.get(1)?;
        let uses: i64 = row.get(2)?;
        let last_used: String = row.get(3)?;
        let kind = kind.unwrap_or_else(|| PLACEHOLDER.to_string());
        let signature = signature.unwrap_or_else(|| PLACEHOLDER.to_string());
        Ok(StatEntry {
            timestamp: last_used,
            label: describe_kind(&kind),
            params: format!("{} ({} times)", rendered_params(&kind, &signature), uses),
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn try_recent_unique_searches(conn: &Connection, limit: usize) -> Result<Vec<StatEntry>, LogError> {
    let mut stmt = conn.prepare(
        "SELECT search_kind, signature, MAX(timestamp) AS last_used
         FROM events
         WHERE event_type = 'search'
         GROUP BY search_kind, signature
         ORDER BY last_used DESC, MAX(id) DESC
         LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit as i64], |row| {
        let kind: Option<String> = row.get(0)?;
        let signature: Option<String> = row.get(1)?;
        let last_used: String = row.get(2)?;
        let kind = kind.unwrap_or_else(|| PLACEHOLDER.to_string());
        let signature = signature.unwrap_or_else(|| PLACEHOLDER.to_string());
        Ok(StatEntry {
            timestamp: last_used,
            label: describe_kind(&kind),
            params: rendered_params(&kind, &signature),
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

fn describe_kind(kind: &str) -> String {
    match SearchKind::from_str_loose(kind) {
        Some(k) => k.describe().to_string(),
        None => kind.to_string(),
    }
}

fn rendered_params(kind: &str, signature: &str) -> String {
    match SearchKind::from_str_loose(kind) {
        Some(SearchKind::Keyword) => format!("'{}'", signature),
        _ => signature.to_string(),
    }
}

fn stats_error(log: &EventLog, operation: &str, error: LogError) -> Vec<StatEntry> {
    log.log_event(
        &EventPayload::StatsError {
            operation: operation.to_string(),
            error: error.to_string(),
        },
        LogLevel::Error,
    );
    vec![StatEntry::error(operation)]
}
