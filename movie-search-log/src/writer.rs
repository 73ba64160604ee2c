//! Best-effort event writer.

use std::path::Path;
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::event::{EventPayload, LogLevel};
use crate::schema;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Connect-time ceiling for the log store. An open that cannot complete
/// degrades the logger to a disconnected no-op for the rest of the
/// process instead of blocking the interface.
const BUSY_TIMEOUT: Duration = Duration::from_secs(3);

/// Append-only event log backed by SQLite.
///
/// All writes are best-effort: failures are reported through the `log`
/// facade and swallowed, never returned to the caller.
pub struct EventLog {
    conn: Option<Connection>,
}

impl EventLog {
    /// Open or create the log store at `path`.
    ///
    /// Never fails: on any error the returned log is disconnected and
    /// every write becomes a no-op.
    pub fn open(path: &Path) -> Self {
        match Self::try_open(path) {
            Ok(log) => log,
            Err(e) => {
                log::warn!("Event log unavailable at {}: {}", path.display(), e);
                Self::disconnected()
            }
        }
    }

    fn try_open(path: &Path) -> Result<Self, LogError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        schema::create_schema(&conn)?;
        Ok(Self { conn: Some(conn) })
    }

    /// Open an in-memory log store. Useful for testing.
    pub fn open_memory() -> Result<Self, LogError> {
        let conn = Connection::open_in_memory()?;
        schema::create_schema(&conn)?;
        Ok(Self { conn: Some(conn) })
    }

    /// A log that drops every event. Used when the store is unreachable.
    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Append one event, stamping it with the current UTC time.
    ///
    /// Best-effort: a failed write is warned about and dropped.
    pub fn log_event(&self, payload: &EventPayload, level: LogLevel) {
        if let Err(e) = self.try_log_event(payload, level) {
            log::warn!("Dropped {} event: {}", payload.event_type(), e);
        }
    }

    fn try_log_event(&self, payload: &EventPayload, level: LogLevel) -> Result<(), LogError> {
        let Some(conn) = &self.conn else {
            return Ok(());
        };
        let (kind, signature) = payload.search_columns();
        let body = serde_json::to_string(payload)?;
        conn.execute(
            "INSERT INTO events (event_type, level, timestamp, search_kind, signature, payload)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                payload.event_type(),
                level.as_str(),
                // Fixed-width timestamps keep lexicographic order chronological
                Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
                kind,
                signature,
                body,
            ],
        )?;
        Ok(())
    }

    /// Record rejected user input at warning level.
    pub fn log_input_error(&self, context: &str, input: &str) {
        self.log_event(
            &EventPayload::InputError {
                context: context.to_string(),
                input: input.to_string(),
            },
            LogLevel::Warning,
        );
    }

    /// Count stored events of one type. Zero when disconnected.
    pub fn count_events(&self, event_type: &str) -> Result<u64, LogError> {
        let Some(conn) = &self.conn else {
            return Ok(0);
        };
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM events WHERE event_type = ?1",
            params![event_type],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    /// List recent events of one type, newest first.
    pub fn recent_events(
        &self,
        event_type: &str,
        limit: usize,
    ) -> Result<Vec<StoredEvent>, LogError> {
        let Some(conn) = &self.conn else {
            return Ok(Vec::new());
        };
        let mut stmt = conn.prepare(
            "SELECT event_type, level, timestamp, payload
             FROM events WHERE event_type = ?1
             ORDER BY id DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(params![event_type, limit as i64], |row| {
            Ok(StoredEvent {
                event_type: row.get(0)?,
                level: row.get(1)?,
                timestamp: row.get(2)?,
                payload: row.get(3)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub(crate) fn connection(&self) -> Option<&Connection> {
        self.conn.as_ref()
    }
}

/// A stored event row, as returned by [`EventLog::recent_events`].
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub event_type: String,
    pub level: String,
    pub timestamp: String,
    pub payload: String,
}
