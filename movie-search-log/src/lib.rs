//! Append-only event log and search statistics.
//!
//! Stores structured events (searches, input errors, lifecycle
//! transitions) as JSON documents in SQLite and aggregates them into
//! search-history statistics views.

pub mod event;
pub mod schema;
pub mod stats;
pub mod writer;

pub use event::{EventPayload, LogLevel, SearchKind, SearchParams, SearchStatus};
pub use stats::{recent_unique_searches, top_searches, StatEntry, DEFAULT_STATS_LIMIT};
pub use writer::{EventLog, LogError, StoredEvent};
