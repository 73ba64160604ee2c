//! Event types recorded in the log store.

use serde::Serialize;

/// Severity attached to a logged event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// The two supported search shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Keyword,
    GenreYear,
}

impl SearchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::GenreYear => "genre_year",
        }
    }

    /// Parse a stored kind tag, tolerating unknown values.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s {
            "keyword" => Some(Self::Keyword),
            "genre_year" => Some(Self::GenreYear),
            _ => None,
        }
    }

    /// Human-readable description used in statistics output.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Keyword => "keyword search",
            Self::GenreYear => "genre search",
        }
    }
}

/// Bound parameters of one search session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchParams {
    Keyword {
        keyword: String,
    },
    GenreYear {
        genre: String,
        year_from: i32,
        year_to: i32,
    },
}

impl SearchParams {
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self::Keyword {
            keyword: keyword.into(),
        }
    }

    pub fn genre_year(genre: impl Into<String>, year_from: i32, year_to: i32) -> Self {
        Self::GenreYear {
            genre: genre.into(),
            year_from,
            year_to,
        }
    }

    pub fn kind(&self) -> SearchKind {
        match self {
            Self::Keyword { .. } => SearchKind::Keyword,
            Self::GenreYear { .. } => SearchKind::GenreYear,
        }
    }

    /// Normalized parameter string used as the statistics grouping key.
    ///
    /// Keywords are trimmed and lowercased so casing and stray whitespace
    /// do not split one query shape into several groups.
    pub fn signature(&self) -> String {
        match self {
            Self::Keyword { keyword } => keyword.trim().to_lowercase(),
            Self::GenreYear {
                genre,
                year_from,
                year_to,
            } => format!("{}, {}-{}", genre, year_from, year_to),
        }
    }
}

/// Whether a keyword session's first page had any rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    Found,
    NotFound,
}

/// Structured payload of one log event.
///
/// One variant per known event kind; `Other` carries arbitrary key-value
/// data so new event shapes can be recorded without a schema change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    /// One search session was started.
    Search { params: SearchParams },
    /// Outcome of a keyword session's first page.
    KeywordSummary {
        keyword: String,
        status: SearchStatus,
        found_count: usize,
    },
    /// A page fetch failed and aborted its session.
    SearchError {
        context: String,
        details: String,
        error: String,
    },
    /// A statistics query failed.
    StatsError { operation: String, error: String },
    /// User input was rejected by a validation loop.
    InputError { context: String, input: String },
    /// Process lifecycle transition (startup, shutdown).
    Lifecycle { message: String },
    /// Forward-compatible key-value payload.
    Other {
        event_type: String,
        data: serde_json::Value,
    },
}

impl EventPayload {
    /// Tag stored in the event row's `event_type` column.
    pub fn event_type(&self) -> &str {
        match self {
            Self::Search { .. } => "search",
            Self::KeywordSummary { .. } => "keyword_summary",
            Self::SearchError { .. } => "search_error",
            Self::StatsError { .. } => "stats_error",
            Self::InputError { .. } => "input_error",
            Self::Lifecycle { .. } => "lifecycle",
            Self::Other { event_type, .. } => event_type,
        }
    }

    /// Kind and signature columns, set for search events only so the
    /// aggregator can group without parsing payload JSON.
    pub(crate) fn search_columns(&self) -> (Option<&'static str>, Option<String>) {
        match self {
            Self::Search { params } => (Some(params.kind().as_str()), Some(params.signature())),
            _ => (None, None),
        }
    }
}
