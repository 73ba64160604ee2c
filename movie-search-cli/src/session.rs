//! One paginated search-and-display session.

use movie_search_catalog::{CatalogError, Connection, FilmRecord, PAGE_SIZE};
use movie_search_log::{EventLog, EventPayload, LogLevel, SearchParams, SearchStatus};

use crate::prompt::{PromptError, Prompter};
use crate::view;

/// How a search session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionOutcome {
    /// First page came back empty.
    NoResults,
    /// A short or empty later page means the catalog has no more rows.
    Exhausted,
    /// The user declined further pages.
    Stopped,
    /// A page fetch failed; the error was logged and shown.
    Failed,
}

/// Presentation seam for a session: rendering and the "show more" prompt.
pub(crate) trait SessionUi {
    fn show_page(&mut self, films: &[FilmRecord]);
    fn show_no_results(&mut self);
    fn confirm_more(&mut self) -> Result<bool, PromptError>;
}

/// Production [`SessionUi`] over the console prompter.
pub(crate) struct ConsoleSession<'a> {
    pub(crate) prompter: &'a mut Prompter,
    pub(crate) log: &'a EventLog,
}

impl SessionUi for ConsoleSession<'_> {
    fn show_page(&mut self, films: &[FilmRecord]) {
        view::show_films(films);
    }

    fn show_no_results(&mut self) {
        view::show_no_results();
    }

    fn confirm_more(&mut self) -> Result<bool, PromptError> {
        self.prompter.confirm("Show more? (y/n): ", self.log)
    }
}

/// Run one search session: fetch pages at advancing offsets, display
/// them, and record the session's events.
///
/// Appends one `search` event per session. Keyword sessions additionally
/// get exactly one `keyword_summary` event carrying the first page's
/// found/not-found status and row count, no matter how many pages the
/// user walks through afterwards.
pub(crate) fn run_search_session<F>(
    conn: &Connection,
    log: &EventLog,
    params: &SearchParams,
    ui: &mut dyn SessionUi,
    fetch: F,
) -> Result<SessionOutcome, PromptError>
where
    F: Fn(&Connection, u32) -> Result<Vec<FilmRecord>, CatalogError>,
{
    let mut offset: u32 = 0;
    loop {
        let page = match fetch(conn, offset) {
            Ok(page) => page,
            Err(e) => {
                log.log_event(
                    &EventPayload::SearchError {
                        context: params.kind().as_str().to_string(),
                        details: params.signature(),
                        error: e.to_string(),
                    },
                    LogLevel::Error,
                );
                view::show_error(&format!("Search failed: {}", e));
                return Ok(SessionOutcome::Failed);
            }
        };

        if offset == 0 {
            log.log_event(
                &EventPayload::Search {
                    params: params.clone(),
                },
                LogLevel::Info,
            );
            if let SearchParams::Keyword { keyword } = params {
                let status = if page.is_empty() {
                    SearchStatus::NotFound
                } else {
                    SearchStatus::Found
                };
                log.log_event(
                    &EventPayload::KeywordSummary {
                        keyword: keyword.clone(),
                        status,
                        found_count: page.len(),
                    },
                    LogLevel::Info,
                );
            }
            log::debug!(
                "First page for '{}' returned {} rows",
                params.signature(),
                page.len(),
            );
        }

        if page.is_empty() {
            if offset == 0 {
                ui.show_no_results();
                return Ok(SessionOutcome::NoResults);
            }
            return Ok(SessionOutcome::Exhausted);
        }

        ui.show_page(&page);

        if page.len() < PAGE_SIZE {
            return Ok(SessionOutcome::Exhausted);
        }
        if !ui.confirm_more()? {
            return Ok(SessionOutcome::Stopped);
        }
        offset += PAGE_SIZE as u32;
    }
}
