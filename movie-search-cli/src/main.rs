//! movie-search CLI
//!
//! Interactive terminal client for searching a film catalog and browsing
//! search-history statistics. Every search, rejected input, and
//! lifecycle transition is appended to the event log.

mod config;
mod error;
mod prompt;
mod session;
mod view;

use movie_search_catalog::{
    genre_year_bounds, search_by_genre_and_year, search_by_keyword, Connection,
};
use movie_search_log::{
    recent_unique_searches, top_searches, EventLog, EventPayload, LogLevel, SearchParams,
    DEFAULT_STATS_LIMIT,
};

use crate::config::AppConfig;
use crate::error::CliError;
use crate::prompt::{PromptError, Prompter};
use crate::session::{run_search_session, ConsoleSession, SessionOutcome};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (conn, log) = match startup() {
        Ok(handles) => handles,
        Err(e) => {
            log::error!("{}", e);
            view::show_error(&e.to_string());
            std::process::exit(1);
        }
    };

    log.log_event(
        &EventPayload::Lifecycle {
            message: "application started".to_string(),
        },
        LogLevel::Info,
    );
    view::show_message("Welcome to Movie Search.");

    let mut prompter = match Prompter::new() {
        Ok(prompter) => prompter,
        Err(e) => {
            log::error!("Could not initialize the terminal: {}", e);
            view::show_error(&format!("Could not initialize the terminal: {}", e));
            shutdown(conn, &log, "terminal init failure");
            std::process::exit(1);
        }
    };

    match main_loop(&conn, &log, &mut prompter) {
        Ok(()) => {
            view::show_message("Goodbye!");
            shutdown(conn, &log, "exit selected");
        }
        Err(PromptError::Cancelled) => {
            view::show_message("Interrupted. Goodbye!");
            shutdown(conn, &log, "interrupted by user");
        }
        Err(PromptError::Terminal(message)) => {
            view::show_error(&format!("Terminal failure: {}", message));
            shutdown(conn, &log, "terminal failure");
            std::process::exit(1);
        }
    }
}

/// Open both stores. A catalog failure is fatal; the event log degrades
/// to a disconnected no-op on its own.
fn startup() -> Result<(Connection, EventLog), CliError> {
    let config = AppConfig::load()?;

    if let Some(parent) = config.catalog_db.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CliError::catalog(format!("Failed to prepare {}: {}", parent.display(), e)))?;
    }
    let conn = movie_search_catalog::open_database(&config.catalog_db)
        .map_err(|e| CliError::catalog(format!("Failed to open the film catalog: {}", e)))?;
    log::info!("Catalog open at {}", config.catalog_db.display());

    let log = EventLog::open(&config.log_db);
    if log.is_connected() {
        log::info!("Event log open at {}", config.log_db.display());
    }

    Ok((conn, log))
}

fn shutdown(conn: Connection, log: &EventLog, reason: &str) {
    log.log_event(
        &EventPayload::Lifecycle {
            message: format!("shutting down: {}", reason),
        },
        LogLevel::Info,
    );
    if let Err((_conn, e)) = conn.close() {
        log::warn!("Failed to close the catalog connection: {}", e);
    }
    log::info!("Shutdown complete ({})", reason);
}

fn main_loop(
    conn: &Connection,
    log: &EventLog,
    prompter: &mut Prompter,
) -> Result<(), PromptError> {
    loop {
        view::show_message("=== MENU ===");
        println!("1. Search by keyword");
        println!("2. Search by genre and years");
        println!("3. Search statistics");
        println!("4. Exit");
        let choice =
            prompter.menu_choice("Choose an option (1-4): ", &[1, 2, 3, 4], log, "main_menu")?;
        log::debug!("Main menu choice: {}", choice);

        match choice {
            1 => keyword_search(conn, log, prompter)?,
            2 => genre_year_search(conn, log, prompter)?,
            3 => statistics(log, prompter)?,
            _ => return Ok(()),
        }
    }
}

/// Keyword flow: run sessions until results were viewed, the user stops,
/// or they decline to try another keyword.
fn keyword_search(
    conn: &Connection,
    log: &EventLog,
    prompter: &mut Prompter,
) -> Result<(), PromptError> {
    log::info!("Starting keyword search.");
    let mut keyword = prompter.keyword(log)?;
    loop {
        let params = SearchParams::keyword(keyword.clone());
        let outcome = {
            let mut ui = ConsoleSession {
                prompter: &mut *prompter,
                log,
            };
            run_search_session(conn, log, &params, &mut ui, |conn, offset| {
                search_by_keyword(conn, &keyword, offset)
            })?
        };

        if outcome != SessionOutcome::NoResults {
            return Ok(());
        }
        if !prompter.confirm("Try another keyword? (y/n): ", log)? {
            return Ok(());
        }
        keyword = prompter.keyword(log)?;
    }
}

/// Genre flow: pick a genre and year range, then run one session.
/// Cancelling the genre selection returns to the menu before any query.
fn genre_year_search(
    conn: &Connection,
    log: &EventLog,
    prompter: &mut Prompter,
) -> Result<(), PromptError> {
    log::info!("Starting genre/year search.");
    let bounds = match genre_year_bounds(conn) {
        Ok(bounds) => bounds,
        Err(e) => {
            log.log_event(
                &EventPayload::SearchError {
                    context: "genre_year".to_string(),
                    details: "loading genres and year bounds".to_string(),
                    error: e.to_string(),
                },
                LogLevel::Error,
            );
            view::show_error(&format!("Could not load genres: {}", e));
            return Ok(());
        }
    };
    view::show_genres(&bounds.genres);
    view::show_year_range(bounds.min_year, bounds.max_year);

    let Some(genre) = prompter.genre(&bounds.genres, log)? else {
        return Ok(());
    };
    let (year_from, year_to) = prompter.year_range(bounds.min_year, bounds.max_year, log)?;

    let params = SearchParams::genre_year(genre.clone(), year_from, year_to);
    let mut ui = ConsoleSession {
        prompter: &mut *prompter,
        log,
    };
    run_search_session(conn, log, &params, &mut ui, |conn, offset| {
        search_by_genre_and_year(conn, &genre, year_from, year_to, offset)
    })?;
    Ok(())
}

fn statistics(log: &EventLog, prompter: &mut Prompter) -> Result<(), PromptError> {
    log::info!("Showing statistics menu.");
    view::show_message("STATISTICS:");
    println!("1. Most frequent searches");
    println!("2. Most recent unique searches");
    let choice = prompter.menu_choice("Choose an option (1-2): ", &[1, 2], log, "statistics_menu")?;

    match choice {
        1 => {
            let entries = top_searches(log, DEFAULT_STATS_LIMIT);
            view::show_stats("Most frequent searches", &entries);
        }
        _ => {
            let entries = recent_unique_searches(log, DEFAULT_STATS_LIMIT);
            view::show_stats("Most recent unique searches", &entries);
        }
    }
    Ok(())
}
