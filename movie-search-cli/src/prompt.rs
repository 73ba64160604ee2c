//! Interactive prompting with validation loops.
//!
//! Every prompt re-asks until the input is valid; rejected input is
//! recorded as a warning-level event. Ctrl+C and Ctrl+D surface as
//! [`PromptError::Cancelled`] and unwind to `main` for orderly shutdown.

use movie_search_log::EventLog;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use thiserror::Error;

use crate::view;

#[derive(Debug, Error)]
pub(crate) enum PromptError {
    /// User interrupted the session (Ctrl+C / Ctrl+D).
    #[error("cancelled by user")]
    Cancelled,

    /// Terminal read failed
    #[error("terminal error: {0}")]
    Terminal(String),
}

impl From<ReadlineError> for PromptError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Interrupted | ReadlineError::Eof => Self::Cancelled,
            other => Self::Terminal(other.to_string()),
        }
    }
}

/// Why a year range was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum YearRangeError {
    #[error("start year is after end year")]
    Inverted,
    #[error("years must be within {min}-{max}")]
    OutOfBounds { min: i32, max: i32 },
}

/// Check a year range against the catalog's known bounds.
pub(crate) fn validate_year_range(
    year_from: i32,
    year_to: i32,
    min_year: i32,
    max_year: i32,
) -> Result<(), YearRangeError> {
    if year_from > year_to {
        return Err(YearRangeError::Inverted);
    }
    if year_from < min_year || year_to > max_year {
        return Err(YearRangeError::OutOfBounds {
            min: min_year,
            max: max_year,
        });
    }
    Ok(())
}

/// Line editor plus the validation loops the menus need.
pub(crate) struct Prompter {
    editor: DefaultEditor,
}

impl Prompter {
    pub(crate) fn new() -> Result<Self, PromptError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        let line = self.editor.readline(prompt)?;
        Ok(line.trim().to_string())
    }

    /// Numbered menu choice restricted to `valid`.
    pub(crate) fn menu_choice(
        &mut self,
        prompt: &str,
        valid: &[u32],
        log: &EventLog,
        context: &str,
    ) -> Result<u32, PromptError> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<u32>() {
                Ok(choice) if valid.contains(&choice) => return Ok(choice),
                _ => {
                    let options = valid
                        .iter()
                        .map(u32::to_string)
                        .collect::<Vec<_>>()
                        .join(", ");
                    view::show_error(&format!("Please choose one of: {}.", options));
                    log.log_input_error(context, &line);
                }
            }
        }
    }

    /// Non-empty search keyword.
    pub(crate) fn keyword(&mut self, log: &EventLog) -> Result<String, PromptError> {
        loop {
            let line = self.read_line("Keyword or part of a title: ")?;
            if !line.is_empty() {
                return Ok(line);
            }
            view::show_error("Keyword must not be empty.");
            log.log_input_error("keyword_input", &line);
        }
    }

    /// Genre choice matched case-insensitively against the catalog's
    /// list; `q` cancels and returns `None`.
    pub(crate) fn genre(
        &mut self,
        genres: &[String],
        log: &EventLog,
    ) -> Result<Option<String>, PromptError> {
        loop {
            let line = self.read_line("Genre ('q' to cancel): ")?;
            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            if let Some(genre) = genres.iter().find(|g| g.eq_ignore_ascii_case(&line)) {
                return Ok(Some(genre.clone()));
            }
            view::show_error("That genre is not in the list. Try again.");
            log.log_input_error("genre_input", &line);
        }
    }

    /// Inclusive year range within the catalog's known bounds.
    pub(crate) fn year_range(
        &mut self,
        min_year: i32,
        max_year: i32,
        log: &EventLog,
    ) -> Result<(i32, i32), PromptError> {
        loop {
            let from_line = self.read_line("From year: ")?;
            let to_line = self.read_line("To year: ")?;
            let (year_from, year_to) = match (from_line.parse::<i32>(), to_line.parse::<i32>()) {
                (Ok(from), Ok(to)) => (from, to),
                _ => {
                    view::show_error("Years must be whole numbers.");
                    log.log_input_error("year_range_input", &format!("{} {}", from_line, to_line));
                    continue;
                }
            };
            match validate_year_range(year_from, year_to, min_year, max_year) {
                Ok(()) => return Ok((year_from, year_to)),
                Err(reason) => {
                    view::show_error(&format!("Invalid year range: {}.", reason));
                    log.log_input_error("year_range_input", &format!("{}-{}", year_from, year_to));
                }
            }
        }
    }

    /// Yes/no question.
    pub(crate) fn confirm(&mut self, prompt: &str, log: &EventLog) -> Result<bool, PromptError> {
        loop {
            let line = self.read_line(prompt)?.to_lowercase();
            match line.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    view::show_error("Please answer 'y' or 'n'.");
                    log.log_input_error("confirm_prompt", &line);
                }
            }
        }
    }
}
