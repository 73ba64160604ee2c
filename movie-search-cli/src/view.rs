//! Console rendering for films, statistics, and messages.

use movie_search_catalog::FilmRecord;
use movie_search_log::StatEntry;
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

const PLACEHOLDER: &str = "\u{2014}";

/// Truncate a string to a maximum number of characters, appending "..."
/// if anything was cut.
fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Print a page of film results as a fixed-width table.
pub(crate) fn show_films(films: &[FilmRecord]) {
    println!();
    println!(
        "{}",
        format!("{:<44} {:>4}  {}", "Title", "Year", "Rating")
            .if_supports_color(Stdout, |t| t.bold()),
    );
    println!("{}", "-".repeat(58));
    for film in films {
        println!(
            "{:<44} {:>4}  {}",
            truncate_str(&film.title, 44),
            film.release_year,
            film.rating.as_deref().unwrap_or(PLACEHOLDER),
        );
    }
}

pub(crate) fn show_no_results() {
    println!("\nNothing found.");
}

/// Print statistics entries as a fixed-width table.
pub(crate) fn show_stats(title: &str, entries: &[StatEntry]) {
    println!();
    println!("{}", title.if_supports_color(Stdout, |t| t.bold()));
    if entries.is_empty() {
        println!("No data.");
        return;
    }
    println!("{:<32} {:<16} {}", "Time", "Kind", "Parameters");
    println!("{}", "-".repeat(80));
    for entry in entries {
        println!(
            "{:<32} {:<16} {}",
            truncate_str(&entry.timestamp, 32),
            truncate_str(&entry.label, 16),
            entry.params,
        );
    }
}

pub(crate) fn show_genres(genres: &[String]) {
    println!("\nAvailable genres:");
    for genre in genres {
        println!("- {}", genre);
    }
}

pub(crate) fn show_year_range(min_year: i32, max_year: i32) {
    println!("Known release years: {} - {}", min_year, max_year);
}

/// Print an error message with the standard prefix.
pub(crate) fn show_error(message: &str) {
    eprintln!(
        "\n{} {}",
        "[error]".if_supports_color(Stderr, |t| t.red()),
        message,
    );
}

pub(crate) fn show_message(message: &str) {
    println!("\n{}", message);
}

#[cfg(test)]
mod tests {
    use super::truncate_str;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_str("Heat", 10), "Heat");
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate_str("Casablanca", 7), "Casa...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_str("Амели", 5), "Амели");
    }
}
