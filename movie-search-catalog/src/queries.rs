//! Paginated search queries for the film catalog.

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::record::{FilmRecord, PAGE_SIZE};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("catalog contains no films")]
    EmptyCatalog,
}

/// Search films by keyword in title or description (case-insensitive).
///
/// Returns at most [`PAGE_SIZE`] rows starting at `offset`, ordered by
/// title so pagination windows are stable. Empty keywords are rejected
/// by the caller before this runs.
pub fn search_by_keyword(
    conn: &Connection,
    keyword: &str,
    offset: u32,
) -> Result<Vec<FilmRecord>, CatalogError> {
    let pattern = format!("%{}%", keyword);
    let mut stmt = conn.prepare(
        "SELECT title, release_year, rating
         FROM film
         WHERE title LIKE ?1 OR description LIKE ?1
         ORDER BY title, film_id
         LIMIT ?2 OFFSET ?3",
    )?;
    let rows = stmt.query_map(params![pattern, PAGE_SIZE as i64, offset], row_to_film)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Search films by exact genre and inclusive release-year range.
pub fn search_by_genre_and_year(
    conn: &Connection,
    genre: &str,
    year_from: i32,
    year_to: i32,
    offset: u32,
) -> Result<Vec<FilmRecord>, CatalogError> {
    let mut stmt = conn.prepare(
        "SELECT f.title, f.release_year, f.rating
         FROM film f
         JOIN film_category fc ON f.film_id = fc.film_id
         JOIN category c ON fc.category_id = c.category_id
         WHERE c.name = ?1 AND f.release_year BETWEEN ?2 AND ?3
         ORDER BY f.release_year, f.title
         LIMIT ?4 OFFSET ?5",
    )?;
    let rows = stmt.query_map(
        params![genre, year_from, year_to, PAGE_SIZE as i64, offset],
        row_to_film,
    )?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Genre names and the release-year range known to the catalog.
#[derive(Debug)]
pub struct GenreYearBounds {
    pub genres: Vec<String>,
    pub min_year: i32,
    pub max_year: i32,
}

/// List available genres and the min/max release year.
///
/// An empty catalog has no meaningful year range and yields
/// [`CatalogError::EmptyCatalog`].
pub fn genre_year_bounds(conn: &Connection) -> Result<GenreYearBounds, CatalogError> {
    let mut stmt = conn.prepare("SELECT name FROM category ORDER BY name")?;
    let genres = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    let (min_year, max_year): (Option<i32>, Option<i32>) = conn.query_row(
        "SELECT MIN(release_year), MAX(release_year) FROM film",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    match (min_year, max_year) {
        (Some(min_year), Some(max_year)) => Ok(GenreYearBounds {
            genres,
            min_year,
            max_year,
        }),
        _ => Err(CatalogError::EmptyCatalog),
    }
}

fn row_to_film(row: &rusqlite::Row<'_>) -> rusqlite::Result<FilmRecord> {
    Ok(FilmRecord {
        title: row.get(0)?,
        release_year: row.get(1)?,
        rating: row.get(2)?,
    })
}
