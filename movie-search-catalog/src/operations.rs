//! Write operations for populating the film catalog.

use rusqlite::{params, Connection};

use crate::queries::CatalogError;

/// A film with its genres, as accepted by [`seed_films`].
#[derive(Debug, Clone)]
pub struct FilmSeed {
    pub title: String,
    pub description: Option<String>,
    pub release_year: i32,
    pub rating: Option<String>,
    pub genres: Vec<String>,
}

/// Insert films and their genre links, creating categories as needed.
pub fn seed_films(conn: &Connection, films: &[FilmSeed]) -> Result<(), CatalogError> {
    for film in films {
        conn.execute(
            "INSERT INTO film (title, description, release_year, rating)
             VALUES (?1, ?2, ?3, ?4)",
            params![film.title, film.description, film.release_year, film.rating],
        )?;
        let film_id = conn.last_insert_rowid();
        for genre in &film.genres {
            conn.execute(
                "INSERT OR IGNORE INTO category (name) VALUES (?1)",
                params![genre],
            )?;
            conn.execute(
                "INSERT INTO film_category (film_id, category_id)
                 SELECT ?1, category_id FROM category WHERE name = ?2",
                params![film_id, genre],
            )?;
        }
    }
    Ok(())
}
