//! SQLite persistence layer for the film catalog.
//!
//! Provides schema creation, seeding, and paginated search queries
//! backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod record;
pub mod schema;

pub use rusqlite::Connection;

pub use operations::{seed_films, FilmSeed};
pub use queries::{
    genre_year_bounds, search_by_genre_and_year, search_by_keyword, CatalogError, GenreYearBounds,
};
pub use record::{FilmRecord, PAGE_SIZE};
pub use schema::{open_database, open_memory, SchemaError};
