//! Record types shared across the catalog API.

/// Number of rows in one result page. Offsets advance in multiples of this.
pub const PAGE_SIZE: usize = 10;

/// A single film row returned from search queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRecord {
    pub title: String,
    pub release_year: i32,
    /// Audience rating label, not present for every film.
    pub rating: Option<String>,
}
