//! Core domain types for the movie dataset.

use serde::{Deserialize, Serialize};

/// Number of cast slots every record carries.
pub const CAST_SLOTS: usize = 4;

/// One movie record, parsed and normalized.
///
/// Constructed once during ingestion and never mutated afterwards. Numeric
/// fields use unsigned types, so "never negative after parsing" holds by
/// construction. Three fields use 0 as an "absent in source" sentinel:
/// `rating`, `meta_score`, and `gross_revenue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub released_year: u16,
    /// Age certificate, verbatim from the source (may be empty).
    pub certificate: String,
    pub runtime_minutes: u32,
    /// Genres in source order; duplicates are kept as listed.
    pub genres: Vec<String>,
    /// IMDB rating; 0.0 means the source had none.
    pub rating: f32,
    pub overview: String,
    /// Critic meta score; 0 means the source had none.
    pub meta_score: u32,
    pub director: String,
    /// Exactly four slots in source order; absent members are empty strings.
    pub cast: [String; CAST_SLOTS],
    pub vote_count: u64,
    /// Gross revenue in dollars; 0 means the source had no gross data.
    pub gross_revenue: u64,
}
