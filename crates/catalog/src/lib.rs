//! # Movie Catalog
//!
//! In-memory analytics over a 16-field comma-delimited movie dataset.
//!
//! ## Main Components
//!
//! - **types**: the `Movie` value entity
//! - **parser**: quote-aware record splitting and field normalization
//! - **catalog**: the `Catalog` collection and its six query operations
//! - **error**: error types for ingestion and queries
//!
//! ## Example Usage
//!
//! ```ignore
//! use movie_catalog::Catalog;
//!
//! let catalog = Catalog::load("data/imdb_top_1000.csv")?;
//!
//! let by_year = catalog.movie_count_by_year();
//! let longest = catalog.top_movies(10, "runtime")?;
//! let hits = catalog.search_movies("Drama", 7.0, 150);
//! ```
//!
//! Ingestion happens once, fully, before any query; every query reads the
//! collection in its original input order and materializes a fresh result,
//! so repeated calls in any order agree.

pub mod catalog;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use error::{CatalogError, RecordError, Result};
pub use types::{CAST_SLOTS, Movie};
