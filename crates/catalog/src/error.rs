//! Error types for the movie-catalog crate.
//!
//! Two levels: `RecordError` covers a single record failing to parse,
//! `CatalogError` covers ingestion and query failures. Ingestion aborts on
//! the first malformed record; there is no best-effort partial catalog.

use thiserror::Error;

/// Reasons a single raw record cannot become a [`Movie`](crate::Movie).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Line split into fewer logical fields than the schema requires
    #[error("expected {expected} fields but found {found}")]
    FieldCountMismatch { expected: usize, found: usize },

    /// A required numeric field was not parseable
    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// A double-quoted span was opened but never closed
    #[error("unterminated quoted field")]
    UnterminatedQuote,
}

/// Errors surfaced by [`Catalog`](crate::Catalog) construction and queries.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record failed to parse; carries the raw line for diagnostics
    #[error("malformed record at line {line}: {source} (raw: {raw:?})")]
    MalformedRecord {
        line: usize,
        raw: String,
        #[source]
        source: RecordError,
    },

    /// The underlying source could not be read
    #[error("failed to read dataset")]
    Ingestion(#[from] std::io::Error),

    /// A query received an unusable parameter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
