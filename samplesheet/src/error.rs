//! Error types for the samplesheet augmentation pipeline.
//!
//! - [`CsvError`] - reading, parsing and writing samplesheet files
//! - [`TableError`] - column lookups and table shape violations
//! - [`ConfigError`] - loading a reference layout from JSON
//! - [`TransformError`] - deriving the new columns
//! - [`PipelineError`] - top-level file-to-file run
//!
//! Conversion into [`PipelineError`] is automatic via `From`, so `?` works
//! across module boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// CSV Errors
// =============================================================================

/// Errors while reading, parsing or writing a samplesheet.
#[derive(Debug, Error)]
pub enum CsvError {
    /// The file could not be opened, read, created or written.
    #[error("Cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("Invalid CSV format: {0}")]
    Parse(#[from] csv::Error),

    /// No header row.
    #[error("CSV file is empty")]
    EmptyFile,

    /// A data row has more fields than the header.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    RaggedRow {
        line: u64,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Table Errors
// =============================================================================

/// Errors raised by [`crate::models::Table`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A referenced column is not in the header.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A column does not have one value per row.
    #[error("Column '{column}' has {found} values, table has {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while loading a [`crate::config::ReferenceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid JSON document.
    #[error("Invalid reference config: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Transform Errors
// =============================================================================

/// Errors while adding the derived columns.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Table lookup or update failed.
    #[error(transparent)]
    Table(#[from] TableError),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::transform::pipeline::modify_samplesheet`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input or output file could not be processed.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Derived columns could not be computed.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
