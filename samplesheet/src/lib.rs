//! # Samplesheet - reference and FASTQ path augmentation
//!
//! Reads a single-cell samplesheet, adds the Cell Ranger reference
//! transcriptome and the paired FASTQ paths for every sample, and writes the
//! table back out.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV input  │────▶│   Parser    │────▶│  Transform  │────▶│ CSV output  │
//! │ (UTF8/L1)   │     │   (Table)   │     │ (+3 columns)│     │  (Table)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use samplesheet::{augment, parse_str, ReferenceConfig};
//!
//! let mut table = parse_str(
//!     "platform,run,lane,user,sampleID,genome\nillumina,R1,L1,alice,S1,hg38\n",
//! ).unwrap();
//! let config = ReferenceConfig::default().with_data_root("/fastq");
//! augment(&mut table, &config).unwrap();
//!
//! assert_eq!(
//!     table.column("fastq1").unwrap().values[0],
//!     "/fastq/illumina/R1/L1/alice/demux_fastq/S1_R1_L1_R1.fq.gz"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Ordered-columns table and sample records
//! - [`config`] - Reference layout (roots and genome map)
//! - [`parser`] - CSV reading and writing
//! - [`transform`] - Path derivation and pipeline
//! - [`logs`] - Progress logging

// Core modules
pub mod error;
pub mod models;
pub mod config;

// I/O
pub mod parser;

// Transformation
pub mod transform;

// Logging
pub mod logs;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, CsvError, PipelineError, TableError, TransformError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Column, SampleColumns, SampleRecord, Table, REQUIRED_COLUMNS};

// =============================================================================
// Re-exports - Config
// =============================================================================

pub use config::ReferenceConfig;

// =============================================================================
// Re-exports - CSV
// =============================================================================

pub use parser::{
    decode_content,
    detect_encoding,
    parse_bytes,
    parse_csv_file,
    parse_str,
    write_table,
    write_table_file,
    ParseResult,
};

// =============================================================================
// Re-exports - Transform
// =============================================================================

pub use transform::paths::{derive_paths, fastq_path, DerivedPaths, FastqPaths, ReadEnd};
pub use transform::pipeline::{augment, modify_samplesheet, AugmentReport, PipelineSummary};
