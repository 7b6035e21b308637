//! Transformation module.
//!
//! - Paths: transcriptome and FASTQ path derivation for one sample
//! - Pipeline: table augmentation and the file-to-file run

pub mod paths;
pub mod pipeline;

pub use paths::*;
pub use pipeline::*;
