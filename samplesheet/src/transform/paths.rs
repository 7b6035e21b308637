//! Path derivation for a single sample.
//!
//! FASTQ layout:
//!
//! ```text
//! <data_root>/<platform>/<run>/<lane>/<user>/demux_fastq/<sampleID>_<run>_<lane>_R1.fq.gz
//! ```
//!
//! Values are concatenated verbatim; nothing checks that the files exist.

use serde::Serialize;

use crate::config::ReferenceConfig;
use crate::models::SampleRecord;

/// Directory name holding demultiplexed reads under each user folder.
pub const DEMUX_DIR: &str = "demux_fastq";

/// Extension of the compressed FASTQ files.
pub const FASTQ_EXT: &str = "fq.gz";

/// Mate of a paired-end read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadEnd {
    R1,
    R2,
}

impl ReadEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadEnd::R1 => "R1",
            ReadEnd::R2 => "R2",
        }
    }
}

/// Both FASTQ paths of a sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FastqPaths {
    pub r1: String,
    pub r2: String,
}

/// Everything derived from one samplesheet row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedPaths {
    /// `None` when the genome code has no reference
    pub transcriptome: Option<String>,
    pub fastq: FastqPaths,
}

/// Reference transcriptome for the record's genome, if known.
pub fn transcriptome_path(config: &ReferenceConfig, record: &SampleRecord<'_>) -> Option<String> {
    config.transcriptome_for(record.genome)
}

/// `<data_root>/<platform>/<run>/<lane>/<user>/demux_fastq`
pub fn fastq_dir(config: &ReferenceConfig, record: &SampleRecord<'_>) -> String {
    format!(
        "{}/{}/{}/{}/{}/{}",
        config.data_root_str(),
        record.platform,
        record.run,
        record.lane,
        record.user,
        DEMUX_DIR
    )
}

/// Full path of one mate's FASTQ file.
pub fn fastq_path(config: &ReferenceConfig, record: &SampleRecord<'_>, read: ReadEnd) -> String {
    format!(
        "{}/{}_{}_{}_{}.{}",
        fastq_dir(config, record),
        record.sample_id,
        record.run,
        record.lane,
        read.as_str(),
        FASTQ_EXT
    )
}

impl FastqPaths {
    pub fn for_record(config: &ReferenceConfig, record: &SampleRecord<'_>) -> Self {
        Self {
            r1: fastq_path(config, record, ReadEnd::R1),
            r2: fastq_path(config, record, ReadEnd::R2),
        }
    }
}

/// Derive the transcriptome and both FASTQ paths for `record`.
pub fn derive_paths(config: &ReferenceConfig, record: &SampleRecord<'_>) -> DerivedPaths {
    DerivedPaths {
        transcriptome: transcriptome_path(config, record),
        fastq: FastqPaths::for_record(config, record),
    }
}
