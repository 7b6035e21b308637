//! Reference layout configuration.
//!
//! Where the Cell Ranger references and the demultiplexed FASTQ files live
//! on the cluster. Defaults match the production filesystem; library users
//! and tests can swap any of it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Base directory holding the Cell Ranger reference packages.
pub const DEFAULT_REFERENCE_BASE: &str = "/datos/ngs/dato-activo/References/cellRanger";

/// Root of the demultiplexed FASTQ tree.
pub const DEFAULT_DATA_ROOT: &str = "/datos/ngs/dato-activo/data/04_pfastq";

/// Reference package for `hg38`.
pub const HG38_REFERENCE: &str = "refdata-cellranger-GRCh38-3.0.0";

/// Reference package for `mm10`.
pub const MM10_REFERENCE: &str = "refdata-gex-mm10-2020-A";

/// Filesystem layout used to derive the new samplesheet columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Directory containing one sub-directory per reference package
    pub reference_base: PathBuf,

    /// Root of the `<platform>/<run>/<lane>/<user>/demux_fastq` tree
    pub data_root: PathBuf,

    /// Genome code -> reference package directory (relative to `reference_base`)
    pub genomes: BTreeMap<String, String>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        let genomes = BTreeMap::from([
            ("hg38".to_string(), HG38_REFERENCE.to_string()),
            ("mm10".to_string(), MM10_REFERENCE.to_string()),
        ]);
        Self {
            reference_base: PathBuf::from(DEFAULT_REFERENCE_BASE),
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            genomes,
        }
    }
}

impl ReferenceConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_reference_base(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reference_base = dir.into();
        self
    }

    pub fn with_data_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_root = dir.into();
        self
    }

    /// Register (or replace) the reference package for a genome code.
    pub fn with_genome(mut self, code: impl Into<String>, package: impl Into<String>) -> Self {
        self.genomes.insert(code.into(), package.into());
        self
    }

    /// Reference directory for `genome`, with a trailing `/`.
    ///
    /// Unknown codes yield `None`. Lookup is exact and case-sensitive.
    pub fn transcriptome_for(&self, genome: &str) -> Option<String> {
        self.genomes.get(genome).map(|package| {
            format!(
                "{}/{}/",
                root_str(&self.reference_base),
                package.trim_matches('/')
            )
        })
    }

    /// `data_root` without a trailing separator.
    pub fn data_root_str(&self) -> String {
        root_str(&self.data_root)
    }
}

/// Render a root directory for string concatenation.
///
/// A lone `/` stays empty so joined paths come out as `/x` instead of `//x`.
fn root_str(path: &Path) -> String {
    path.to_string_lossy().trim_end_matches('/').to_string()
}
