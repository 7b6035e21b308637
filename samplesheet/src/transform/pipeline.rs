//! High-level pipeline: read samplesheet, add derived columns, write it back.
//!
//! # Example
//!
//! ```rust,no_run
//! use samplesheet::{modify_samplesheet, ReferenceConfig};
//! use std::path::Path;
//!
//! let summary = modify_samplesheet(
//!     Path::new("samplesheet.csv"),
//!     Path::new("samplesheet.augmented.csv"),
//!     &ReferenceConfig::default(),
//! )?;
//! println!("Wrote {} rows", summary.row_count);
//! # Ok::<(), samplesheet::PipelineError>(())
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::paths::derive_paths;
use crate::config::ReferenceConfig;
use crate::error::{PipelineResult, TransformResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning, log_warning_indent};
use crate::models::{Column, SampleColumns, Table, FASTQ1, FASTQ2, TRANSCRIPTOME};
use crate::parser::{parse_csv_file, write_table_file};

/// Outcome of [`augment`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AugmentReport {
    /// Rows processed
    pub rows: usize,

    /// Rows whose genome code has no reference (empty `transcriptome`)
    pub rows_without_reference: usize,

    /// Distinct unknown genome codes, in first-seen order
    pub unknown_genomes: Vec<String>,
}

/// Summary of a complete file-to-file run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub encoding: String,
    pub row_count: usize,
    pub input_columns: usize,
    pub output_columns: usize,
    pub report: AugmentReport,
}

/// Add `transcriptome`, `fastq1` and `fastq2` to `table`.
///
/// All required columns are resolved before anything is computed, so a
/// missing column leaves the table untouched. Derived columns go after the
/// existing ones; a column that already carries one of those names is
/// overwritten in place. Unknown genome codes give an empty `transcriptome`
/// and are listed in the report.
pub fn augment(table: &mut Table, config: &ReferenceConfig) -> TransformResult<AugmentReport> {
    let mut report = AugmentReport::default();

    let (transcriptome, fastq1, fastq2) = {
        let columns = SampleColumns::resolve(table)?;
        let mut transcriptome = Vec::with_capacity(columns.len());
        let mut fastq1 = Vec::with_capacity(columns.len());
        let mut fastq2 = Vec::with_capacity(columns.len());

        for record in columns.records() {
            let derived = derive_paths(config, &record);
            match derived.transcriptome {
                Some(path) => transcriptome.push(path),
                None => {
                    report.rows_without_reference += 1;
                    if !report.unknown_genomes.iter().any(|g| g == record.genome) {
                        report.unknown_genomes.push(record.genome.to_string());
                    }
                    transcriptome.push(String::new());
                }
            }
            fastq1.push(derived.fastq.r1);
            fastq2.push(derived.fastq.r2);
        }
        (transcriptome, fastq1, fastq2)
    };

    report.rows = transcriptome.len();
    table.set_column(Column::new(TRANSCRIPTOME, transcriptome))?;
    table.set_column(Column::new(FASTQ1, fastq1))?;
    table.set_column(Column::new(FASTQ2, fastq2))?;

    Ok(report)
}

/// Read `input`, augment it and write the result to `output`.
///
/// The output file is only created once the derived columns have been
/// computed, so input and column errors leave no output behind.
pub fn modify_samplesheet(
    input: &Path,
    output: &Path,
    config: &ReferenceConfig,
) -> PipelineResult<PipelineSummary> {
    log_info(format!("📖 Reading samplesheet: {}", input.display()));
    let parsed = parse_csv_file(input)?;
    let mut table = parsed.table;
    let input_columns = table.n_cols();

    log_success(format!("Detected encoding: {}", parsed.encoding));
    log_success(format!("Read {} rows", table.n_rows()));
    log_info(format!("📋 Samplesheet has {} columns:", input_columns));
    for (i, col) in table.headers().iter().enumerate() {
        log_info_indent(format!("[{:2}] {}", i + 1, col), 1);
    }

    log_info("⚙️  Deriving transcriptome and FASTQ paths...");
    let report = augment(&mut table, config)?;
    print_report(&report);

    log_info(format!("💾 Writing samplesheet: {}", output.display()));
    write_table_file(&table, output)?;
    log_success(format!(
        "Wrote {} rows x {} columns",
        table.n_rows(),
        table.n_cols()
    ));

    Ok(PipelineSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        encoding: parsed.encoding,
        row_count: table.n_rows(),
        input_columns,
        output_columns: table.n_cols(),
        report,
    })
}

/// Print augmentation result details
fn print_report(report: &AugmentReport) {
    log_success(format!("Derived paths for {} rows", report.rows));

    if report.rows_without_reference > 0 {
        log_warning(format!(
            "{} rows have no reference transcriptome (left empty)",
            report.rows_without_reference
        ));
        for genome in &report.unknown_genomes {
            log_warning_indent(format!("unknown genome code: '{}'", genome), 1);
        }
    }
}
