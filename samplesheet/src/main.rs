//! modify-samplesheet - add transcriptome and FASTQ paths to a samplesheet
//!
//! ```bash
//! modify-samplesheet samplesheet.csv samplesheet.full.csv
//! ```
//!
//! Progress goes to stderr. Exit status is 1 on any error.

use clap::Parser;
use samplesheet::logs::log_error;
use samplesheet::{modify_samplesheet, ReferenceConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modify-samplesheet")]
#[command(version)]
#[command(about = "Check samplesheet and add transcriptome and FASTQ paths", long_about = None)]
#[command(after_help = "Example usage: modify-samplesheet <FILE_IN> <FILE_OUT>")]
struct Cli {
    /// Input samplesheet.
    #[arg(value_name = "FILE_IN")]
    file_in: PathBuf,

    /// Output samplesheet.
    #[arg(value_name = "FILE_OUT")]
    file_out: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    match modify_samplesheet(&cli.file_in, &cli.file_out, &ReferenceConfig::default()) {
        Ok(summary) => {
            eprintln!(
                "\n✨ Done! {} samples written to {}",
                summary.row_count,
                summary.output.display()
            );
        }
        Err(e) => {
            log_error(format!("Error: {}", e));
            std::process::exit(1);
        }
    }
}
