//! End-to-end tests for the `modify-samplesheet` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use samplesheet::config::{DEFAULT_DATA_ROOT, DEFAULT_REFERENCE_BASE, HG38_REFERENCE};
use samplesheet::parse_str;

fn run(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_modify-samplesheet"))
        .arg(input)
        .arg(output)
        .output()
        .unwrap()
}

#[test]
fn test_cli_writes_augmented_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(
        &input,
        "platform,run,lane,user,sampleID,genome\n\
         illumina,R1,L1,alice,S1,hg38\n\
         illumina,R1,L1,alice,S2,unknownGenome\n",
    )
    .unwrap();

    let result = run(&input, &output);
    assert!(result.status.success(), "stderr: {}", String::from_utf8_lossy(&result.stderr));
    assert!(result.stdout.is_empty());

    let table = parse_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.n_cols(), 9);

    let transcriptome = &table.column("transcriptome").unwrap().values;
    assert_eq!(transcriptome[0], format!("{}/{}/", DEFAULT_REFERENCE_BASE, HG38_REFERENCE));
    assert_eq!(transcriptome[1], "");

    assert_eq!(
        table.column("fastq1").unwrap().values[0],
        format!("{}/illumina/R1/L1/alice/demux_fastq/S1_R1_L1_R1.fq.gz", DEFAULT_DATA_ROOT)
    );
    assert_eq!(
        table.column("fastq2").unwrap().values[0],
        format!("{}/illumina/R1/L1/alice/demux_fastq/S1_R1_L1_R2.fq.gz", DEFAULT_DATA_ROOT)
    );
}

#[test]
fn test_cli_missing_column_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "platform,run,lane,user,genome\nillumina,R1,L1,alice,hg38\n").unwrap();

    let result = run(&input, &output);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("sampleID"));
    assert!(!output.exists());
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");

    let result = run(&dir.path().join("absent.csv"), &output);
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());

    let stderr = String::from_utf8_lossy(&result.stderr);
    let error_line = stderr.lines().find(|l| l.contains("❌")).unwrap();
    assert!(error_line.contains("Error: "), "stderr: {stderr}");
    assert!(error_line.contains("absent.csv"), "stderr: {stderr}");
}

#[test]
fn test_cli_announces_input_once() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "platform,run,lane,user,sampleID,genome
p,r,l,u,S1,mm10
").unwrap();

    let result = run(&input, &output);
    assert!(result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    let input_name = input.display().to_string();
    assert_eq!(stderr.lines().filter(|l| l.contains(&input_name)).count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("Reading samplesheet"));
}

#[test]
fn test_cli_requires_two_arguments() {
    let result = Command::new(env!("CARGO_BIN_EXE_modify-samplesheet"))
        .arg("only-one.csv")
        .output()
        .unwrap();
    assert!(!result.status.success());
}
