//! CSV samplesheet reader with encoding detection.
//!
//! Every cell is kept as a string, exactly as written: no trimming, no type
//! inference. The whole file is loaded in memory.

pub mod writer;

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{CsvError, CsvResult};
use crate::models::Table;

pub use writer::{write_table, write_table_file};

/// Parsed samplesheet with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed table
    pub table: Table,
    /// Detected encoding of the source bytes
    pub encoding: String,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to text.
///
/// Valid UTF-8 is taken as is, minus a leading BOM. Anything else goes
/// through chardet; unknown charsets fall back to lossy UTF-8. Latin-1 is
/// decoded with the Windows-1252 table, which keeps 0xA0-0xFF unchanged.
pub fn decode_content(bytes: &[u8]) -> (String, String) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        return (text.to_string(), "utf-8".to_string());
    }

    let encoding = detect_encoding(bytes);
    let text = match encoding.as_str() {
        "iso-8859-1" | "windows-1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        label => match encoding_rs::Encoding::for_label(label.as_bytes()) {
            Some(enc) => enc.decode(bytes).0.into_owned(),
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    (text, encoding)
}

/// Parse comma-delimited text with a header row into a [`Table`].
///
/// Short rows are padded with empty cells. Rows with more fields than the
/// header are rejected. Blank lines are skipped.
///
/// # Example
/// ```
/// use samplesheet::parse_str;
///
/// let table = parse_str("sampleID,genome\nS1,hg38\n").unwrap();
/// assert_eq!(table.n_rows(), 1);
/// assert_eq!(table.column("genome").unwrap().values, vec!["hg38"]);
/// ```
pub fn parse_str(content: &str) -> CsvResult<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(CsvError::RaggedRow {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    Ok(Table::from_rows(&headers, rows))
}

/// Decode and parse raw bytes.
pub fn parse_bytes(bytes: &[u8]) -> CsvResult<ParseResult> {
    let (content, encoding) = decode_content(bytes);
    let table = parse_str(&content)?;
    Ok(ParseResult { table, encoding })
}

/// Read and parse a samplesheet file.
pub fn parse_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bytes(&bytes)
}
