//! CSV serialization of a [`Table`].
//!
//! Comma-delimited, `\n` line endings, header first, fields quoted only when
//! they contain a delimiter, quote or line break. No index column.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{CsvError, CsvResult};
use crate::models::Table;

/// Write `table` to any writer.
pub fn write_table<W: Write>(table: &Table, writer: W) -> CsvResult<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b',')
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(table.headers())?;
    for row in table.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Create (or truncate) `path` and write `table` to it.
pub fn write_table_file<P: AsRef<Path>>(table: &Table, path: P) -> CsvResult<()> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| CsvError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut out = BufWriter::new(file);
    write_table(table, &mut out).map_err(|e| match e {
        CsvError::Parse(err) if err.is_io_error() => io_error(into_io_error(err)),
        other => other,
    })?;
    out.flush().map_err(io_error)?;
    Ok(())
}

/// Unwrap the I/O error carried by a csv write failure.
fn into_io_error(err: csv::Error) -> std::io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        other => std::io::Error::new(std::io::ErrorKind::Other, format!("{:?}", other)),
    }
}
