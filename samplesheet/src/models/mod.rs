//! Domain models for samplesheet augmentation.
//!
//! - [`Table`] - ordered sequence of named string columns
//! - [`Column`] - one named column with a value per row
//! - [`SampleColumns`] - the required metadata columns of a table
//! - [`SampleRecord`] - borrowed view of one sample's metadata

use crate::error::{TableError, TableResult};

// =============================================================================
// Column names
// =============================================================================

pub const GENOME: &str = "genome";
pub const PLATFORM: &str = "platform";
pub const RUN: &str = "run";
pub const LANE: &str = "lane";
pub const USER: &str = "user";
pub const SAMPLE_ID: &str = "sampleID";

pub const TRANSCRIPTOME: &str = "transcriptome";
pub const FASTQ1: &str = "fastq1";
pub const FASTQ2: &str = "fastq2";

/// Columns every samplesheet must carry, in lookup order.
pub const REQUIRED_COLUMNS: [&str; 6] = [GENOME, PLATFORM, RUN, LANE, USER, SAMPLE_ID];

// =============================================================================
// Table
// =============================================================================

/// A single named column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub values: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Column-major table of string values.
///
/// Every column holds exactly one value per row. Column order is the header
/// order used when the table is written back out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Create an empty table with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from columns, rejecting columns of different lengths.
    pub fn from_columns(columns: Vec<Column>) -> TableResult<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(TableError::LengthMismatch {
                column: bad.name.clone(),
                expected: n_rows,
                found: bad.len(),
            });
        }
        Ok(Self { columns, n_rows })
    }

    /// Build a table from a header and row-major records.
    ///
    /// Short records are padded with empty values. Extra fields beyond the
    /// header are dropped; callers that care must check beforehand.
    pub fn from_rows<I, R, S>(headers: &[String], rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut columns: Vec<Column> = headers
            .iter()
            .map(|h| Column::new(h.clone(), Vec::new()))
            .collect();
        let mut n_rows = 0;

        for row in rows {
            let mut fields = row.into_iter();
            for column in columns.iter_mut() {
                let value = fields.next().map(Into::into).unwrap_or_default();
                column.values.push(value);
            }
            n_rows += 1;
        }

        Self { columns, n_rows }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Like [`Table::column`], but a missing column is an error.
    pub fn require(&self, name: &str) -> TableResult<&Column> {
        self.column(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    }

    /// Values of row `index` in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.n_rows {
            return None;
        }
        Some(self.columns.iter().map(|c| c.values[index].as_str()).collect())
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.n_rows).map(move |i| self.columns.iter().map(|c| c.values[i].as_str()).collect())
    }

    /// Append `column`, or overwrite the values of an existing column with
    /// the same name in place.
    ///
    /// On a table without columns the new column fixes the row count.
    pub fn set_column(&mut self, column: Column) -> TableResult<()> {
        if !self.columns.is_empty() && column.len() != self.n_rows {
            return Err(TableError::LengthMismatch {
                column: column.name,
                expected: self.n_rows,
                found: column.values.len(),
            });
        }
        if self.columns.is_empty() {
            self.n_rows = column.len();
        }

        match self.position(&column.name) {
            Some(i) => self.columns[i].values = column.values,
            None => self.columns.push(column),
        }
        Ok(())
    }
}

// =============================================================================
// Sample records
// =============================================================================

/// Borrowed metadata of one samplesheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRecord<'a> {
    pub platform: &'a str,
    pub run: &'a str,
    pub lane: &'a str,
    pub user: &'a str,
    pub sample_id: &'a str,
    pub genome: &'a str,
}

/// The required metadata columns of a table, resolved once.
#[derive(Debug, Clone, Copy)]
pub struct SampleColumns<'a> {
    genome: &'a Column,
    platform: &'a Column,
    run: &'a Column,
    lane: &'a Column,
    user: &'a Column,
    sample_id: &'a Column,
}

impl<'a> SampleColumns<'a> {
    /// Look up all required columns, failing on the first one missing
    /// (in [`REQUIRED_COLUMNS`] order).
    pub fn resolve(table: &'a Table) -> TableResult<Self> {
        let [genome, platform, run, lane, user, sample_id] =
            REQUIRED_COLUMNS.map(|name| table.require(name));
        Ok(Self {
            genome: genome?,
            platform: platform?,
            run: run?,
            lane: lane?,
            user: user?,
            sample_id: sample_id?,
        })
    }

    pub fn len(&self) -> usize {
        self.genome.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    pub fn record(&self, index: usize) -> SampleRecord<'a> {
        SampleRecord {
            platform: &self.platform.values[index],
            run: &self.run.values[index],
            lane: &self.lane.values[index],
            user: &self.user.values[index],
            sample_id: &self.sample_id.values[index],
            genome: &self.genome.values[index],
        }
    }

    pub fn records(&self) -> impl Iterator<Item = SampleRecord<'a>> + '_ {
        (0..self.len()).map(move |i| self.record(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn sample_table() -> Table {
        Table::from_rows(
            &headers(&["platform", "run", "lane", "user", "sampleID", "genome", "notes"]),
            vec![
                vec!["illumina", "R1", "L1", "alice", "S1", "hg38", "first"],
                vec!["mgi", "R2", "L3", "bob", "S2", "mm10", ""],
            ],
        )
    }

    #[test]
    fn test_from_rows_keeps_order() {
        let table = sample_table();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 7);
        assert_eq!(table.headers()[0], "platform");
        assert_eq!(table.row(1).unwrap()[0], "mgi");
        assert!(table.row(2).is_none());
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let table = Table::from_rows(&headers(&["a", "b", "c"]), vec![vec!["1"]]);
        assert_eq!(table.row(0).unwrap(), vec!["1", "", ""]);
    }

    #[test]
    fn test_from_columns_rejects_ragged() {
        let err = Table::from_columns(vec![
            Column::new("a", vec!["1".into(), "2".into()]),
            Column::new("b", vec!["1".into()]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TableError::LengthMismatch { column: "b".into(), expected: 2, found: 1 }
        );
    }

    #[test]
    fn test_require_missing_column() {
        let table = sample_table();
        assert!(table.require("genome").is_ok());
        assert_eq!(
            table.require("barcode").unwrap_err(),
            TableError::MissingColumn("barcode".into())
        );
    }

    #[test]
    fn test_set_column_appends_then_replaces() {
        let mut table = sample_table();
        table
            .set_column(Column::new("fastq1", vec!["a".into(), "b".into()]))
            .unwrap();
        assert_eq!(table.n_cols(), 8);
        assert_eq!(table.headers().last(), Some(&"fastq1"));

        table
            .set_column(Column::new("notes", vec!["x".into(), "y".into()]))
            .unwrap();
        assert_eq!(table.n_cols(), 8);
        assert_eq!(table.position("notes"), Some(6));
        assert_eq!(table.column("notes").unwrap().values, vec!["x", "y"]);
    }

    #[test]
    fn test_set_column_length_mismatch() {
        let mut table = sample_table();
        let err = table.set_column(Column::new("fastq1", vec!["a".into()])).unwrap_err();
        assert!(matches!(err, TableError::LengthMismatch { expected: 2, found: 1, .. }));
    }

    #[test]
    fn test_sample_columns_resolve() {
        let table = sample_table();
        let cols = SampleColumns::resolve(&table).unwrap();
        let records: Vec<_> = cols.records().collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].sample_id, "S2");
        assert_eq!(records[1].genome, "mm10");
        assert_eq!(records[0].user, "alice");
    }

    #[test]
    fn test_sample_columns_missing_sample_id() {
        let table = Table::from_rows(
            &headers(&["platform", "run", "lane", "user", "genome"]),
            vec![vec!["illumina", "R1", "L1", "alice", "hg38"]],
        );
        let err = SampleColumns::resolve(&table).unwrap_err();
        assert_eq!(err, TableError::MissingColumn("sampleID".into()));
    }

    #[test]
    fn test_sample_columns_reports_first_required_missing() {
        let table = Table::from_rows(
            &headers(&["platform", "run", "lane", "user"]),
            vec![vec!["illumina", "R1", "L1", "alice"]],
        );
        let err = SampleColumns::resolve(&table).unwrap_err();
        assert_eq!(err, TableError::MissingColumn("genome".into()));

        for missing in REQUIRED_COLUMNS {
            let present: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|name| *name != missing)
                .collect();
            let table = Table::from_rows(&headers(&present), vec![present.clone()]);
            let err = SampleColumns::resolve(&table).unwrap_err();
            assert_eq!(err, TableError::MissingColumn(missing.into()));
        }
    }
}
