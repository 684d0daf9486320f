//! Header lookup shared by the loaders

use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use tunematch_core::{Error, Result};

/// CSV reader with trimmed cells, tolerating short rows
pub(crate) fn reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input)
}

pub(crate) fn csv_error(err: csv::Error) -> Error {
    Error::Csv(err.to_string())
}

pub(crate) fn find(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|h| h == column)
}

pub(crate) fn require(headers: &StringRecord, column: &str, input: &str) -> Result<usize> {
    find(headers, column).ok_or_else(|| Error::missing_column(input, column))
}

/// Cell at `index`, empty when the row is short
pub(crate) fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}

/// 1-based line of a record, for error messages
pub(crate) fn line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}
