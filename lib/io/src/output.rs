//! Result writers
//!
//! Three renderings of a [`RecommendationReport`]: an aligned console table,
//! CSV with the five result columns, and JSON carrying the full records and
//! run statistics.

use crate::columns::csv_error;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use tunematch_core::{Error, Result};
use tunematch_recommend::{Recommendation, RecommendResponse, RecommendationReport};

/// Columns of the CSV rendering, in order
pub const CSV_COLUMNS: [&str; 5] = [
    "track_name",
    "artists",
    "track_genre",
    "similarity",
    "final_score",
];

const EMPTY_MESSAGE: &str = "No recommendations found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::InvalidConfig(format!(
                "unknown output format '{}', expected table, csv or json",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Table => "table",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        })
    }
}

/// Render a report in the requested format
pub fn write_report<W: Write>(
    report: &RecommendationReport,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(report, writer),
        OutputFormat::Csv => write_csv(report.recommendations(), writer),
        OutputFormat::Json => write_json(report, writer),
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    track_name: &'a str,
    artists: &'a str,
    track_genre: &'a str,
    similarity: f64,
    final_score: f64,
}

impl<'a> From<&'a Recommendation> for CsvRow<'a> {
    fn from(r: &'a Recommendation) -> Self {
        Self {
            track_name: &r.track_name,
            artists: &r.artists,
            track_genre: &r.track_genre,
            similarity: r.similarity,
            final_score: r.final_score,
        }
    }
}

/// CSV with a header row, written even when there are no results
pub fn write_csv<W: Write>(results: &[Recommendation], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(CSV_COLUMNS).map_err(csv_error)?;
    for result in results {
        writer.serialize(CsvRow::from(result)).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(report: &RecommendationReport, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &RecommendResponse::from(report))
        .map_err(|e| Error::Serialization(e.to_string()))?;
    writeln!(writer)?;
    Ok(())
}

/// Aligned console table, or an explicit message when there is nothing to show
pub fn write_table<W: Write>(report: &RecommendationReport, mut writer: W) -> Result<()> {
    if let Some(reason) = report.outcome.empty_reason() {
        writeln!(writer, "{}: {}.", EMPTY_MESSAGE, reason)?;
        return Ok(());
    }

    let rows: Vec<[String; 6]> = report
        .recommendations()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            [
                (i + 1).to_string(),
                r.track_name.clone(),
                r.artists.clone(),
                r.track_genre.clone(),
                format!("{:.4}", r.similarity),
                format!("{:.4}", r.final_score),
            ]
        })
        .collect();

    let [name, artists, genre, similarity, score] = CSV_COLUMNS;
    let header = ["#", name, artists, genre, similarity, score];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(writer, "Recommended tracks:")?;
    write_row(&mut writer, &header, &widths)?;
    for row in &rows {
        write_row(&mut writer, row, &widths)?;
    }
    Ok(())
}

/// Text columns are left aligned, the rank and scores right aligned
fn write_row<W: Write, S: AsRef<str>>(
    writer: &mut W,
    cells: &[S; 6],
    widths: &[usize; 6],
) -> Result<()> {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let cell = cell.as_ref();
        let pad = " ".repeat(width.saturating_sub(cell.chars().count()));
        if matches!(i, 0 | 4 | 5) {
            line.push_str(&pad);
            line.push_str(cell);
        } else {
            line.push_str(cell);
            line.push_str(&pad);
        }
    }
    writeln!(writer, "{}", line.trim_end())?;
    Ok(())
}
