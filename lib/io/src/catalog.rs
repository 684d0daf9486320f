//! Catalog loader
//!
//! Reads the track catalog with raw feature values. Standardization is left to
//! [`Catalog::normalize`].

use crate::columns::{self, cell, csv_error};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};
use tunematch_core::{Catalog, Error, Feature, FeatureVector, Result, Track, FEATURE_COUNT};

const TRACK_NAME: &str = "track_name";
const ARTISTS: &str = "artists";
const TRACK_GENRE: &str = "track_genre";

/// Columns a catalog must carry; any others are ignored
pub const CATALOG_COLUMNS: [&str; 3 + FEATURE_COUNT] = [
    TRACK_NAME,
    ARTISTS,
    TRACK_GENRE,
    "popularity",
    "danceability",
    "energy",
    "acousticness",
    "valence",
    "tempo",
];

/// Load a catalog from a CSV file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_catalog(file, &path.display().to_string())
}

/// Read a catalog from CSV; `input` names the source in errors and logs
///
/// An empty feature cell loads as missing (NaN). A non-empty cell that is not
/// a number is an [`Error::InvalidValue`]. Rows with an empty track name are
/// skipped.
pub fn read_catalog<R: Read>(reader: R, input: &str) -> Result<Catalog> {
    let mut reader = columns::reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let mut idx = [0usize; CATALOG_COLUMNS.len()];
    for (slot, column) in idx.iter_mut().zip(CATALOG_COLUMNS) {
        *slot = columns::require(&headers, column, input)?;
    }
    let [name_idx, artists_idx, genre_idx, ..] = idx;
    let feature_idx = &idx[3..];

    let mut catalog = Catalog::new();
    let mut missing_values = 0usize;
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = columns::line(&record);

        let name = cell(&record, name_idx);
        if name.is_empty() {
            warn!("Skipping track with empty name on line {} of {}", line, input);
            continue;
        }

        let mut features = FeatureVector::default();
        for feature in Feature::ALL {
            let raw = cell(&record, feature_idx[feature.index()]);
            let value = parse_feature(raw, feature, line)?;
            if value.is_nan() {
                missing_values += 1;
            }
            features[feature] = value;
        }

        catalog.push(Track::new(
            name,
            cell(&record, artists_idx),
            cell(&record, genre_idx),
            features,
        ));
    }

    if missing_values > 0 {
        warn!(
            "{} missing feature values in {}, standardized to the column mean",
            missing_values, input
        );
    }
    info!("Loaded {} catalog tracks from {}", catalog.len(), input);
    Ok(catalog)
}

fn parse_feature(raw: &str, feature: Feature, line: u64) -> Result<f64> {
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| Error::InvalidValue {
        line,
        column: feature.column().to_string(),
        value: raw.to_string(),
    })
}
