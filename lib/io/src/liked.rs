//! Liked-tracks loader

use crate::columns::{self, cell, csv_error};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};
use tunematch_core::{LikedTrack, Result};

pub const NAME_COLUMN: &str = "Name";
pub const ARTIST_COLUMN: &str = "Artist";

/// Load liked tracks from a CSV file
pub fn load_liked_tracks(path: impl AsRef<Path>) -> Result<Vec<LikedTrack>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_liked_tracks(file, &path.display().to_string())
}

/// Read liked tracks from CSV; `input` names the source in errors and logs
///
/// `Name` is required. Without an `Artist` column every track matches by name
/// alone. Rows with an empty name are skipped.
pub fn read_liked_tracks<R: Read>(reader: R, input: &str) -> Result<Vec<LikedTrack>> {
    let mut reader = columns::reader(reader);
    let headers = reader.headers().map_err(csv_error)?.clone();

    let name_idx = columns::require(&headers, NAME_COLUMN, input)?;
    let artist_idx = columns::find(&headers, ARTIST_COLUMN);
    if artist_idx.is_none() {
        warn!(
            "{} has no '{}' column, matching liked tracks by name only",
            input, ARTIST_COLUMN
        );
    }

    let mut liked = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let name = cell(&record, name_idx);
        if name.is_empty() {
            warn!("Skipping row with empty name on line {} of {}", columns::line(&record), input);
            continue;
        }
        let artist = artist_idx.map(|idx| cell(&record, idx).to_string());
        liked.push(LikedTrack::new(name, artist));
    }

    info!("Loaded {} liked tracks from {}", liked.len(), input);
    Ok(liked)
}
