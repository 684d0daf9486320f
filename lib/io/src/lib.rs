//! # tunematch IO
//!
//! Tabular input and result output for the tunematch recommender.
//!
//! - [`load_liked_tracks`] - Liked-tracks CSV (`Name`, optional `Artist`)
//! - [`load_catalog`] - Catalog CSV with the six audio features
//! - [`write_report`] - Console table, CSV or JSON rendering of a report
//!
//! Every loader has a `read_*` twin taking any [`std::io::Read`], which is
//! what the tests use.

mod columns;

pub mod catalog;
pub mod liked;
pub mod output;

pub use catalog::{load_catalog, read_catalog, CATALOG_COLUMNS};
pub use liked::{load_liked_tracks, read_liked_tracks, ARTIST_COLUMN, NAME_COLUMN};
pub use output::{write_csv, write_json, write_report, write_table, OutputFormat, CSV_COLUMNS};
