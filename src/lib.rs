//! # tunematch
//!
//! A content-based music recommender.
//!
//! tunematch ranks the tracks of a catalog by how closely their audio features
//! resemble the tracks a user likes. Features are standardized across the
//! catalog, compared by cosine similarity, and tracks sharing a liked track's
//! genre get a bonus.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install tunematch
//! tunematch --liked liked_songs.csv --catalog dataset.csv --top-n 10
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use tunematch::prelude::*;
//!
//! let liked = load_liked_tracks("liked_songs.csv").unwrap();
//! let catalog = load_catalog("dataset.csv").unwrap().normalize();
//!
//! let recommender = Recommender::new(RecommendConfig::default());
//! let report = recommender.recommend(&liked, &catalog).unwrap();
//!
//! for rec in report.recommendations() {
//!     println!("{} by {} ({:.3})", rec.track_name, rec.artists, rec.final_score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! tunematch is composed of several crates:
//!
//! - [`tunematch-core`](https://docs.rs/tunematch-core) - Data model (Track, FeatureVector, Catalog, filters, normalization)
//! - [`tunematch-recommend`](https://docs.rs/tunematch-recommend) - Recommendation pipeline (matching, pool, scoring, aggregation)
//! - [`tunematch-io`](https://docs.rs/tunematch-io) - CSV loaders and table / CSV / JSON writers
//!
//! ## Features
//!
//! - **Standardized Features**: Population z-scores over the whole catalog
//! - **Genre Preferences**: Candidates drawn from the liked tracks' genres
//! - **Liked-Title Exclusion**: Liked titles and their covers never come back
//! - **Parallel Scoring**: Optional rayon-backed scoring per liked track

// Re-export core types
pub use tunematch_core::{
    Catalog, NormalizedCatalog,
    Track, LikedTrack,
    Feature, FeatureVector, FeatureStats, ColumnStats,
    Filter, TrackFilter, TrackCondition,
    Error, Result,
};

// Re-export recommendation pipeline
pub use tunematch_recommend::{
    Recommender, RecommendConfig, DEFAULT_GENRE_BONUS, DEFAULT_TOP_N,
    Recommendation, RecommendationReport, RecommendationStats, RecommendResponse,
    Outcome, EmptyReason,
    DiagnosticEvent, Diagnostics, TracingDiagnostics, RecordingDiagnostics, SilentDiagnostics,
};

// Re-export IO
pub use tunematch_io::{
    load_catalog, load_liked_tracks,
    read_catalog, read_liked_tracks,
    write_report, OutputFormat,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, NormalizedCatalog,
        Track, LikedTrack,
        FeatureVector,
        Recommender, RecommendConfig,
        Recommendation, RecommendationReport, Outcome, EmptyReason,
        Error, Result,
        load_catalog, load_liked_tracks, write_report, OutputFormat,
    };
}
