//! # tunematch Recommend
//!
//! A content-based recommendation engine for catalog tracks.
//!
//! Given the tracks a user likes and a normalized catalog, the engine ranks
//! catalog tracks by audio-feature similarity, favouring the genres the liked
//! tracks belong to and never recommending a liked title back.
//!
//! ## Features
//!
//! - **Matching**: Case-insensitive name match, optional artist substring match
//! - **Genre Preferences**: Candidates restricted to the liked tracks' genres
//! - **Cosine Scoring**: Standardized feature similarity plus a genre bonus
//! - **Aggregation**: Per-liked-track top-N merged and deduplicated by name
//! - **Diagnostics**: Structured events for matches, exclusions and misses
//!
//! ## Example
//!
//! ```rust
//! use tunematch_core::{Catalog, FeatureVector, LikedTrack, Track};
//! use tunematch_recommend::{RecommendConfig, Recommender};
//!
//! let catalog = Catalog::from(vec![
//!     Track::new("A", "Artist", "pop", FeatureVector::splat(1.0)),
//!     Track::new("B", "Artist", "pop", FeatureVector::splat(1.0)),
//!     Track::new("C", "Artist", "rock", FeatureVector::splat(-1.0)),
//! ])
//! .normalize();
//!
//! let recommender = Recommender::new(RecommendConfig::default());
//! let report = recommender.recommend(&[LikedTrack::by_name("A")], &catalog).unwrap();
//!
//! assert_eq!(report.recommendations()[0].track_name, "B");
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Matcher   │────>│   Genres    │────>│    Pool     │
//! │ (liked→recs)│     │   (union)   │     │  (filter)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │              ┌─────────────┐           │
//!       └─────────────>│   Scorer    │<──────────┘
//!                      │ (per liked) │
//!                      └─────────────┘
//!                             │
//!                      ┌─────────────┐
//!                      │ Aggregator  │
//!                      │  (top-N)    │
//!                      └─────────────┘
//! ```

pub mod aggregate;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod explain;
pub mod genre;
pub mod matcher;
pub mod pool;
pub mod score;

// Re-export main types for convenience
pub use aggregate::Aggregator;
pub use config::{RecommendConfig, DEFAULT_GENRE_BONUS, DEFAULT_TOP_N};
pub use diagnostics::{
    DiagnosticEvent,
    Diagnostics,
    RecordingDiagnostics,
    SilentDiagnostics,
    TracingDiagnostics,
};
pub use engine::Recommender;
pub use explain::{
    EmptyReason,
    Outcome,
    Recommendation,
    RecommendationReport,
    RecommendationStats,
    RecommendResponse,
};
pub use genre::GenrePreferences;
pub use matcher::{match_all, match_liked, MatchSet};
pub use pool::CandidatePool;
pub use score::{ScoredCandidate, Scorer};
