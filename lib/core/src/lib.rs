//! # tunematch Core
//!
//! Core library for the tunematch recommender.
//!
//! This crate provides the catalog data model and the numeric building blocks
//! the recommendation engine is assembled from:
//!
//! - [`Track`] / [`LikedTrack`] - Catalog records and user-supplied references
//! - [`FeatureVector`] - The six audio features with cosine similarity
//! - [`FeatureStats`] - Population statistics used for standardization
//! - [`Catalog`] / [`NormalizedCatalog`] - Raw and standardized track collections
//! - [`TrackFilter`] - Composable name, artist and genre predicates
//!
//! ## Example
//!
//! ```rust
//! use tunematch_core::{Catalog, FeatureVector, Track, TrackCondition, TrackFilter};
//!
//! let catalog: Catalog = vec![
//!     Track::new("Hello", "Adele", "pop", FeatureVector::new([80.0, 0.5, 0.4, 0.3, 0.2, 79.0])),
//!     Track::new("Creep", "Radiohead", "rock", FeatureVector::new([75.0, 0.4, 0.5, 0.1, 0.1, 92.0])),
//! ]
//! .into();
//!
//! // Standardize the features once; the catalog is read-only afterwards
//! let catalog = catalog.normalize();
//!
//! let filter = TrackFilter::new(TrackCondition::name_equals("hello"));
//! assert_eq!(catalog.select(&filter).len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod feature;
pub mod filter;
pub mod normalize;
pub mod track;
pub mod vector;

pub use catalog::{Catalog, NormalizedCatalog};
pub use error::{Error, Result};
pub use feature::{Feature, FEATURE_COUNT};
pub use filter::{Filter, TrackCondition, TrackFilter};
pub use normalize::{ColumnStats, FeatureStats, ZERO_VARIANCE_EPSILON};
pub use track::{fold, LikedTrack, Track};
pub use vector::FeatureVector;
