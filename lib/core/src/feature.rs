//! Audio feature columns
//!
//! The fixed, ordered set of numeric attributes every catalog track carries.
//! Column order is significant: it is the order of components in a
//! [`FeatureVector`](crate::FeatureVector).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of audio features per track
pub const FEATURE_COUNT: usize = 6;

/// A numeric audio attribute of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Popularity,
    Danceability,
    Energy,
    Acousticness,
    Valence,
    Tempo,
}

impl Feature {
    /// All features in vector order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::Popularity,
        Feature::Danceability,
        Feature::Energy,
        Feature::Acousticness,
        Feature::Valence,
        Feature::Tempo,
    ];

    /// Column name used in tabular catalog sources
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Feature::Popularity => "popularity",
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Acousticness => "acousticness",
            Feature::Valence => "valence",
            Feature::Tempo => "tempo",
        }
    }

    /// Position of this feature inside a feature vector
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}
