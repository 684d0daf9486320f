use crate::feature::{Feature, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Fixed-width vector of a track's audio features, in [`Feature::ALL`] order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct FeatureVector {
    data: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: [f64; FEATURE_COUNT]) -> Self {
        Self { data }
    }

    /// Vector with every component set to `value`
    #[inline]
    #[must_use]
    pub fn splat(value: f64) -> Self {
        Self {
            data: [value; FEATURE_COUNT],
        }
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    #[must_use]
    pub fn get(&self, feature: Feature) -> f64 {
        self.data[feature.index()]
    }

    #[inline]
    pub fn set(&mut self, feature: Feature, value: f64) {
        self.data[feature.index()] = value;
    }

    #[inline]
    #[must_use]
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Euclidean length
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Compute cosine similarity with another vector
    ///
    /// Returns 0.0 when either vector has zero length. The result is clamped
    /// into [-1.0, 1.0] so rounding never escapes the cosine range.
    #[inline]
    #[must_use]
    pub fn cosine_similarity(&self, other: &FeatureVector) -> f64 {
        let norm_a = self.norm();
        let norm_b = other.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        (self.dot(other) / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(data: [f64; FEATURE_COUNT]) -> Self {
        Self::new(data)
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &f64 {
        &self.data[feature.index()]
    }
}

impl IndexMut<Feature> for FeatureVector {
    fn index_mut(&mut self, feature: Feature) -> &mut f64 {
        &mut self.data[feature.index()]
    }
}
