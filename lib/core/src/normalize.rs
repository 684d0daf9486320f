//! Feature standardization
//!
//! Rescales every feature column of a catalog to zero mean and unit variance
//! using population statistics over the whole catalog.
//!
//! Two degenerate cases never fault:
//! - a constant column standardizes every value to `0.0`. A column counts as
//!   constant when its standard deviation is zero or within
//!   [`ZERO_VARIANCE_EPSILON`] of its mean's magnitude, the rounding left by
//!   averaging identical values
//! - a missing (non-finite) value is left out of the statistics and
//!   standardizes to `0.0`, i.e. the column mean

use crate::feature::{Feature, FEATURE_COUNT};
use crate::track::Track;
use crate::vector::FeatureVector;
use serde::Serialize;

/// Relative spread at or below which a column is treated as constant
pub const ZERO_VARIANCE_EPSILON: f64 = 1e-12;

/// Population statistics of one feature column
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ColumnStats {
    pub mean: f64,
    pub std_dev: f64,
    /// Number of finite values the statistics were computed from
    pub count: usize,
}

impl ColumnStats {
    /// Two-pass population mean and standard deviation over finite values
    pub fn compute<I>(values: I) -> Self
    where
        I: Iterator<Item = f64> + Clone,
    {
        let (sum, count) = values
            .clone()
            .filter(|v| v.is_finite())
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

        if count == 0 {
            return Self::default();
        }

        let mean = sum / count as f64;
        let variance = values
            .filter(|v| v.is_finite())
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / count as f64;

        Self {
            mean,
            std_dev: variance.sqrt(),
            count,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.std_dev <= ZERO_VARIANCE_EPSILON * self.mean.abs()
    }

    /// Standardize a single raw value against this column
    #[inline]
    pub fn standardize(&self, value: f64) -> f64 {
        if !value.is_finite() || self.is_degenerate() {
            return 0.0;
        }
        (value - self.mean) / self.std_dev
    }
}

/// Statistics for every feature column of a catalog
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FeatureStats {
    columns: [ColumnStats; FEATURE_COUNT],
}

impl FeatureStats {
    /// Compute statistics over the raw features of `tracks`
    pub fn compute(tracks: &[Track]) -> Self {
        let mut columns = [ColumnStats::default(); FEATURE_COUNT];
        for feature in Feature::ALL {
            columns[feature.index()] =
                ColumnStats::compute(tracks.iter().map(|t| t.features[feature]));
        }
        Self { columns }
    }

    #[inline]
    pub fn column(&self, feature: Feature) -> &ColumnStats {
        &self.columns[feature.index()]
    }

    /// Features whose column had zero variance
    pub fn degenerate_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|f| self.column(*f).is_degenerate())
            .collect()
    }

    /// Standardize a raw feature vector
    pub fn standardize(&self, raw: &FeatureVector) -> FeatureVector {
        let mut out = FeatureVector::default();
        for feature in Feature::ALL {
            out[feature] = self.column(feature).standardize(raw[feature]);
        }
        out
    }

    /// Replace every track's raw features with standardized values
    pub fn apply(&self, tracks: &mut [Track]) {
        for track in tracks.iter_mut() {
            track.features = self.standardize(&track.features);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, features: [f64; FEATURE_COUNT]) -> Track {
        Track::new(name, "artist", "pop", FeatureVector::new(features))
    }

    #[test]
    fn test_column_stats_population() {
        let stats = ColumnStats::compute([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter());
        assert!((stats.mean - 5.0).abs() < 1e-12);
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn test_standardized_columns_have_zero_mean_unit_std() {
        let mut tracks = vec![
            track("a", [10.0, 0.1, 0.9, 0.2, 0.5, 120.0]),
            track("b", [50.0, 0.5, 0.4, 0.8, 0.1, 90.0]),
            track("c", [90.0, 0.9, 0.6, 0.1, 0.9, 160.0]),
            track("d", [30.0, 0.3, 0.2, 0.5, 0.3, 100.0]),
        ];
        let stats = FeatureStats::compute(&tracks);
        stats.apply(&mut tracks);

        for feature in Feature::ALL {
            let after = ColumnStats::compute(tracks.iter().map(|t| t.features[feature]));
            assert!(after.mean.abs() < 1e-9, "{feature} mean {}", after.mean);
            assert!((after.std_dev - 1.0).abs() < 1e-9, "{feature} std {}", after.std_dev);
        }
    }

    #[test]
    fn test_zero_variance_column_maps_to_zero() {
        let mut tracks = vec![
            track("a", [1.0, 0.5, 0.5, 0.5, 0.5, 120.0]),
            track("b", [2.0, 0.5, 0.5, 0.5, 0.5, 120.0]),
        ];
        let stats = FeatureStats::compute(&tracks);
        assert_eq!(stats.degenerate_features().len(), 5);

        stats.apply(&mut tracks);
        for t in &tracks {
            assert_eq!(t.features[Feature::Tempo], 0.0);
            assert!(t.features[Feature::Popularity].is_finite());
        }
    }

    #[test]
    fn test_small_spread_is_not_flattened() {
        let stats = ColumnStats::compute([1e-13, 2e-13, 3e-13].into_iter());
        assert!(!stats.is_degenerate());
        assert!((stats.standardize(3e-13) - 1.224744871391589).abs() < 1e-6);

        let around_zero = ColumnStats::compute([-1e-15, 1e-15].into_iter());
        assert!(!around_zero.is_degenerate());
        assert!((around_zero.standardize(1e-15) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_repeated_inexact_value_is_constant() {
        // 0.1 is not exact in binary, so the mean may carry rounding error
        let stats = ColumnStats::compute([0.1, 0.1, 0.1].into_iter());
        assert!(stats.is_degenerate());
        assert_eq!(stats.standardize(0.1), 0.0);
    }

    #[test]
    fn test_missing_values_excluded_and_mapped_to_zero() {
        let mut tracks = vec![
            track("a", [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            track("b", [f64::NAN, 1.0, 1.0, 1.0, 1.0, 1.0]),
            track("c", [10.0, 2.0, 2.0, 2.0, 2.0, 2.0]),
        ];
        let stats = FeatureStats::compute(&tracks);
        let popularity = stats.column(Feature::Popularity);
        assert_eq!(popularity.count, 2);
        assert!((popularity.mean - 5.0).abs() < 1e-12);

        stats.apply(&mut tracks);
        assert_eq!(tracks[1].features[Feature::Popularity], 0.0);
        assert!((tracks[0].features[Feature::Popularity] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_catalog_stats() {
        let stats = FeatureStats::compute(&[]);
        assert_eq!(stats.degenerate_features().len(), FEATURE_COUNT);
        assert_eq!(stats.standardize(&FeatureVector::splat(3.0)), FeatureVector::default());
    }
}
