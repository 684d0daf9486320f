use crate::normalize::FeatureStats;
use crate::track::Track;
use crate::Filter;

/// A catalog of tracks holding raw, unscaled features
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Standardize every feature column in place and seal the catalog
    ///
    /// Consumes the raw catalog so features can only be standardized once.
    pub fn normalize(mut self) -> NormalizedCatalog {
        let stats = FeatureStats::compute(&self.tracks);
        stats.apply(&mut self.tracks);
        NormalizedCatalog {
            tracks: self.tracks,
            stats,
        }
    }
}

impl From<Vec<Track>> for Catalog {
    fn from(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

impl FromIterator<Track> for Catalog {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

/// A catalog whose features have been standardized
///
/// Read-only: every similarity computation in a run sees the same values.
#[derive(Debug, Clone)]
pub struct NormalizedCatalog {
    tracks: Vec<Track>,
    stats: FeatureStats,
}

impl NormalizedCatalog {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Column statistics the catalog was standardized with
    pub fn stats(&self) -> &FeatureStats {
        &self.stats
    }

    /// Tracks matching `filter`, in catalog order
    pub fn select<'a>(&'a self, filter: &dyn Filter) -> Vec<&'a Track> {
        self.tracks.iter().filter(|t| filter.matches(t)).collect()
    }
}
