//! Liked track resolution
//!
//! Resolves a [`LikedTrack`] reference to the catalog records it names.
//! Matching is case-insensitive. With an artist, the catalog name must equal
//! the liked name and the catalog artist credit must contain the liked artist
//! (credits can list several artists). Without an artist, the name alone
//! decides.

use tunematch_core::{LikedTrack, NormalizedCatalog, Track, TrackCondition, TrackFilter};

/// Catalog records resolved for one liked track, in catalog order
#[derive(Debug, Clone)]
pub struct MatchSet<'a> {
    pub liked: &'a LikedTrack,
    pub tracks: Vec<&'a Track>,
}

impl<'a> MatchSet<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }
}

/// The filter a liked track resolves through
pub fn liked_filter(liked: &LikedTrack) -> TrackFilter {
    let name = TrackCondition::name_equals(&liked.name);
    let condition = match liked.artist.as_deref() {
        Some(artist) => TrackCondition::And(vec![name, TrackCondition::artist_contains(artist)]),
        None => name,
    };
    TrackFilter::new(condition)
}

/// Resolve one liked track against the catalog
pub fn match_liked<'a>(liked: &'a LikedTrack, catalog: &'a NormalizedCatalog) -> MatchSet<'a> {
    let filter = liked_filter(liked);
    MatchSet {
        liked,
        tracks: catalog.select(&filter),
    }
}

/// Resolve every liked track, keeping liked order
pub fn match_all<'a>(
    liked: &'a [LikedTrack],
    catalog: &'a NormalizedCatalog,
) -> Vec<MatchSet<'a>> {
    liked.iter().map(|l| match_liked(l, catalog)).collect()
}
