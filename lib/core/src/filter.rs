// Track filter conditions over catalog records
use ahash::AHashSet;
use crate::track::{fold, Track};

pub trait Filter {
    fn matches(&self, track: &Track) -> bool;
}

pub struct TrackFilter {
    condition: TrackCondition,
}

/// A predicate over a track's identity fields
///
/// Name and artist conditions compare case-folded text and hold their
/// operands already folded; genre conditions compare genre labels exactly.
#[derive(Debug, Clone)]
pub enum TrackCondition {
    NameEquals(String),
    ArtistContains(String),
    NameIn(AHashSet<String>),
    GenreIn(AHashSet<String>),
    And(Vec<TrackCondition>),
    Not(Box<TrackCondition>),
}

impl TrackCondition {
    pub fn name_equals(name: &str) -> Self {
        TrackCondition::NameEquals(fold(name))
    }

    pub fn artist_contains(artist: &str) -> Self {
        TrackCondition::ArtistContains(fold(artist))
    }

    pub fn name_in<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TrackCondition::NameIn(names.into_iter().map(|n| fold(n.as_ref())).collect())
    }

    pub fn genre_in<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TrackCondition::GenreIn(genres.into_iter().map(Into::into).collect())
    }

    pub fn negate(self) -> Self {
        TrackCondition::Not(Box::new(self))
    }
}

impl TrackFilter {
    pub fn new(condition: TrackCondition) -> Self {
        Self { condition }
    }

    pub fn condition(&self) -> &TrackCondition {
        &self.condition
    }

    fn matches_condition(condition: &TrackCondition, track: &Track) -> bool {
        match condition {
            TrackCondition::NameEquals(name) => track.name_folded() == name.as_str(),
            TrackCondition::ArtistContains(artist) => {
                track.artists_folded().contains(artist.as_str())
            }
            TrackCondition::NameIn(names) => names.contains(track.name_folded()),
            TrackCondition::GenreIn(genres) => genres.contains(track.genre.as_str()),
            TrackCondition::And(conditions) => {
                conditions.iter().all(|c| Self::matches_condition(c, track))
            }
            TrackCondition::Not(condition) => !Self::matches_condition(condition, track),
        }
    }
}

impl Filter for TrackFilter {
    fn matches(&self, track: &Track) -> bool {
        Self::matches_condition(&self.condition, track)
    }
}
