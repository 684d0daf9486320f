//! Genre preferences derived from resolved liked tracks

use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::matcher::MatchSet;
use serde::Serialize;
use std::collections::BTreeSet;
use tunematch_core::TrackCondition;

/// Union of the genres of every resolved liked track
///
/// An empty set means "no genre constraint", not "exclude everything".
/// Genres are kept sorted so reports and diagnostics are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenrePreferences {
    genres: BTreeSet<String>,
}

impl GenrePreferences {
    /// Derive preferences from every liked track's matches
    ///
    /// Emits one [`DiagnosticEvent::GenreMatched`] per matched record.
    pub fn derive(matches: &[MatchSet<'_>], diagnostics: &dyn Diagnostics) -> Self {
        let mut genres = BTreeSet::new();
        for set in matches {
            for track in &set.tracks {
                genres.insert(track.genre.clone());
                diagnostics.emit(&DiagnosticEvent::GenreMatched {
                    name: set.liked.name.clone(),
                    artist: set.liked.artist.clone(),
                    genre: track.genre.clone(),
                });
            }
        }
        Self { genres }
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.genres.contains(genre)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.genres.iter().cloned().collect()
    }

    /// Restriction the preferences impose, `None` when unconstrained
    pub fn condition(&self) -> Option<TrackCondition> {
        if self.is_empty() {
            None
        } else {
            Some(TrackCondition::genre_in(self.genres.iter().cloned()))
        }
    }
}

impl<S: Into<String>> FromIterator<S> for GenrePreferences {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            genres: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::RecordingDiagnostics;
    use crate::matcher::match_all;
    use tunematch_core::{Catalog, FeatureVector, LikedTrack, Track};

    fn catalog() -> tunematch_core::NormalizedCatalog {
        Catalog::from(vec![
            Track::new("Hello", "Adele", "pop", FeatureVector::splat(1.0)),
            Track::new("Hello", "Lionel Richie", "soul", FeatureVector::splat(2.0)),
            Track::new("Creep", "Radiohead", "rock", FeatureVector::splat(3.0)),
            Track::new("Karma Police", "Radiohead", "rock", FeatureVector::splat(4.0)),
        ])
        .normalize()
    }

    #[test]
    fn test_union_of_matched_genres() {
        let catalog = catalog();
        let liked = vec![
            LikedTrack::by_name("Hello"),
            LikedTrack::by_name("Creep"),
            LikedTrack::by_name("Karma Police"),
        ];
        let matches = match_all(&liked, &catalog);
        let diagnostics = RecordingDiagnostics::new();
        let prefs = GenrePreferences::derive(&matches, &diagnostics);

        assert_eq!(prefs.to_vec(), vec!["pop", "rock", "soul"]);
        assert_eq!(prefs.len(), 3);
        // One event per matched record, duplicates included
        assert_eq!(diagnostics.events().len(), 4);
    }

    #[test]
    fn test_no_matches_yields_empty_preferences() {
        let catalog = catalog();
        let liked = vec![LikedTrack::by_name("Unknown Song")];
        let matches = match_all(&liked, &catalog);
        let diagnostics = RecordingDiagnostics::new();
        let prefs = GenrePreferences::derive(&matches, &diagnostics);

        assert!(prefs.is_empty());
        assert!(prefs.condition().is_none());
        assert!(diagnostics.events().is_empty());
    }

    #[test]
    fn test_genre_matched_event_carries_liked_reference() {
        let catalog = catalog();
        let liked = vec![LikedTrack::by_artist("hello", "adele")];
        let matches = match_all(&liked, &catalog);
        let diagnostics = RecordingDiagnostics::new();
        GenrePreferences::derive(&matches, &diagnostics);

        assert_eq!(
            diagnostics.events(),
            vec![DiagnosticEvent::GenreMatched {
                name: "hello".to_string(),
                artist: Some("adele".to_string()),
                genre: "pop".to_string(),
            }]
        );
    }
}
