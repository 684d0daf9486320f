//! Candidate pool
//!
//! The catalog subset every liked track is scored against. It is built once
//! per run:
//! 1. restrict to the preferred genres, unless there are none
//! 2. drop every track whose name equals a liked name, case-insensitively and
//!    regardless of artist, so covers of a liked title are excluded as well

use crate::diagnostics::{DiagnosticEvent, Diagnostics};
use crate::genre::GenrePreferences;
use tunematch_core::{Filter, LikedTrack, NormalizedCatalog, Track, TrackCondition, TrackFilter};

#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    tracks: Vec<&'a Track>,
    /// Genre-eligible tracks removed because they carry a liked title
    excluded: usize,
}

impl<'a> CandidatePool<'a> {
    pub fn build(
        catalog: &'a NormalizedCatalog,
        preferences: &GenrePreferences,
        liked: &[LikedTrack],
        diagnostics: &dyn Diagnostics,
    ) -> Self {
        let genre_filter = preferences.condition().map(TrackFilter::new);
        match genre_filter {
            Some(_) => diagnostics.emit(&DiagnosticEvent::GenrePreferences {
                genres: preferences.to_vec(),
            }),
            None => diagnostics.emit(&DiagnosticEvent::NoGenrePreferences),
        }

        let liked_titles = TrackCondition::name_in(liked.iter().map(|l| &l.name));
        let not_liked = TrackFilter::new(liked_titles.negate());

        let mut excluded = 0;
        let tracks: Vec<&'a Track> = catalog
            .tracks()
            .iter()
            .filter(|t| genre_filter.as_ref().map(|f| f.matches(t)).unwrap_or(true))
            .filter(|t| {
                let keep = not_liked.matches(t);
                if !keep {
                    excluded += 1;
                }
                keep
            })
            .collect();

        diagnostics.emit(&DiagnosticEvent::LikedTitlesExcluded {
            titles: liked.len(),
            removed: excluded,
        });

        Self { tracks, excluded }
    }

    pub fn tracks(&self) -> &[&'a Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn excluded(&self) -> usize {
        self.excluded
    }
}
