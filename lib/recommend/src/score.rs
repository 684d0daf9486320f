//! Similarity scorer
//!
//! Computes one similarity row per resolved record of a liked track, ranks
//! the pool by the first record's row and keeps that liked track's top-N.

use crate::matcher::MatchSet;
use crate::pool::CandidatePool;
use std::cmp::Ordering;
use tunematch_core::Track;

/// A candidate scored against one liked track
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub track: &'a Track,
    /// Cosine similarity of the feature vectors, in [-1, 1]
    pub similarity: f64,
    /// Either 0 or the configured bonus
    pub genre_bonus: f64,
    pub final_score: f64,
}

/// Scores candidate pools against liked tracks
#[derive(Debug, Clone)]
pub struct Scorer {
    genre_bonus: f64,
    top_n: usize,
}

impl Scorer {
    pub fn new(genre_bonus: f64, top_n: usize) -> Self {
        Self { genre_bonus, top_n }
    }

    pub fn genre_bonus(&self) -> f64 {
        self.genre_bonus
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Score one candidate against one resolved liked record
    pub fn score_candidate<'a>(
        &self,
        query: &Track,
        candidate: &'a Track,
    ) -> ScoredCandidate<'a> {
        let similarity = query.features.cosine_similarity(&candidate.features);
        self.with_bonus(query, candidate, similarity)
    }

    fn with_bonus<'a>(
        &self,
        query: &Track,
        candidate: &'a Track,
        similarity: f64,
    ) -> ScoredCandidate<'a> {
        let genre_bonus = if candidate.genre == query.genre {
            self.genre_bonus
        } else {
            0.0
        };
        ScoredCandidate {
            track: candidate,
            similarity,
            genre_bonus,
            final_score: similarity + genre_bonus,
        }
    }

    /// Cosine similarity of every matched record against every candidate
    ///
    /// One row per matched record, in catalog order, each row in pool order.
    pub fn similarity_rows(
        &self,
        matches: &MatchSet<'_>,
        pool: &CandidatePool<'_>,
    ) -> Vec<Vec<f64>> {
        matches
            .tracks
            .iter()
            .map(|query| {
                pool.tracks()
                    .iter()
                    .map(|candidate| query.features.cosine_similarity(&candidate.features))
                    .collect()
            })
            .collect()
    }

    /// Top-N candidates for one liked track
    ///
    /// When the liked track resolves to several records, only the first one
    /// in catalog order ranks the pool: its similarity row is the score and
    /// its genre earns the bonus. The other records still shape the genre
    /// preferences. Ties keep pool order.
    pub fn score<'a>(
        &self,
        matches: &MatchSet<'_>,
        pool: &CandidatePool<'a>,
    ) -> Vec<ScoredCandidate<'a>> {
        let Some(query) = matches.tracks.first().copied() else {
            return Vec::new();
        };
        let rows = self.similarity_rows(matches, pool);

        let mut results: Vec<ScoredCandidate<'a>> = pool
            .tracks()
            .iter()
            .copied()
            .zip(&rows[0])
            .map(|(candidate, &similarity)| self.with_bonus(query, candidate, similarity))
            .collect();
        sort_by_score_desc(&mut results, |c| c.final_score);
        results.truncate(self.top_n);
        results
    }
}

/// Stable descending sort, so equal scores keep their input order
pub(crate) fn sort_by_score_desc<T>(items: &mut [T], score: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
}
