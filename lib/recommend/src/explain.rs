//! Recommendation results and run reports
//!
//! Output structures that explain where each recommendation's score came from
//! and summarize the run that produced them.

use crate::score::ScoredCandidate;
use serde::Serialize;
use std::fmt;

/// A recommended catalog track with its score breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub track_name: String,
    pub artists: String,
    pub track_genre: String,
    /// Cosine similarity to the liked track that surfaced it
    pub similarity: f64,
    pub genre_bonus: f64,
    pub final_score: f64,
    /// Name of the liked track whose scoring pass produced `final_score`
    pub source: String,
}

impl Recommendation {
    pub fn from_scored(candidate: &ScoredCandidate<'_>, source: &str) -> Self {
        Self {
            track_name: candidate.track.name.clone(),
            artists: candidate.track.artists.clone(),
            track_genre: candidate.track.genre.clone(),
            similarity: candidate.similarity,
            genre_bonus: candidate.genre_bonus,
            final_score: candidate.final_score,
            source: source.to_string(),
        }
    }
}

/// Why a run produced nothing to recommend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// The liked set was empty
    NoLikedItems,
    /// None of the liked tracks exist in the catalog
    NoLikedItemResolved,
    /// Genre filtering and liked-title exclusion left no candidates
    EmptyCandidatePool,
}

impl fmt::Display for EmptyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EmptyReason::NoLikedItems => "no liked tracks were provided",
            EmptyReason::NoLikedItemResolved => "none of the liked tracks exist in the catalog",
            EmptyReason::EmptyCandidatePool => "no candidate tracks remain after filtering",
        };
        f.write_str(reason)
    }
}

/// Terminal state of a run
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// At least one recommendation, best first
    Recommendations(Vec<Recommendation>),
    NoRecommendations(EmptyReason),
}

impl Outcome {
    pub(crate) fn from_ranked(ranked: Vec<Recommendation>, reason: EmptyReason) -> Self {
        if ranked.is_empty() {
            Outcome::NoRecommendations(reason)
        } else {
            Outcome::Recommendations(ranked)
        }
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            Outcome::Recommendations(list) => list,
            Outcome::NoRecommendations(_) => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Outcome::NoRecommendations(_))
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        match self {
            Outcome::NoRecommendations(reason) => Some(*reason),
            Outcome::Recommendations(_) => None,
        }
    }
}

/// Summary statistics for a recommendation run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecommendationStats {
    pub liked_count: usize,
    pub resolved_count: usize,
    /// Liked tracks that matched nothing, as `'name' by artist`
    pub unresolved: Vec<String>,
    pub preferred_genres: Vec<String>,
    /// Number of candidates every liked track was scored against
    pub candidates_count: usize,
    /// Genre-eligible tracks removed because they carry a liked title
    pub excluded_count: usize,
    pub results_count: usize,
    pub best_score: f64,
    pub avg_score: f64,
}

impl RecommendationStats {
    /// Fill the result fields from the final ranking
    pub fn record_results(&mut self, results: &[Recommendation]) {
        self.results_count = results.len();
        if results.is_empty() {
            self.best_score = 0.0;
            self.avg_score = 0.0;
            return;
        }
        // Results are sorted
        self.best_score = results[0].final_score;
        self.avg_score = results.iter().map(|r| r.final_score).sum::<f64>() / results.len() as f64;
    }
}

/// Everything a run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationReport {
    pub outcome: Outcome,
    pub stats: RecommendationStats,
}

impl RecommendationReport {
    pub fn recommendations(&self) -> &[Recommendation] {
        self.outcome.recommendations()
    }

    pub fn is_empty(&self) -> bool {
        self.outcome.is_empty()
    }
}

/// Serializable form of a report
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse<'a> {
    pub result: &'a [Recommendation],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<EmptyReason>,
    pub stats: &'a RecommendationStats,
}

impl<'a> From<&'a RecommendationReport> for RecommendResponse<'a> {
    fn from(report: &'a RecommendationReport) -> Self {
        Self {
            result: report.recommendations(),
            empty_reason: report.outcome.empty_reason(),
            stats: &report.stats,
        }
    }
}
