use crate::aggregate::Aggregator;
use crate::config::RecommendConfig;
use crate::diagnostics::{DiagnosticEvent, Diagnostics, TracingDiagnostics};
use crate::explain::{EmptyReason, Outcome, RecommendationReport, RecommendationStats};
use crate::genre::GenrePreferences;
use crate::matcher::{match_all, MatchSet};
use crate::pool::CandidatePool;
use crate::score::{ScoredCandidate, Scorer};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::debug;
use tunematch_core::{LikedTrack, NormalizedCatalog, Result};

/// Content-based recommender over a normalized catalog
#[derive(Clone)]
pub struct Recommender {
    config: RecommendConfig,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Recommender {
    /// Create a recommender reporting diagnostics through `tracing`
    pub fn new(config: RecommendConfig) -> Self {
        Self {
            config,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn config(&self) -> &RecommendConfig {
        &self.config
    }

    /// Recommend catalog tracks similar to the liked set
    ///
    /// Liked tracks are resolved once, genre preferences and the candidate
    /// pool are derived once, then every resolved liked track is scored
    /// against that same pool and the per-track lists are merged.
    pub fn recommend(
        &self,
        liked: &[LikedTrack],
        catalog: &NormalizedCatalog,
    ) -> Result<RecommendationReport> {
        self.config.validate()?;
        let diagnostics = self.diagnostics.as_ref();

        let matches = match_all(liked, catalog);
        let preferences = GenrePreferences::derive(&matches, diagnostics);
        let pool = CandidatePool::build(catalog, &preferences, liked, diagnostics);
        debug!(
            catalog = catalog.len(),
            candidates = pool.len(),
            "Candidate pool built"
        );

        let mut stats = RecommendationStats {
            liked_count: liked.len(),
            preferred_genres: preferences.to_vec(),
            candidates_count: pool.len(),
            excluded_count: pool.excluded(),
            ..Default::default()
        };

        let mut resolved: Vec<&MatchSet<'_>> = Vec::with_capacity(matches.len());
        for set in &matches {
            if set.is_empty() {
                stats.unresolved.push(set.liked.to_string());
                diagnostics.emit(&DiagnosticEvent::UnresolvedLikedItem {
                    name: set.liked.name.clone(),
                    artist: set.liked.artist.clone(),
                });
            } else {
                resolved.push(set);
            }
        }
        stats.resolved_count = resolved.len();

        let reason = if liked.is_empty() {
            EmptyReason::NoLikedItems
        } else if resolved.is_empty() {
            EmptyReason::NoLikedItemResolved
        } else {
            EmptyReason::EmptyCandidatePool
        };

        let scorer = Scorer::new(self.config.genre_bonus, self.config.top_n);
        let scored = self.score_all(&scorer, &resolved, &pool);

        let mut aggregator = Aggregator::new(self.config.top_n);
        for (set, candidates) in resolved.iter().zip(&scored) {
            aggregator.push(set.liked, candidates);
        }
        let ranked = aggregator.finish();
        stats.record_results(&ranked);

        Ok(RecommendationReport {
            outcome: Outcome::from_ranked(ranked, reason),
            stats,
        })
    }

    /// Per-liked-track scoring passes, in liked order
    fn score_all<'a>(
        &self,
        scorer: &Scorer,
        resolved: &[&MatchSet<'_>],
        pool: &CandidatePool<'a>,
    ) -> Vec<Vec<ScoredCandidate<'a>>> {
        if self.config.parallel {
            resolved.par_iter().map(|set| scorer.score(set, pool)).collect()
        } else {
            resolved.iter().map(|set| scorer.score(set, pool)).collect()
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(RecommendConfig::default())
    }
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
