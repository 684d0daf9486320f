//! Cross-track aggregation
//!
//! Merges the per-liked-track lists into one ranking. Candidates are
//! deduplicated by track name exactly as stored; a repeated name replaces the
//! kept entry only with a strictly higher score and takes over its position,
//! so the first occurrence wins ties.

use crate::explain::Recommendation;
use crate::score::{sort_by_score_desc, ScoredCandidate};
use ahash::AHashMap;
use tunematch_core::LikedTrack;

#[derive(Debug, Clone)]
pub struct Aggregator {
    top_n: usize,
    entries: Vec<Recommendation>,
    by_name: AHashMap<String, usize>,
}

impl Aggregator {
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            entries: Vec::new(),
            by_name: AHashMap::new(),
        }
    }

    /// Add one liked track's scored candidates, in their ranked order
    pub fn push(&mut self, source: &LikedTrack, candidates: &[ScoredCandidate<'_>]) {
        for candidate in candidates {
            let recommendation = Recommendation::from_scored(candidate, &source.name);
            match self.by_name.get(&candidate.track.name) {
                Some(&index) => {
                    if recommendation.final_score > self.entries[index].final_score {
                        self.entries[index] = recommendation;
                    }
                }
                None => {
                    self.by_name
                        .insert(candidate.track.name.clone(), self.entries.len());
                    self.entries.push(recommendation);
                }
            }
        }
    }

    /// Distinct candidates seen so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Global top-N by final score, ties in first-seen order
    pub fn finish(self) -> Vec<Recommendation> {
        let mut entries = self.entries;
        sort_by_score_desc(&mut entries, |r| r.final_score);
        entries.truncate(self.top_n);
        entries
    }
}
