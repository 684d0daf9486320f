use serde::{Deserialize, Serialize};
use tunematch_core::{Error, Result};

/// Default number of recommendations returned
pub const DEFAULT_TOP_N: usize = 10;

/// Default score bonus for a candidate sharing the liked track's genre
pub const DEFAULT_GENRE_BONUS: f64 = 0.2;

/// Configuration for a recommendation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendConfig {
    /// Size of each per-liked-track list and of the final result
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_genre_bonus")]
    pub genre_bonus: f64,
    /// Score liked tracks on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_genre_bonus() -> f64 {
    DEFAULT_GENRE_BONUS
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            genre_bonus: DEFAULT_GENRE_BONUS,
            parallel: false,
        }
    }
}

impl RecommendConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(Error::InvalidConfig("top_n must be at least 1".to_string()));
        }
        if !self.genre_bonus.is_finite() || self.genre_bonus < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "genre_bonus must be a finite non-negative number, got {}",
                self.genre_bonus
            )));
        }
        Ok(())
    }
}
