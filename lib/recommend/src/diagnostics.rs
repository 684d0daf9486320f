//! Diagnostic events
//!
//! The pipeline reports what it resolved and what it skipped through a
//! [`Diagnostics`] sink. Events are observational: no sink can change which
//! tracks are recommended.

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{info, warn};

/// Something the pipeline observed while producing recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEvent {
    /// A liked track resolved to a catalog record with this genre
    GenreMatched {
        name: String,
        artist: Option<String>,
        genre: String,
    },
    /// The genres candidates are restricted to
    GenrePreferences { genres: Vec<String> },
    /// No liked track resolved, so candidates are not restricted by genre
    NoGenrePreferences,
    /// Liked titles were excluded from the candidate pool
    LikedTitlesExcluded { titles: usize, removed: usize },
    /// A liked track matched nothing in the catalog and was skipped
    UnresolvedLikedItem {
        name: String,
        artist: Option<String>,
    },
}

pub trait Diagnostics: Send + Sync {
    fn emit(&self, event: &DiagnosticEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, event: &DiagnosticEvent) {
        match event {
            DiagnosticEvent::GenreMatched { name, artist, genre } => {
                info!(
                    "Found genre match: '{}' by {} -> {}",
                    name,
                    artist.as_deref().unwrap_or("Unknown"),
                    genre
                );
            }
            DiagnosticEvent::GenrePreferences { genres } => {
                info!("Recommending tracks from these genres: {}", genres.join(", "));
            }
            DiagnosticEvent::NoGenrePreferences => {
                warn!("No genre information found for liked tracks, using all genres");
            }
            DiagnosticEvent::LikedTitlesExcluded { titles, removed } => {
                info!(titles, removed, "Filtered out {} liked track titles", titles);
            }
            DiagnosticEvent::UnresolvedLikedItem { name, artist } => {
                warn!(
                    "Could not find '{}' by {} in the catalog",
                    name,
                    artist.as_deref().unwrap_or("Unknown")
                );
            }
        }
    }
}

/// Keeps every event in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<DiagnosticEvent>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.lock().clone()
    }

    pub fn unresolved(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                DiagnosticEvent::UnresolvedLikedItem { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn emit(&self, event: &DiagnosticEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Drops every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn emit(&self, _event: &DiagnosticEvent) {}
}
