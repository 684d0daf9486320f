use crate::vector::FeatureVector;
use serde::Serialize;
use std::fmt;

/// A catalog track: identity, genre label and audio features
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub name: String,
    /// Artist credit, possibly several artists in one delimited field
    pub artists: String,
    pub genre: String,
    pub features: FeatureVector,
    #[serde(skip)]
    name_folded: String,
    #[serde(skip)]
    artists_folded: String,
}

impl Track {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        artists: impl Into<String>,
        genre: impl Into<String>,
        features: FeatureVector,
    ) -> Self {
        let name = name.into();
        let artists = artists.into();
        Self {
            name_folded: fold(&name),
            artists_folded: fold(&artists),
            name,
            artists,
            genre: genre.into(),
            features,
        }
    }

    /// Lowercased track name
    #[inline]
    pub fn name_folded(&self) -> &str {
        &self.name_folded
    }

    /// Lowercased artist credit
    #[inline]
    pub fn artists_folded(&self) -> &str {
        &self.artists_folded
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.artists == other.artists
            && self.genre == other.genre
            && self.features == other.features
    }
}

/// A track the user likes, referenced by name and optionally artist
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LikedTrack {
    pub name: String,
    pub artist: Option<String>,
}

impl LikedTrack {
    /// Blank artists are treated as absent
    #[must_use]
    pub fn new(name: impl Into<String>, artist: Option<String>) -> Self {
        Self {
            name: name.into(),
            artist: artist.filter(|a| !a.trim().is_empty()),
        }
    }

    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }

    #[must_use]
    pub fn by_artist(name: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::new(name, Some(artist.into()))
    }

    #[inline]
    #[must_use]
    pub fn name_folded(&self) -> String {
        fold(&self.name)
    }

    #[inline]
    #[must_use]
    pub fn artist_folded(&self) -> Option<String> {
        self.artist.as_deref().map(fold)
    }
}

impl fmt::Display for LikedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.artist {
            Some(artist) => write!(f, "'{}' by {}", self.name, artist),
            None => write!(f, "'{}' by Unknown", self.name),
        }
    }
}

/// Case folding used for every name and artist comparison
#[inline]
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_caches_folded_keys() {
        let track = Track::new("Hello", "Adele, Someone Else", "pop", FeatureVector::default());
        assert_eq!(track.name_folded(), "hello");
        assert_eq!(track.artists_folded(), "adele, someone else");
    }

    #[test]
    fn test_blank_artist_is_absent() {
        assert_eq!(LikedTrack::new("Song", Some("   ".to_string())).artist, None);
        assert_eq!(LikedTrack::new("Song", Some(String::new())).artist, None);
        assert_eq!(
            LikedTrack::new("Song", Some("Drake".to_string())).artist.as_deref(),
            Some("Drake")
        );
    }

    #[test]
    fn test_liked_track_display() {
        assert_eq!(LikedTrack::by_artist("Hello", "Adele").to_string(), "'Hello' by Adele");
        assert_eq!(LikedTrack::by_name("Hello").to_string(), "'Hello' by Unknown");
    }

    #[test]
    fn test_serde_skips_folded_keys() {
        let track = Track::new("Hello", "Adele", "pop", FeatureVector::default());
        let json = serde_json::to_string(&track).unwrap();
        assert!(!json.contains("name_folded"));
        assert!(json.contains("\"genre\":\"pop\""));
    }
}
