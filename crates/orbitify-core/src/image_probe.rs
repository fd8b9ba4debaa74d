//! Out-of-band album artwork probes.

use serde::{Deserialize, Serialize};

/// Whether a track's album image can be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageStatus {
    /// Probe not finished yet.
    #[default]
    Pending,
    /// Image loaded; show the artwork.
    Usable,
    /// Image failed or missing; show the placeholder color.
    Unusable,
}

impl ImageStatus {
    pub fn from_probe(loaded: bool) -> Self {
        if loaded { Self::Usable } else { Self::Unusable }
    }

    /// Initial status for a freshly loaded track.
    pub fn initial_for(album_image: &str) -> Self {
        if album_image.is_empty() {
            Self::Unusable
        } else {
            Self::Pending
        }
    }
}

/// Identity of one probe. A result only applies while all three parts still
/// match the pipeline's current run and track list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProbeKey {
    pub generation: u64,
    pub index: usize,
    pub track_id: String,
}

/// Loads an image and reports whether it is displayable.
#[async_trait::async_trait]
pub trait ImageProber: Send + Sync {
    async fn probe(&self, url: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status() {
        assert_eq!(ImageStatus::initial_for(""), ImageStatus::Unusable);
        assert_eq!(ImageStatus::initial_for("https://i/x.jpg"), ImageStatus::Pending);
    }

    #[test]
    fn test_from_probe() {
        assert_eq!(ImageStatus::from_probe(true), ImageStatus::Usable);
        assert_eq!(ImageStatus::from_probe(false), ImageStatus::Unusable);
    }
}
