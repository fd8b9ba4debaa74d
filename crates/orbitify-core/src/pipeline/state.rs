//! Observable pipeline state and run results.

use crate::image_probe::{ImageStatus, ProbeKey};
use crate::session::Session;
use crate::time_range::TimeRange;
use crate::track::TrackRecord;
use crate::user::UserProfile;
use serde::Serialize;

/// Snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineState {
    pub session: Session,
    /// True from construction until the first load settles, and during every run.
    pub loading: bool,
    pub profile: Option<UserProfile>,
    /// At most [`crate::track::MAX_TRACKS`] entries.
    pub tracks: Vec<TrackRecord>,
    /// One entry per track, same order.
    pub album_images: Vec<ImageStatus>,
    pub time_range: TimeRange,
    /// Bumped by every run and by logout; only the newest run may write results.
    pub generation: u64,
}

impl PipelineState {
    pub fn new(time_range: TimeRange) -> Self {
        Self {
            session: Session::default(),
            loading: true,
            profile: None,
            tracks: Vec::new(),
            album_images: Vec::new(),
            time_range,
            generation: 0,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn error(&self) -> Option<&str> {
        self.session.error.as_deref()
    }

    /// Probes still waiting for a result, with the URL to load.
    pub fn pending_probes(&self) -> Vec<(ProbeKey, String)> {
        self.tracks
            .iter()
            .zip(&self.album_images)
            .enumerate()
            .filter(|(_, (_, status))| **status == ImageStatus::Pending)
            .map(|(index, (track, _))| {
                let key = ProbeKey {
                    generation: self.generation,
                    index,
                    track_id: track.id.clone(),
                };
                (key, track.album_image.clone())
            })
            .collect()
    }

    /// Records a probe result if `key` still names a displayed track.
    pub(crate) fn apply_probe(&mut self, key: &ProbeKey, loaded: bool) -> bool {
        if key.generation != self.generation {
            return false;
        }
        match (self.tracks.get(key.index), self.album_images.get_mut(key.index)) {
            (Some(track), Some(status)) if track.id == key.track_id => {
                *status = ImageStatus::from_probe(loaded);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn replace_tracks(&mut self, tracks: Vec<TrackRecord>) {
        self.album_images = tracks
            .iter()
            .map(|track| ImageStatus::initial_for(&track.album_image))
            .collect();
        self.tracks = tracks;
    }

    pub(crate) fn clear_tracks(&mut self) {
        self.tracks.clear();
        self.album_images.clear();
    }
}

/// Result of the first call to `initialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenAcquisition {
    /// The redirect carried `error`; terminal until the user logs in again.
    OAuthError(String),
    /// A token was stored and a fetch was started.
    Authenticated,
    /// No token; the caller should offer a login.
    Unauthenticated,
}

/// What `initialize` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initialization {
    pub acquisition: TokenAcquisition,
    /// Outcome of the fetch started by the first authenticated call; `None`
    /// without a token and on repeated calls.
    pub first_run: Option<RunOutcome>,
}

/// How one pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Loaded { count: usize },
    /// The backend returned no tracks for the range.
    NoTracks,
    Failed { message: String },
    /// A newer run or a logout started before this one finished.
    Superseded,
    /// Nothing to do: no token, or the range did not change.
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: &str, image: &str) -> TrackRecord {
        TrackRecord {
            id: id.to_string(),
            name: id.to_string(),
            artist: "A".to_string(),
            album_image: image.to_string(),
        }
    }

    #[test]
    fn test_new_state_is_loading_and_empty() {
        let state = PipelineState::new(TimeRange::LongTerm);
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert!(state.tracks.is_empty());
        assert_eq!(state.time_range, TimeRange::LongTerm);
    }

    #[test]
    fn test_pending_probes_skip_missing_images() {
        let mut state = PipelineState::new(TimeRange::ShortTerm);
        state.generation = 3;
        state.replace_tracks(vec![track("a", "https://i/a"), track("b", ""), track("c", "https://i/c")]);
        let probes = state.pending_probes();
        assert_eq!(probes.len(), 2);
        assert_eq!(probes[0].0.index, 0);
        assert_eq!(probes[1].0.track_id, "c");
        assert_eq!(probes[1].1, "https://i/c");
        assert_eq!(probes[1].0.generation, 3);
    }

    #[test]
    fn test_apply_probe_rejects_mismatched_keys() {
        let mut state = PipelineState::new(TimeRange::ShortTerm);
        state.replace_tracks(vec![track("a", "https://i/a")]);
        let key = state.pending_probes().remove(0).0;

        let wrong_id = ProbeKey { track_id: "z".to_string(), ..key.clone() };
        assert!(!state.apply_probe(&wrong_id, true));
        let wrong_index = ProbeKey { index: 5, ..key.clone() };
        assert!(!state.apply_probe(&wrong_index, true));
        let stale = ProbeKey { generation: 9, ..key.clone() };
        assert!(!state.apply_probe(&stale, true));
        assert_eq!(state.album_images[0], ImageStatus::Pending);

        assert!(state.apply_probe(&key, false));
        assert_eq!(state.album_images[0], ImageStatus::Unusable);
    }
}
