use super::state::{Initialization, PipelineState, RunOutcome, TokenAcquisition};
use crate::backend::MusicBackend;
use crate::error::{OrbitifyError, Result};
use crate::host::{ACCESS_TOKEN_PARAM, ERROR_PARAM, HostEnvironment};
use crate::image_probe::{ImageProber, ProbeKey};
use crate::session::mask_token;
use crate::time_range::TimeRange;
use crate::track::{TrackRecord, normalize_tracks};
use crate::user::UserProfile;
use futures::future::join_all;
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Everything one run needs, captured when it starts.
struct RunTicket {
    generation: u64,
    token: String,
    time_range: TimeRange,
}

/// Turns a bearer token into a user profile and a bounded track list.
///
/// State is published through a [`watch`] channel; every transition is a
/// single `send_modify`, so subscribers never observe half-applied results.
/// Runs are numbered and only the newest one may write, which makes rapid
/// time-range switches last-request-wins.
pub struct DataAcquisitionPipeline {
    backend: Arc<dyn MusicBackend>,
    state: watch::Sender<PipelineState>,
    acquisition: OnceCell<TokenAcquisition>,
}

impl DataAcquisitionPipeline {
    /// Creates a pipeline starting on the default time range.
    pub fn new(backend: Arc<dyn MusicBackend>) -> Self {
        Self::with_time_range(backend, TimeRange::default())
    }

    pub fn with_time_range(backend: Arc<dyn MusicBackend>, time_range: TimeRange) -> Self {
        let (state, _) = watch::channel(PipelineState::new(time_range));
        Self {
            backend,
            state,
            acquisition: OnceCell::new(),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> PipelineState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }

    /// Reads the OAuth callback parameters and, with a token, runs the first fetch.
    ///
    /// Only the first call consults the host; later calls return the same
    /// acquisition and no run outcome.
    pub async fn initialize(&self, host: &dyn HostEnvironment) -> Initialization {
        let mut first = false;
        let acquisition = self
            .acquisition
            .get_or_init(|| {
                first = true;
                self.acquire_token(host)
            })
            .clone();

        let first_run = if !first {
            debug!(?acquisition, "Pipeline already initialized");
            None
        } else if acquisition == TokenAcquisition::Authenticated {
            Some(self.refresh().await)
        } else {
            None
        };
        Initialization {
            acquisition,
            first_run,
        }
    }

    fn acquire_token(&self, host: &dyn HostEnvironment) -> TokenAcquisition {
        let param = |name: &str| host.query_param(name).filter(|value| !value.is_empty());

        if let Some(reason) = param(ERROR_PARAM) {
            error!(%reason, "OAuth error");
            let message = format!("Authentication error: {reason}");
            self.state.send_modify(|state| {
                state.session.error = Some(message);
                state.loading = false;
            });
            return TokenAcquisition::OAuthError(reason);
        }

        if let Some(token) = param(ACCESS_TOKEN_PARAM) {
            info!(token = %mask_token(&token), "Access token found");
            self.state.send_modify(|state| state.session.token = Some(token));
            host.strip_query_params();
            return TokenAcquisition::Authenticated;
        }

        info!("No access token found in URL params");
        self.state.send_modify(|state| state.loading = false);
        TokenAcquisition::Unauthenticated
    }

    /// Selects a time range; a change re-fetches when a token is present.
    ///
    /// Returns [`RunOutcome::Skipped`] when the range is unchanged.
    pub async fn set_time_range(&self, time_range: TimeRange) -> RunOutcome {
        let changed = self.state.send_if_modified(|state| {
            if state.time_range == time_range {
                return false;
            }
            state.time_range = time_range;
            true
        });
        if !changed {
            debug!(%time_range, "Time range unchanged");
            return RunOutcome::Skipped;
        }
        self.refresh().await
    }

    /// Runs profile fetch, track fetch and normalization for the current token and range.
    pub async fn refresh(&self) -> RunOutcome {
        let Some(run) = self.begin_run() else {
            debug!("No access token; skipping fetch");
            return RunOutcome::Skipped;
        };
        info!(generation = run.generation, time_range = %run.time_range, "Fetching data");

        let result = self.execute(&run).await;
        self.finish_run(&run, result)
    }

    /// Clears token, profile, tracks and error. In-flight runs and probes go stale.
    pub fn logout(&self) {
        self.state.send_modify(|state| {
            state.generation += 1;
            state.session.clear();
            state.profile = None;
            state.clear_tracks();
            state.loading = false;
        });
        info!("Logged out");
    }

    /// Probes every pending album image concurrently and records the results.
    ///
    /// Returns how many results were applied; results for tracks replaced in
    /// the meantime are dropped.
    pub async fn probe_album_images(&self, prober: &dyn ImageProber) -> usize {
        let probes = self.snapshot().pending_probes();
        let applied = join_all(probes.into_iter().map(|(key, url)| async move {
            let loaded = prober.probe(&url).await;
            if loaded {
                debug!(index = key.index, "Image loaded successfully");
            } else {
                warn!(index = key.index, %url, "Image failed to load");
            }
            self.apply_probe_result(&key, loaded)
        }))
        .await;
        applied.into_iter().filter(|applied| *applied).count()
    }

    /// Records one probe result; `false` if the key is stale.
    pub fn apply_probe_result(&self, key: &ProbeKey, loaded: bool) -> bool {
        let applied = self
            .state
            .send_if_modified(|state| state.apply_probe(key, loaded));
        if !applied {
            debug!(generation = key.generation, index = key.index, "Dropping stale image probe");
        }
        applied
    }

    fn begin_run(&self) -> Option<RunTicket> {
        let mut ticket = None;
        self.state.send_if_modified(|state| {
            let Some(token) = state.session.token.clone().filter(|token| !token.is_empty()) else {
                return false;
            };
            state.generation += 1;
            state.loading = true;
            state.session.error = None;
            ticket = Some(RunTicket {
                generation: state.generation,
                token,
                time_range: state.time_range,
            });
            true
        });
        ticket
    }

    async fn execute(&self, run: &RunTicket) -> Result<Vec<TrackRecord>> {
        self.load_profile(run).await?;

        debug!(time_range = %run.time_range, "Fetching top tracks");
        let response = self
            .backend
            .fetch_top_tracks(&run.token, run.time_range)
            .await?;
        debug!(status = response.status, "Tracks response received");
        if !response.is_success() {
            error!(status = response.status, body = %response.body, "Tracks API error");
            return Err(OrbitifyError::http(response.status, response.body));
        }

        let payload: Value = serde_json::from_str(&response.body)?;
        normalize_tracks(payload)
    }

    async fn load_profile(&self, run: &RunTicket) -> Result<()> {
        debug!("Fetching user profile");
        let response = self.backend.fetch_profile(&run.token).await?;
        if !response.is_success() {
            warn!(status = response.status, body = %response.body, "Failed to fetch user profile");
            return Ok(());
        }

        let body: Value = serde_json::from_str(&response.body)?;
        let profile = UserProfile::from_value(&body);
        match &profile {
            Some(profile) => debug!(id = %profile.id, "User profile loaded"),
            None => warn!("User profile body is not an object"),
        }
        self.state.send_if_modified(|state| {
            if state.generation != run.generation {
                return false;
            }
            state.profile = profile;
            true
        });
        Ok(())
    }

    fn finish_run(&self, run: &RunTicket, result: Result<Vec<TrackRecord>>) -> RunOutcome {
        let mut outcome = RunOutcome::Superseded;
        self.state.send_if_modified(|state| {
            if state.generation != run.generation {
                return false;
            }
            state.loading = false;
            outcome = match result {
                Ok(tracks) if tracks.is_empty() => {
                    warn!(time_range = %run.time_range, "No tracks in response");
                    state.session.error = Some(no_tracks_message(run.time_range));
                    state.clear_tracks();
                    RunOutcome::NoTracks
                }
                Ok(tracks) => {
                    let count = tracks.len();
                    info!(count, "Tracks loaded");
                    state.replace_tracks(tracks);
                    state.session.error = None;
                    RunOutcome::Loaded { count }
                }
                Err(err) => {
                    error!(error = %err, "Failed to fetch data");
                    let message = format!("Failed to fetch data: {err}");
                    state.session.error = Some(message.clone());
                    state.clear_tracks();
                    RunOutcome::Failed { message }
                }
            };
            true
        });

        if outcome == RunOutcome::Superseded {
            warn!(generation = run.generation, "Discarding results of a superseded run");
        }
        outcome
    }
}

/// Informational message for a range with no listening history.
fn no_tracks_message(time_range: TimeRange) -> String {
    format!(
        "No tracks found for {}. Try a different time range or listen to more music on Spotify!",
        time_range.label()
    )
}
