use super::host::CallbackUrl;
use super::render::render;
use anyhow::{Result, bail};
use orbitify_core::orbit::plan_orbits;
use orbitify_core::{ClientConfig, DataAcquisitionPipeline, RunOutcome, TimeRange, TokenAcquisition};
use orbitify_infrastructure::{HttpImageProber, HttpMusicBackend};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ShowArgs {
    pub callback: String,
    pub time_range: Option<TimeRange>,
    pub probe_images: bool,
    pub seed: Option<u64>,
}

pub async fn run(config: ClientConfig, args: ShowArgs) -> Result<()> {
    let host = CallbackUrl::parse(&args.callback)?;
    let time_range = args.time_range.unwrap_or(config.default_time_range);
    let login_url = config.login_url();
    let backend = Arc::new(HttpMusicBackend::new(config));
    let pipeline = DataAcquisitionPipeline::with_time_range(backend, time_range);

    let init = pipeline.initialize(&host).await;
    match init.acquisition {
        TokenAcquisition::Authenticated => {
            debug!(url = %host.visible_url(), "Callback query stripped");
        }
        TokenAcquisition::OAuthError(_) => {
            let message = pipeline.snapshot().error().unwrap_or_default().to_string();
            bail!("{message}. Log in again at {login_url}");
        }
        TokenAcquisition::Unauthenticated => {
            bail!("No access token in callback URL. Log in at {login_url}");
        }
    }

    if args.probe_images {
        let applied = pipeline.probe_album_images(&HttpImageProber::new()).await;
        info!(applied, "Album artwork probed");
    }

    let state = pipeline.snapshot();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let slots = plan_orbits(&state.tracks, &mut rng);
    println!("{}", render(&state, &slots));

    match init.first_run {
        Some(RunOutcome::Failed { message }) => bail!("{message}"),
        _ => Ok(()),
    }
}
