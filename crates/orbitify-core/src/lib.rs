//! Core domain of the Orbitify client.
//!
//! The [`pipeline::DataAcquisitionPipeline`] turns an OAuth bearer token into a
//! user profile and at most seven normalized tracks. Everything that touches
//! the network or the page URL sits behind a trait:
//!
//! - [`backend::MusicBackend`]: profile and top-tracks endpoints
//! - [`host::HostEnvironment`]: OAuth callback query parameters
//! - [`image_probe::ImageProber`]: album artwork loading

pub mod backend;
pub mod config;
pub mod error;
pub mod host;
pub mod image_probe;
pub mod orbit;
pub mod pipeline;
pub mod session;
pub mod time_range;
pub mod track;
pub mod user;

// Re-export common types
pub use config::ClientConfig;
pub use error::OrbitifyError;
pub use pipeline::{DataAcquisitionPipeline, Initialization, PipelineState, RunOutcome, TokenAcquisition};
pub use time_range::TimeRange;
