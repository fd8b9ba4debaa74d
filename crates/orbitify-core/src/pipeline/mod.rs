//! Data-acquisition pipeline: token handling, profile/track fetch,
//! normalization and the state exposed to the presentation layer.

mod runner;
pub mod state;


pub use runner::DataAcquisitionPipeline;
pub use state::{Initialization, PipelineState, RunOutcome, TokenAcquisition};
