//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User profile domain model

mod model;

pub use model::{DEFAULT_DISPLAY_NAME, ProfileImage, UserProfile};
