pub mod config;
pub mod host;
pub mod login;
pub mod render;
pub mod show;
