pub mod config_service;
pub mod http_backend;
pub mod image_prober;
pub mod paths;

pub use config_service::ConfigService;
pub use http_backend::HttpMusicBackend;
pub use image_prober::HttpImageProber;
pub use paths::OrbitifyPaths;
