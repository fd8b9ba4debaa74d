use anyhow::{Context, Result};
use orbitify_core::ClientConfig;
use orbitify_infrastructure::ConfigService;

pub fn run(service: &ConfigService, config: &ClientConfig) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("# {}", service.path().display());
    print!("{rendered}");
    Ok(())
}
