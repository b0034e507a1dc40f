use anyhow::Context;
use dns_edges_domain::{CliOverrides, Config};

/// Runs before logging is initialized, so failures are only reported
/// through the returned error.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
