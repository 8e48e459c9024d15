//! Config subcommands handler

use anyhow::Result;
use std::path::Path;

use errlines::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(explicit: Option<&Path>) -> Result<()> {
    let config = Config::load(explicit)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the resolved config file path, whether or not it exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    let path = Config::config_path(explicit)?;
    println!("{}", path.display());
    Ok(())
}
