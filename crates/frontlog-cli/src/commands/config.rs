//! Show the effective configuration.

use anyhow::Result;
use crate::cli::Cli;

pub fn execute(cli: &Cli) -> Result<()> {
    let config = super::resolve_config(cli)?;
    print!("{}", serde_yaml::to_string(&config)?);
    Ok(())
}
