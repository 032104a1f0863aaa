//! Show the feature flag table.

use anyhow::Result;
use colored::Colorize;
use frontlog_core::FrontendLogger;

pub fn execute(logger: &FrontendLogger) -> Result<()> {
    println!("{}", "Logging Features".cyan().bold());
    println!("{}", "=".repeat(40));

    for (name, enabled) in logger.features() {
        let state = if enabled { "enabled".green() } else { "disabled".red() };
        println!("  {:<24} {}", name, state);
    }

    println!("\n  Level: {}", logger.level().to_string().cyan());
    Ok(())
}
