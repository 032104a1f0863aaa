//! Run a command under a named timer.

use anyhow::{bail, Context as _, Result};
use frontlog_core::{Context, FrontendLogger};
use tokio::process::Command;

pub async fn execute(logger: &FrontendLogger, label: &str, command: &[String]) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        bail!("No command given");
    };

    logger.time(label);
    let status = Command::new(program)
        .args(args)
        .status()
        .await
        .with_context(|| format!("Failed to run {}", program));
    let elapsed = logger.time_end(label);

    let status = status?;
    let context = Context::new()
        .with("command", command.join(" "))
        .with("exitCode", status.code())
        .with("elapsedMs", elapsed.map(|e| e.as_secs_f64() * 1000.0));

    if status.success() {
        logger.info_with("PERF", &format!("{} finished", label), context);
        Ok(())
    } else {
        logger.error_with("PERF", &format!("{} failed", label), context);
        bail!("{} exited with {}", program, status)
    }
}
