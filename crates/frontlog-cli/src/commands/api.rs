//! Log an API call.

use anyhow::{Context, Result};
use frontlog_core::{ApiResponse, FrontendLogger};
use serde_json::Value;

pub fn execute(
    logger: &FrontendLogger,
    method: &str,
    url: &str,
    status: Option<u16>,
    request: Option<&str>,
    response: Option<&str>,
) -> Result<()> {
    let request = request
        .map(|raw| serde_json::from_str::<Value>(raw).context("Request payload is not valid JSON"))
        .transpose()?;
    let body = response
        .map(|raw| serde_json::from_str::<Value>(raw).context("Response payload is not valid JSON"))
        .transpose()?;

    let response = status.map(|status| ApiResponse { status, data: body });
    logger.api(&method.to_uppercase(), url, request.as_ref(), response.as_ref());
    Ok(())
}
