//! The logger facade.
//!
//! [`FrontendLogger`] owns the threshold level, the feature flag table, the
//! host details and a named timer table, and writes records to a [`Console`].
//! State sits behind a lock so one logger can be shared across threads; the
//! lock is never held while the console is written to.

use frontlog_types::{Console, Context, IntoLogLevel, LogLevel, LogRecord, LoggerConfig, Result};
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use crate::console::StdConsole;
use crate::exception::Exception;
use crate::host::HostEnvironment;
use crate::timers::Timers;

/// Prefix applied to timer labels before they reach the timer facility.
pub const TIMER_PREFIX: &str = "[PERF]";

/// Status at or above which an API call is logged as an error.
pub const API_ERROR_STATUS: u16 = 400;

/// Response half of an API call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded response body, if any
    pub data: Option<Value>,
}

impl ApiResponse {
    /// A response with a status and no body.
    pub fn status(status: u16) -> Self {
        Self { status, data: None }
    }

    /// Attach a body.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Whether the status indicates failure.
    pub fn is_failure(&self) -> bool {
        self.status >= API_ERROR_STATUS
    }
}

/// The structured record attached to API log lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCall<'a> {
    /// HTTP method
    pub method: &'a str,
    /// Request URL
    pub url: &'a str,
    /// Request payload
    pub request_data: Option<&'a Value>,
    /// Response status, when a response was received
    pub response_status: Option<u16>,
    /// Response payload, when a response was received
    pub response_data: Option<&'a Value>,
}

#[derive(Debug)]
struct LoggerState {
    level: LogLevel,
    features: IndexMap<String, bool>,
    host: HostEnvironment,
}

/// Level- and category-aware logger writing to a console.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use frontlog_core::{console::MemoryConsole, FrontendLogger};
/// use frontlog_types::LogLevel;
///
/// let console = Arc::new(MemoryConsole::new());
/// let logger = FrontendLogger::new(console.clone());
///
/// logger.debug("UI", "hidden at the default INFO threshold");
/// logger.info("NAV", "shown");
/// assert_eq!(console.records().len(), 1);
///
/// logger.set_level("debug").unwrap();
/// assert_eq!(logger.level(), LogLevel::Debug);
/// ```
pub struct FrontendLogger {
    state: RwLock<LoggerState>,
    console: Arc<dyn Console>,
    timers: Timers,
}

impl FrontendLogger {
    /// Create a logger with default settings for the detected host.
    pub fn new(console: Arc<dyn Console>) -> Self {
        Self::from_config(&LoggerConfig::default(), console)
    }

    /// Create a logger from configuration.
    pub fn from_config(config: &LoggerConfig, console: Arc<dyn Console>) -> Self {
        let host = HostEnvironment::detect()
            .with_overrides(config.location.as_deref(), config.user_agent.as_deref());

        Self {
            state: RwLock::new(LoggerState {
                level: config.level,
                features: config.features.clone(),
                host,
            }),
            console,
            timers: Timers::new(),
        }
    }

    /// Replace the host details.
    pub fn with_host(self, host: HostEnvironment) -> Self {
        self.state.write().host = host;
        self
    }

    /// Process-wide logger writing to stdout/stderr with default settings.
    pub fn global() -> Arc<FrontendLogger> {
        use once_cell::sync::Lazy;
        static INSTANCE: Lazy<Arc<FrontendLogger>> = Lazy::new(|| {
            Arc::new(FrontendLogger::new(Arc::new(StdConsole::default())))
        });
        INSTANCE.clone()
    }

    /// The console records are written to.
    pub fn console(&self) -> &Arc<dyn Console> {
        &self.console
    }

    /// Current threshold.
    pub fn level(&self) -> LogLevel {
        self.state.read_recursive().level
    }

    /// Whether a record at `level` would be emitted.
    pub fn is_level_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Set the threshold from a level, its case-insensitive name or its rank.
    ///
    /// Emits an INFO confirmation (subject to the new threshold). Unknown
    /// levels are rejected and leave the threshold unchanged.
    pub fn set_level(&self, level: impl IntoLogLevel) -> Result<()> {
        let level = level.into_level().map_err(|e| {
            tracing::warn!(error = %e, "Rejected log level change");
            e
        })?;

        self.state.write().level = level;
        self.info("CONFIG", &format!("Log level set to: {}", level));
        Ok(())
    }

    /// Emit a record if `level` passes the threshold.
    pub fn log(&self, level: LogLevel, category: &str, message: &str, context: Context) {
        if !self.is_level_enabled(level) {
            return;
        }

        let record = LogRecord::new(level, category, message, context);
        self.console.record(&record);
    }

    /// DEBUG record.
    pub fn debug(&self, category: &str, message: &str) {
        self.log(LogLevel::Debug, category, message, Context::new());
    }

    /// DEBUG record with context.
    pub fn debug_with(&self, category: &str, message: &str, context: Context) {
        self.log(LogLevel::Debug, category, message, context);
    }

    /// INFO record.
    pub fn info(&self, category: &str, message: &str) {
        self.log(LogLevel::Info, category, message, Context::new());
    }

    /// INFO record with context.
    pub fn info_with(&self, category: &str, message: &str, context: Context) {
        self.log(LogLevel::Info, category, message, context);
    }

    /// WARN record.
    pub fn warn(&self, category: &str, message: &str) {
        self.log(LogLevel::Warn, category, message, Context::new());
    }

    /// WARN record with context.
    pub fn warn_with(&self, category: &str, message: &str, context: Context) {
        self.log(LogLevel::Warn, category, message, context);
    }

    /// ERROR record.
    pub fn error(&self, category: &str, message: &str) {
        self.log(LogLevel::Error, category, message, Context::new());
    }

    /// ERROR record with context.
    pub fn error_with(&self, category: &str, message: &str, context: Context) {
        self.log(LogLevel::Error, category, message, context);
    }

    /// Log an API call under `API`.
    ///
    /// Failed responses (status 400 and above) are logged at ERROR, everything
    /// else, including calls without a response, at INFO.
    pub fn api(
        &self,
        method: &str,
        url: &str,
        request_data: Option<&Value>,
        response: Option<&ApiResponse>,
    ) {
        let call = ApiCall {
            method,
            url,
            request_data,
            response_status: response.map(|r| r.status),
            response_data: response.and_then(|r| r.data.as_ref()),
        };
        let context = Context::from_serializable(&call);

        match response {
            Some(response) if response.is_failure() => {
                self.error_with("API", &format!("{} {} failed", method, url), context)
            }
            _ => self.info_with("API", &format!("{} {}", method, url), context),
        }
    }

    /// Log a user interaction under `UI` at DEBUG.
    pub fn interaction(&self, action: &str, element: &str, data: Option<&Value>) {
        self.debug_with("UI", &format!("User {}", action), interaction_context(element, data));
    }

    /// Log a navigation under `NAV`.
    pub fn navigation(&self, from: &str, to: &str) {
        self.info("NAV", &format!("Navigation: {} -> {}", from, to));
    }

    /// Start the timer `label`.
    pub fn time(&self, label: &str) {
        self.timers.start(self.console.as_ref(), &timer_key(label));
        self.debug("PERF", &format!("Timer started: {}", label));
    }

    /// Stop the timer `label` and return its elapsed time, if it was running.
    pub fn time_end(&self, label: &str) -> Option<Duration> {
        let elapsed = self.timers.stop(self.console.as_ref(), &timer_key(label));
        self.debug("PERF", &format!("Timer ended: {}", label));
        elapsed
    }

    /// Log a page load under `PAGE`, with environment details at DEBUG.
    pub fn page_load(&self, page_name: &str) {
        self.info("PAGE", &format!("Page loaded: {}", page_name));

        let host = self.state.read().host.clone();
        self.debug_with(
            "PAGE",
            "Page load details",
            Context::new()
                .with("url", host.location)
                .with("userAgent", host.user_agent)
                .with("timestamp", crate::time::now_iso()),
        );
    }

    /// Log an exception under `EXCEPTION` at ERROR.
    pub fn exception(&self, error: &Exception, context: Context) {
        let url = self.location();
        let context_value = if context.is_empty() { Value::Null } else { context.to_json() };

        self.error_with(
            "EXCEPTION",
            error.display_message(),
            Context::new()
                .with("error", error.to_json())
                .with("context", context_value)
                .with("stack", error.stack())
                .with("url", url),
        );
    }

    /// Current location.
    pub fn location(&self) -> String {
        self.state.read_recursive().host.location.clone()
    }

    /// Update the current location.
    pub fn set_location(&self, location: impl Into<String>) {
        self.state.write().host.location = location.into();
    }

    /// Client identification string.
    pub fn user_agent(&self) -> String {
        self.state.read().host.user_agent.clone()
    }

    /// Snapshot of the feature flag table.
    pub fn features(&self) -> IndexMap<String, bool> {
        self.state.read().features.clone()
    }

    /// Whether a feature is enabled. Unknown features are disabled.
    pub fn is_enabled(&self, feature: &str) -> bool {
        self.state.read().features.get(feature).copied().unwrap_or(false)
    }

    /// Enable a feature.
    pub fn enable_feature(&self, feature: &str) {
        self.state.write().features.insert(feature.to_string(), true);
        self.info("CONFIG", &format!("Enabled logging feature: {}", feature));
    }

    /// Disable a feature.
    pub fn disable_feature(&self, feature: &str) {
        self.state.write().features.insert(feature.to_string(), false);
        self.info("CONFIG", &format!("Disabled logging feature: {}", feature));
    }

    /// Emit only if `feature` is enabled.
    pub fn log_if(&self, feature: &str, level: LogLevel, category: &str, message: &str, context: Context) {
        if self.is_enabled(feature) {
            self.log(level, category, message, context);
        }
    }
}

impl fmt::Debug for FrontendLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("FrontendLogger")
            .field("level", &state.level)
            .field("features", &state.features)
            .field("host", &state.host)
            .field("console", &self.console.console_type())
            .finish()
    }
}

pub(crate) fn interaction_context(element: &str, data: Option<&Value>) -> Context {
    Context::new().with("element", element).with("data", data)
}

fn timer_key(label: &str) -> String {
    format!("{} {}", TIMER_PREFIX, label)
}
