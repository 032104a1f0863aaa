//! Short-hand logger for application code.

use frontlog_types::{Context, Feature, LogLevel};
use serde_json::Value;
use std::sync::Arc;
use crate::facade::{interaction_context, ApiResponse, FrontendLogger};

/// Category used by the leveled alias methods.
pub const APP_CATEGORY: &str = "APP";

/// What [`Logger::performance`] should do with a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerfAction {
    /// Start the timer
    #[default]
    Time,
    /// Stop the timer
    TimeEnd,
}

/// Reduced-surface logger over a shared [`FrontendLogger`].
#[derive(Debug, Clone)]
pub struct Logger {
    inner: Arc<FrontendLogger>,
}

impl Logger {
    /// Wrap a facade.
    pub fn new(inner: Arc<FrontendLogger>) -> Self {
        Self { inner }
    }

    /// Alias over [`FrontendLogger::global`].
    pub fn global() -> Self {
        Self::new(FrontendLogger::global())
    }

    /// The wrapped facade.
    pub fn facade(&self) -> &Arc<FrontendLogger> {
        &self.inner
    }

    /// DEBUG under `APP`.
    pub fn debug(&self, message: &str) {
        self.inner.debug(APP_CATEGORY, message);
    }

    /// DEBUG under `APP`, with context.
    pub fn debug_with(&self, message: &str, context: Context) {
        self.inner.debug_with(APP_CATEGORY, message, context);
    }

    /// INFO under `APP`.
    pub fn info(&self, message: &str) {
        self.inner.info(APP_CATEGORY, message);
    }

    /// INFO under `APP`, with context.
    pub fn info_with(&self, message: &str, context: Context) {
        self.inner.info_with(APP_CATEGORY, message, context);
    }

    /// WARN under `APP`.
    pub fn warn(&self, message: &str) {
        self.inner.warn(APP_CATEGORY, message);
    }

    /// WARN under `APP`, with context.
    pub fn warn_with(&self, message: &str, context: Context) {
        self.inner.warn_with(APP_CATEGORY, message, context);
    }

    /// ERROR under `APP`.
    pub fn error(&self, message: &str) {
        self.inner.error(APP_CATEGORY, message);
    }

    /// ERROR under `APP`, with context.
    pub fn error_with(&self, message: &str, context: Context) {
        self.inner.error_with(APP_CATEGORY, message, context);
    }

    /// See [`FrontendLogger::api`].
    pub fn api(&self, method: &str, url: &str, request_data: Option<&Value>, response: Option<&ApiResponse>) {
        self.inner.api(method, url, request_data, response);
    }

    /// User interaction, gated on `USER_INTERACTIONS`.
    pub fn interaction(&self, action: &str, element: &str, data: Option<&Value>) {
        self.inner.log_if(
            Feature::USER_INTERACTIONS,
            LogLevel::Debug,
            "UI",
            &format!("User {}", action),
            interaction_context(element, data),
        );
    }

    /// Start or stop a timer, gated on `PERFORMANCE`.
    pub fn performance(&self, label: &str, action: PerfAction) {
        if !self.inner.is_enabled(Feature::PERFORMANCE) {
            return;
        }

        match action {
            PerfAction::Time => self.inner.time(label),
            PerfAction::TimeEnd => {
                self.inner.time_end(label);
            }
        }
    }
}

impl From<Arc<FrontendLogger>> for Logger {
    fn from(inner: Arc<FrontendLogger>) -> Self {
        Self::new(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use serde_json::json;

    fn alias() -> (Logger, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::new());
        let facade = Arc::new(FrontendLogger::new(console.clone()));
        facade.set_level(LogLevel::Debug).unwrap();
        console.clear();
        (Logger::new(facade), console)
    }

    #[test]
    fn test_leveled_aliases_use_app_category() {
        let (logger, console) = alias();
        logger.debug("d");
        logger.info("i");
        logger.warn_with("w", Context::new().with("n", 1));
        logger.error("e");

        let records = console.records();
        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| r.category == APP_CATEGORY));
        let levels: Vec<LogLevel> = records.iter().map(|r| r.level).collect();
        assert_eq!(levels, LogLevel::ALL.to_vec());
        assert_eq!(records[2].context.get("n"), Some(&json!(1)));
    }

    #[test]
    fn test_api_forwards() {
        let (logger, console) = alias();
        logger.api("GET", "/orders", None, Some(&ApiResponse::status(404)));
        let record = console.last().unwrap();
        assert_eq!(record.category, "API");
        assert_eq!(record.level, LogLevel::Error);
    }

    #[test]
    fn test_interaction_is_gated() {
        let (logger, console) = alias();
        logger.interaction("typed", "#email", None);
        let record = console.last().unwrap();
        assert_eq!(record.category, "UI");
        assert_eq!(record.message, "User typed");
        assert_eq!(record.context.get("data"), Some(&Value::Null));

        logger.facade().disable_feature(Feature::USER_INTERACTIONS);
        console.clear();
        logger.interaction("typed", "#email", None);
        assert!(console.records().is_empty());
    }

    #[test]
    fn test_performance_defaults_to_start() {
        let (logger, console) = alias();
        logger.performance("render", PerfAction::default());
        logger.performance("render", PerfAction::TimeEnd);

        let messages: Vec<String> = console.records().into_iter().map(|r| r.message).collect();
        assert_eq!(messages, vec!["Timer started: render", "Timer ended: render"]);
        assert_eq!(console.printed().len(), 1);
    }

    #[test]
    fn test_performance_is_gated() {
        let (logger, console) = alias();
        logger.facade().disable_feature(Feature::PERFORMANCE);
        console.clear();

        logger.performance("render", PerfAction::Time);
        logger.performance("render", PerfAction::TimeEnd);
        assert!(console.records().is_empty());
        assert!(console.printed().is_empty());
    }
}
