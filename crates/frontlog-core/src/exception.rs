//! Exceptions reported through [`FrontendLogger::exception`](crate::FrontendLogger::exception).

use serde_json::{json, Value};
use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt;

/// Message used when an exception carries none.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// A captured failure: name, optional message, source chain and stack text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exception {
    name: String,
    message: Option<String>,
    causes: Vec<String>,
    stack: String,
}

impl Exception {
    /// Create an exception with a message, capturing the current stack.
    pub fn new(message: impl Into<String>) -> Self {
        Self::capture("Error", Some(message.into()), Vec::new())
    }

    /// Create an exception without a message.
    pub fn unnamed() -> Self {
        Self::capture("Error", None, Vec::new())
    }

    /// Capture any error value, including its chain of sources.
    pub fn from_error<E: Error + ?Sized>(err: &E) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(cause.to_string());
            source = cause.source();
        }
        Self::capture("Error", Some(err.to_string()), causes)
    }

    fn capture(name: &str, message: Option<String>, causes: Vec<String>) -> Self {
        let message = message.filter(|m| !m.is_empty());

        let mut stack = format!("{}: {}\n", name, message.as_deref().unwrap_or(UNKNOWN_ERROR));
        for cause in &causes {
            stack.push_str(&format!("Caused by: {}\n", cause));
        }
        stack.push_str(&Backtrace::force_capture().to_string());

        Self {
            name: name.to_string(),
            message,
            causes,
            stack,
        }
    }

    /// Rename the exception, e.g. `PanicError`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(rest) = self.stack.strip_prefix(&self.name) {
            self.stack = format!("{}{}", name, rest);
        }
        self.name = name;
        self
    }

    /// Exception name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The message, if one was given and it is not empty.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The message, or [`UNKNOWN_ERROR`].
    pub fn display_message(&self) -> &str {
        self.message().unwrap_or(UNKNOWN_ERROR)
    }

    /// Messages of the underlying sources, outermost first.
    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    /// Stack trace text.
    pub fn stack(&self) -> &str {
        &self.stack
    }

    /// JSON summary used as the `error` context value.
    pub fn to_json(&self) -> Value {
        let mut value = json!({
            "name": self.name,
            "message": self.message,
        });
        if !self.causes.is_empty() {
            value["causes"] = json!(self.causes);
        }
        value
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.display_message())
    }
}
