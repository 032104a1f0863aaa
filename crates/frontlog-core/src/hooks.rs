//! Process-wide failure hooks.
//!
//! [`install`] registers the logger as the sink for panics (uncaught
//! synchronous failures) and for failed tasks handed to [`observe`] (unhandled
//! asynchronous rejections). It is an explicit call made once at startup; the
//! hooks stay in place for the life of the process.

use frontlog_types::{Context, FrontlogError, Result};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use crate::exception::Exception;
use crate::facade::FrontendLogger;

static INSTALLED: OnceCell<Arc<FrontendLogger>> = OnceCell::new();
static NEXT_TASK: AtomicU64 = AtomicU64::new(1);

/// Install the panic hook and make `logger` the target for observed task
/// failures.
///
/// The previously registered panic hook still runs after the logger has
/// recorded the panic. Fails with [`FrontlogError::HooksInstalled`] on any call
/// after the first.
///
/// The hook reports through `logger`, so a panic raised on a thread that holds
/// one of the logger's write locks (or its console's lock) deadlocks. Read
/// locks on the logger state are re-entrant.
pub fn install(logger: Arc<FrontendLogger>) -> Result<()> {
    INSTALLED
        .set(logger.clone())
        .map_err(|_| FrontlogError::HooksInstalled)?;

    let target = logger.clone();
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| (l.file().to_string(), l.line(), l.column()));
        report_panic(&target, panic_message(info.payload()), location);
        previous(info);
    }));

    tracing::debug!(console = logger.console().console_type(), "Installed global failure hooks");
    logger.info("INIT", "Frontend logging utility initialized");
    Ok(())
}

/// The logger registered by [`install`], if any.
pub fn installed() -> Option<Arc<FrontendLogger>> {
    INSTALLED.get().cloned()
}

/// Extract the message from a panic payload, if it is a string.
pub fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
    if let Some(message) = payload.downcast_ref::<&str>() {
        Some(message.to_string())
    } else {
        payload.downcast_ref::<String>().cloned()
    }
}

/// Record a panic as an exception with `{filename, lineno, colno}` context.
pub fn report_panic(
    logger: &FrontendLogger,
    message: Option<String>,
    location: Option<(String, u32, u32)>,
) {
    let exception = match message {
        Some(message) => Exception::new(message),
        None => Exception::unnamed(),
    }
    .with_name("PanicError");

    let (filename, lineno, colno) = match location {
        Some((file, line, column)) => (Some(file), Some(line), Some(column)),
        None => (None, None, None),
    };

    logger.exception(
        &exception,
        Context::new()
            .with("filename", filename)
            .with("lineno", lineno)
            .with("colno", colno),
    );
}

/// Record an unhandled task failure on `logger`.
pub fn report_rejection_to(logger: &FrontendLogger, task: u64, reason: &str) {
    let exception = Exception::new(format!("Unhandled task rejection: {}", reason));
    logger.exception(
        &exception,
        Context::new().with("task", task).with("reason", reason),
    );
}

/// Record an unhandled task failure on the installed logger.
///
/// Returns false if no hooks are installed; the failure then only reaches
/// `tracing`.
pub fn report_rejection(task: u64, reason: &str) -> bool {
    match installed() {
        Some(logger) => {
            report_rejection_to(&logger, task, reason);
            true
        }
        None => {
            tracing::warn!(task, reason, "Unhandled task rejection before hooks were installed");
            false
        }
    }
}

/// Watch a spawned task and report it if it fails.
///
/// A task fails when it returns `Err`, panics or is cancelled. The returned
/// handle resolves to the task's value, or `None` after a failure. A panic is
/// not reported again when [`install`] has run, since the panic hook already
/// recorded it. Must be called within a Tokio runtime.
pub fn observe<T, E>(handle: JoinHandle<std::result::Result<T, E>>) -> JoinHandle<Option<T>>
where
    T: Send + 'static,
    E: Display + Send + 'static,
{
    watch(None, handle)
}

/// Like [`observe`], reporting to `logger` instead of the installed logger.
pub fn observe_with<T, E>(
    logger: Arc<FrontendLogger>,
    handle: JoinHandle<std::result::Result<T, E>>,
) -> JoinHandle<Option<T>>
where
    T: Send + 'static,
    E: Display + Send + 'static,
{
    watch(Some(logger), handle)
}

fn watch<T, E>(
    logger: Option<Arc<FrontendLogger>>,
    handle: JoinHandle<std::result::Result<T, E>>,
) -> JoinHandle<Option<T>>
where
    T: Send + 'static,
    E: Display + Send + 'static,
{
    let task = NEXT_TASK.fetch_add(1, Ordering::Relaxed);

    tokio::spawn(async move {
        let reason = match handle.await {
            Ok(Ok(value)) => return Some(value),
            Ok(Err(err)) => err.to_string(),
            Err(join_err) if join_err.is_panic() && installed().is_some() => return None,
            Err(join_err) => join_err.to_string(),
        };

        match logger {
            Some(logger) => report_rejection_to(&logger, task, &reason),
            None => {
                report_rejection(task, &reason);
            }
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use frontlog_types::LogLevel;
    use serde_json::json;

    fn logger() -> (Arc<FrontendLogger>, Arc<MemoryConsole>) {
        let console = Arc::new(MemoryConsole::new());
        (Arc::new(FrontendLogger::new(console.clone())), console)
    }

    #[test]
    fn test_panic_message() {
        let text: Box<dyn Any + Send> = Box::new("static text");
        assert_eq!(panic_message(text.as_ref()), Some("static text".to_string()));

        let owned: Box<dyn Any + Send> = Box::new(String::from("owned text"));
        assert_eq!(panic_message(owned.as_ref()), Some("owned text".to_string()));

        let other: Box<dyn Any + Send> = Box::new(42u32);
        assert_eq!(panic_message(other.as_ref()), None);
    }

    #[test]
    fn test_report_panic_context() {
        let (logger, console) = logger();
        report_panic(&logger, Some("index out of bounds".into()), Some(("src/cart.rs".into(), 12, 5)));

        let record = console.last().unwrap();
        assert_eq!(record.category, "EXCEPTION");
        assert_eq!(record.message, "index out of bounds");
        assert_eq!(
            record.context.get("context"),
            Some(&json!({"filename": "src/cart.rs", "lineno": 12, "colno": 5}))
        );
        assert_eq!(record.context.get("error").unwrap()["name"], "PanicError");

        report_panic(&logger, None, None);
        assert_eq!(console.last().unwrap().message, "Unknown error");
    }

    #[test]
    fn test_report_rejection_to() {
        let (logger, console) = logger();
        report_rejection_to(&logger, 3, "connection reset");

        let record = console.last().unwrap();
        assert_eq!(record.level, LogLevel::Error);
        assert_eq!(record.message, "Unhandled task rejection: connection reset");
        assert_eq!(
            record.context.get("context"),
            Some(&json!({"task": 3, "reason": "connection reset"}))
        );
    }

    #[test]
    fn test_install_once_and_capture_panics() {
        let (logger, console) = logger();
        install(logger.clone()).unwrap();

        assert!(console
            .records()
            .iter()
            .any(|r| r.category == "INIT" && r.message == "Frontend logging utility initialized"));
        assert!(matches!(install(logger.clone()), Err(FrontlogError::HooksInstalled)));
        assert!(Arc::ptr_eq(&installed().unwrap(), &logger));

        let result = std::panic::catch_unwind(|| panic!("kaboom"));
        assert!(result.is_err());

        let records = console.records();
        let record = records
            .iter()
            .find(|r| r.message == "kaboom")
            .expect("panic was not logged");
        assert_eq!(record.category, "EXCEPTION");
        let context = record.context.get("context").unwrap();
        assert!(context["filename"].as_str().unwrap().ends_with("hooks.rs"));
        assert!(context["lineno"].as_u64().unwrap() > 0);

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let value = runtime.block_on(async {
            let handle = tokio::spawn(async {
                if true {
                    panic!("task blew up");
                }
                Ok::<(), String>(())
            });
            observe(handle).await.unwrap()
        });
        assert_eq!(value, None);
        let reports = console
            .records()
            .into_iter()
            .filter(|r| r.category == "EXCEPTION" && r.message.contains("task blew up"))
            .count();
        assert_eq!(reports, 1);
    }

    #[tokio::test]
    async fn test_observe_passes_values_through() {
        let (logger, console) = logger();
        let handle = tokio::spawn(async { Ok::<_, String>(7) });

        let value = observe_with(logger, handle).await.unwrap();
        assert_eq!(value, Some(7));
        assert!(console.records().is_empty());
    }

    #[tokio::test]
    async fn test_observe_reports_errors() {
        let (logger, console) = logger();
        let handle = tokio::spawn(async { Err::<u8, _>("payment declined".to_string()) });

        let value = observe_with(logger, handle).await.unwrap();
        assert_eq!(value, None);

        let record = console.last().unwrap();
        assert_eq!(record.message, "Unhandled task rejection: payment declined");
        assert!(record.context.get("context").unwrap()["task"].as_u64().unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_observe_reports_cancellation() {
        let (logger, console) = logger();
        let handle = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_secs(60)).await;
            Ok::<(), String>(())
        });
        handle.abort();

        let value = observe_with(logger, handle).await.unwrap();
        assert_eq!(value, None);
        let record = console.last().unwrap();
        assert!(record.message.starts_with("Unhandled task rejection: "));
        assert!(record.message.contains("cancelled"));
    }
}
