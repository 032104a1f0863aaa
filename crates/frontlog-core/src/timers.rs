//! Named timer facility, with `console.time` / `console.timeEnd` semantics.
//!
//! Timers are keyed by label. Starting a label that is already running, or
//! stopping one that is not, produces a console warning and otherwise does
//! nothing.

use frontlog_types::{Channel, Console};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use crate::time::format_elapsed;

/// Running timers keyed by label.
#[derive(Debug, Default)]
pub struct Timers {
    running: Mutex<HashMap<String, Instant>>,
}

impl Timers {
    /// Create an empty timer table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the timer `key`.
    ///
    /// Returns false (and warns on `console`) if it is already running; the
    /// original start time is kept.
    pub fn start(&self, console: &dyn Console, key: &str) -> bool {
        let inserted = {
            let mut running = self.running.lock();
            if running.contains_key(key) {
                false
            } else {
                running.insert(key.to_string(), Instant::now());
                true
            }
        };

        if !inserted {
            console.print(Channel::Warn, &format!("Timer '{}' already exists", key));
        }
        inserted
    }

    /// Stop the timer `key`, report `<key>: <ms>ms` on the standard channel
    /// and return the elapsed time.
    ///
    /// Returns `None` (and warns on `console`) if no such timer is running.
    pub fn stop(&self, console: &dyn Console, key: &str) -> Option<Duration> {
        let started = self.running.lock().remove(key);

        match started {
            Some(started) => {
                let elapsed = started.elapsed();
                console.print(Channel::Standard, &format!("{}: {}", key, format_elapsed(elapsed)));
                Some(elapsed)
            }
            None => {
                console.print(Channel::Warn, &format!("Timer '{}' does not exist", key));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;

    #[test]
    fn test_start_stop() {
        let console = MemoryConsole::new();
        let timers = Timers::new();

        assert!(timers.start(&console, "[PERF] load"));
        let elapsed = timers.stop(&console, "[PERF] load");
        assert!(elapsed.is_some());
        assert!(timers.start(&console, "[PERF] load"));

        let printed = console.printed();
        assert_eq!(printed.len(), 1);
        assert_eq!(printed[0].0, Channel::Standard);
        assert!(printed[0].1.starts_with("[PERF] load: "));
        assert!(printed[0].1.ends_with("ms"));
    }

    #[test]
    fn test_double_start_warns_and_keeps_original() {
        let console = MemoryConsole::new();
        let timers = Timers::new();

        assert!(timers.start(&console, "x"));
        assert!(!timers.start(&console, "x"));
        assert_eq!(
            console.printed(),
            vec![(Channel::Warn, "Timer 'x' already exists".to_string())]
        );
        assert!(timers.stop(&console, "x").is_some());
    }

    #[test]
    fn test_stop_unknown_warns() {
        let console = MemoryConsole::new();
        let timers = Timers::new();

        assert_eq!(timers.stop(&console, "missing"), None);
        assert_eq!(
            console.printed(),
            vec![(Channel::Warn, "Timer 'missing' does not exist".to_string())]
        );
    }
}
