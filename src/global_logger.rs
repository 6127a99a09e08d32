// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! The logging macros route through one shared [`Logger`] so ordinary code
//! never has to thread a logger around. The instance is swappable, which
//! is how tests capture macro output: install a logger backed by an
//! [`InMemorySink`](crate::InMemorySink), run the code under test, read
//! the lines back.
//!
//! Loggers are handed out as `Arc`s, so a swap never pulls the sink out
//! from under an in-flight logging call; the old instance lives until its
//! last in-flight reference drops.

use crate::logger::Logger;
use std::sync::{Arc, OnceLock, RwLock};

static GLOBAL_LOGGER: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn cell() -> &'static RwLock<Arc<Logger>> {
    // First use installs the default stderr logger.
    GLOBAL_LOGGER.get_or_init(|| RwLock::new(Arc::new(Logger::new())))
}

/// The current process-wide logger.
pub fn global_logger() -> Arc<Logger> {
    cell().read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Replaces the process-wide logger.
pub fn set_global_logger(logger: Arc<Logger>) {
    *cell().write().unwrap_or_else(|e| e.into_inner()) = logger;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_sink::InMemorySink;
    use std::sync::Mutex;

    // Tests in this module mutate shared process state.
    static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());

    #[test]
    fn default_global_logger_exists() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let logger = global_logger();
        assert_eq!(logger.status(), 0);
    }

    #[test]
    fn set_replaces_the_instance() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let original = global_logger();

        let replacement = Arc::new(Logger::with_sink(InMemorySink::new()));
        set_global_logger(replacement.clone());
        assert!(Arc::ptr_eq(&global_logger(), &replacement));

        set_global_logger(original);
    }

    #[test]
    fn swap_is_safe_across_threads() {
        let _guard = TEST_LOGGER_GUARD.lock().unwrap();
        let original = global_logger();

        let handle = std::thread::spawn(|| {
            set_global_logger(Arc::new(Logger::with_sink(InMemorySink::new())));
        });
        let _ = global_logger();
        handle.join().expect("swap thread panicked");

        set_global_logger(original);
    }
}
