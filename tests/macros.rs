// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercises the procedural logging macros against a swapped-in global
//! logger. The tests share the process-wide logger, so each one holds
//! TEST_LOGGER_GUARD for its duration and restores the previous logger
//! before releasing it.

#![cfg(not(feature = "disabled"))]

use microlog::{
    global_logger, set_global_logger, Fields, FixedIdentity, InMemorySink, Level, Logger,
};
use std::sync::{Arc, Mutex, MutexGuard};

static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());

struct Swap {
    previous: Arc<Logger>,
    _guard: MutexGuard<'static, ()>,
}

impl Swap {
    /// Installs a fresh capturing logger globally and returns the sink.
    fn install() -> (Swap, InMemorySink) {
        let guard = TEST_LOGGER_GUARD
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let previous = global_logger();

        let sink = InMemorySink::new();
        let mut logger = Logger::with_sink(sink.clone());
        logger.set_identity(FixedIdentity::uniform("x"));
        logger.set_fields(Fields::LEVEL | Fields::MESSAGE);
        set_global_logger(Arc::new(logger));

        (
            Swap {
                previous,
                _guard: guard,
            },
            sink,
        )
    }
}

impl Drop for Swap {
    fn drop(&mut self) {
        set_global_logger(self.previous.clone());
    }
}

#[test]
fn literal_only_message() {
    let (_swap, sink) = Swap::install();
    microlog::info!("ready");
    assert_eq!(sink.lines(), vec!["INFO      : ready"]);
}

#[test]
fn interpolates_key_value_pairs_in_order() {
    let (_swap, sink) = Swap::install();
    microlog::warn!("user {name} has {count} items", name = "alice", count = 41 + 1);
    assert_eq!(sink.lines(), vec!["WARNING   : user alice has 42 items"]);
}

#[test]
fn each_level_macro_uses_its_tag() {
    let (_swap, sink) = Swap::install();
    microlog::verbose!("v");
    microlog::detail!("d");
    microlog::info!("i");
    microlog::warn!("w");
    microlog::error!("e");
    microlog::critical!("c");
    microlog::fatal!("f");
    assert_eq!(
        sink.lines(),
        vec![
            "VERBOSE   : v",
            "DETAIL    : d",
            "INFO      : i",
            "WARNING   : w",
            "ERROR     : e",
            "CRITICAL  : c",
            "FATAL     : f",
        ]
    );
}

#[test]
fn suppressed_call_does_not_evaluate_its_values() {
    let (_swap, sink) = Swap::install();
    global_logger().set_min_level(Level::Error);

    fn must_not_run() -> i32 {
        panic!("value expression of a suppressed message was evaluated");
    }
    microlog::info!("never {value}", value = must_not_run());

    assert!(sink.lines().is_empty());
    assert_eq!(global_logger().statistics().count(Level::Info), 1);
}

#[test]
fn runtime_level_expression() {
    let (_swap, sink) = Swap::install();
    let picked = Level::Critical;
    microlog::log!(picked, "picked at runtime");
    assert_eq!(sink.lines(), vec!["CRITICAL  : picked at runtime"]);
}

#[test]
fn local_minimum_overrides_a_strict_logger() {
    let (_swap, sink) = Swap::install();
    global_logger().set_min_level(Level::Error);

    microlog::info!("muted");
    microlog::log_with!(Level::Info, Level::Info, "admitted locally");
    microlog::log_with!(Level::Error, Level::Fatal, "muted locally");

    assert_eq!(sink.lines(), vec!["INFO      : admitted locally"]);
}

#[test]
fn escaped_braces_stay_literal() {
    let (_swap, sink) = Swap::install();
    microlog::info!("a {{literal}} brace and {value}", value = 7);
    assert_eq!(sink.lines(), vec!["INFO      : a {literal} brace and 7"]);
}
