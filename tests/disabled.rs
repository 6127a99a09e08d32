// SPDX-License-Identifier: MIT OR Apache-2.0

//! Behavior with the `disabled` feature: the gate never opens, nothing is
//! written, yet attempts are still counted and the introspection lines
//! (which are not level-gated) keep working.

#![cfg(feature = "disabled")]

use microlog::{
    entry, global_logger, set_global_logger, Fields, InMemorySink, Level, Logger, ACTIVE,
};
use std::sync::Arc;

#[test]
fn gate_never_opens() {
    assert!(!ACTIVE);
    assert!(!microlog::log_enabled!(Level::Fatal));

    let sink = InMemorySink::new();
    let logger = Logger::with_sink(sink.clone());
    logger.set_fields(Fields::LEVEL | Fields::MESSAGE);

    assert!(!logger.should_log(Level::Fatal));
    assert!(entry!(logger, Level::Error).is_none());
    assert!(entry!(logger, Level::Info, Level::Verbose).is_none());
    logger.log_separator(Level::Fatal);

    assert!(sink.lines().is_empty());
    assert_eq!(logger.statistics().total(), 4);
}

#[test]
fn macros_expand_to_nothing() {
    let sink = InMemorySink::new();
    let logger = Logger::with_sink(sink.clone());
    set_global_logger(Arc::new(logger));

    fn must_not_run() -> i32 {
        panic!("value expression evaluated in a disabled build");
    }
    microlog::fatal!("never {value}", value = must_not_run());

    assert!(sink.lines().is_empty());
    // The whole expansion is folded away, so not even the attempt counts.
    assert_eq!(global_logger().statistics().total(), 0);
}

#[test]
fn introspection_lines_still_write() {
    let sink = InMemorySink::new();
    let logger = Logger::with_sink(sink.clone());
    logger.log_level_legend();
    logger.log_min_level();
    assert_eq!(sink.lines().len(), 2);
}
