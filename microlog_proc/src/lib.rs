// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Microlog Procedural Macros
//!
//! This crate provides the logging macros for the microlog library, generating
//! the call-site expansion at compile time. The macros transform format strings
//! with key-value pairs into calls against microlog's `hidden` module.
//!
//! Each macro follows the same three-phase pattern:
//! 1. **Pre-phase**: runs the runtime gate and builds a `LogRecord` with the
//!    composed header, capturing file, line, and function via `CallSite`
//! 2. **Format phase**: a `Formatter` writes the literal and value segments of
//!    the message into the record
//! 3. **Post-phase**: submits the finished record to the logger's sink
//!
//! The whole expansion sits behind a `log_enabled!` check against the
//! compile-time floor, so calls below the floor compile to nothing in
//! optimized builds.
//!
//! ## Usage Example
//!
//! ```rust
//! use microlog_proc::*;
//!
//! // This macro call:
//! // microlog::info!("User {name} has {count} items", name="alice", count=42);
//!
//! // Expands to approximately:
//! // {
//! //     if microlog::log_enabled!(microlog::Level::Info) {
//! //         let __logger = microlog::hidden::global_logger();
//! //         if let Some(mut record) = microlog::hidden::log_with_pre(
//! //             &__logger,
//! //             microlog::Level::Info,
//! //             microlog::Level::None,
//! //             microlog::CallSite::new(file!(), line!(), microlog::__function_path!()),
//! //         ) {
//! //             let mut formatter = microlog::hidden::Formatter::new(&mut record);
//! //             formatter.write_literal("User ");
//! //             formatter.write_val("alice");
//! //             formatter.write_literal(" has ");
//! //             formatter.write_val(42);
//! //             formatter.write_literal(" items");
//! //             microlog::hidden::log_post(&__logger, record);
//! //         }
//! //     }
//! // }
//! ```
//!
//! ## Key-Value Parsing
//!
//! Format strings support embedded key-value pairs:
//! - Keys are extracted from `{key}` placeholders in the format string
//! - Values are provided as `key=value` parameters after the format string
//! - The parser handles complex Rust expressions as values, including method
//!   calls and literals

mod emit;
mod parser;

use proc_macro::TokenStream;

/// Logs a message at `Verbose` level.
///
/// ```ignore
/// microlog::verbose!("probing {path}", path=dir.display());
/// ```
#[proc_macro]
pub fn verbose(input: TokenStream) -> TokenStream {
    emit::level_log(input, "Verbose")
}

/// Logs a message at `Detail` level.
#[proc_macro]
pub fn detail(input: TokenStream) -> TokenStream {
    emit::level_log(input, "Detail")
}

/// Logs a message at `Info` level.
///
/// ```ignore
/// microlog::info!("listening on port {port}", port=8080);
/// ```
#[proc_macro]
pub fn info(input: TokenStream) -> TokenStream {
    emit::level_log(input, "Info")
}

/// Logs a message at `Warning` level.
#[proc_macro]
pub fn warn(input: TokenStream) -> TokenStream {
    emit::level_log(input, "Warning")
}

/// Logs a message at `Error` level.
#[proc_macro]
pub fn error(input: TokenStream) -> TokenStream {
    emit::level_log(input, "Error")
}

/// Logs a message at `Critical` level.
#[proc_macro]
pub fn critical(input: TokenStream) -> TokenStream {
    emit::level_log(input, "Critical")
}

/// Logs a message at `Fatal` level.
///
/// Fatal messages are counted and written like any other; terminating the
/// process is left to the caller.
#[proc_macro]
pub fn fatal(input: TokenStream) -> TokenStream {
    emit::level_log(input, "Fatal")
}

/// Logs a message at a level chosen at runtime.
///
/// The first argument is any expression evaluating to a `microlog::Level`,
/// followed by the usual format string and key-value pairs:
///
/// ```ignore
/// microlog::log!(chosen_level, "retry {n}", n=attempt);
/// ```
///
/// Because the level is not known at compile time, the expansion is gated
/// against the floor at runtime rather than folded away.
#[proc_macro]
pub fn log(input: TokenStream) -> TokenStream {
    emit::dynamic_log(input)
}

/// Logs a message at a runtime level with a local minimum override.
///
/// The second argument replaces the logger's minimum level for this one
/// call: pass a lower level to let the message through a stricter logger,
/// or a higher one to mute it locally.
///
/// ```ignore
/// microlog::log_with!(microlog::Level::Detail, microlog::Level::Verbose, "cache miss {key}", key=k);
/// ```
#[proc_macro]
pub fn log_with(input: TokenStream) -> TokenStream {
    emit::dynamic_log_with(input)
}
