// SPDX-License-Identifier: MIT OR Apache-2.0

//! Code generation for the logging macros.
//!
//! Every macro expands to the same three-phase block; the only variation
//! is where the level (and the optional local minimum) comes from. The
//! outer `log_enabled!` check compares constants, so call sites below the
//! compile-time floor fold away in optimized builds, and the formatter
//! calls only run once the runtime gate has agreed, so value expressions
//! in a suppressed message are never evaluated.

use crate::parser::{expand_format, parse_value};
use proc_macro::{TokenStream, TokenTree};
use std::collections::VecDeque;

/// The shared expansion skeleton.
fn emit(level: &str, local_min: &str, format_calls: TokenStream) -> TokenStream {
    let src = format!(
        r#"
        {{
            if microlog::log_enabled!({level}) {{
                let __logger = microlog::hidden::global_logger();
                if let Some(mut record) = microlog::hidden::log_with_pre(
                    &__logger,
                    {level},
                    {local_min},
                    microlog::CallSite::new(file!(), line!(), microlog::__function_path!()),
                ) {{
                    let mut formatter = microlog::hidden::Formatter::new(&mut record);
                    {format_calls}
                    microlog::hidden::log_post(&__logger, record);
                }}
            }}
        }}
    "#
    );
    src.parse().unwrap()
}

/// Expansion for the per-level macros (`info!`, `warn!`, ...).
pub fn level_log(input: TokenStream, level: &str) -> TokenStream {
    let mut input: VecDeque<TokenTree> = input.into_iter().collect();
    let expansion = expand_format(&mut input, "formatter");
    emit(
        &format!("microlog::Level::{level}"),
        "microlog::Level::None",
        expansion.output,
    )
}

/// Expansion for `log!(level, "format", ...)`.
pub fn dynamic_log(input: TokenStream) -> TokenStream {
    let mut input: VecDeque<TokenTree> = input.into_iter().collect();
    let level = parse_value(&mut input);
    if level.is_empty() {
        return r#"compile_error!("log! takes a level expression before the format string")"#
            .parse()
            .unwrap();
    }
    let expansion = expand_format(&mut input, "formatter");
    emit(&format!("({level})"), "microlog::Level::None", expansion.output)
}

/// Expansion for `log_with!(level, local_min, "format", ...)`.
pub fn dynamic_log_with(input: TokenStream) -> TokenStream {
    let mut input: VecDeque<TokenTree> = input.into_iter().collect();
    let level = parse_value(&mut input);
    let local_min = parse_value(&mut input);
    if level.is_empty() || local_min.is_empty() {
        return r#"compile_error!("log_with! takes level and local minimum expressions before the format string")"#
            .parse()
            .unwrap();
    }
    let expansion = expand_format(&mut input, "formatter");
    emit(&format!("({level})"), &format!("({local_min})"), expansion.output)
}
