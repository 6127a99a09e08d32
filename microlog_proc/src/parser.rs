// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token-level parsing of the logging macro argument lists.
//!
//! The macros accept `"literal text {key} more text", key = expr, ...`.
//! There is no dependency on a parsing framework: the raw token trees are
//! walked directly, keys are matched against the `{key}` placeholders in
//! the format string, and the placeholders are compiled into a sequence of
//! `formatter.write_literal(..)` / `formatter.write_val(..)` calls. Value
//! expressions are reassembled verbatim, so anything that parses as an
//! expression works on the right-hand side.

use proc_macro::{TokenStream, TokenTree};
use std::collections::{HashMap, VecDeque};

/// Consumes tokens up to the next `=`, returning the accumulated key.
///
/// `None` means the stream is exhausted (no more pairs); an empty string
/// means malformed input, surfaced later as a missing key.
fn parse_key(input: &mut VecDeque<TokenTree>) -> Option<String> {
    let mut key = String::new();
    loop {
        match input.pop_front() {
            Some(TokenTree::Punct(p)) => {
                if p.as_char() == '=' {
                    return Some(key);
                }
                return Some(String::new());
            }
            Some(TokenTree::Ident(i)) => key.push_str(&i.to_string()),
            Some(TokenTree::Literal(l)) => key.push_str(&l.to_string()),
            Some(TokenTree::Group(g)) => key.push_str(&g.to_string()),
            None => return None,
        }
    }
}

/// Consumes tokens up to the next top-level `,` (or the end), returning
/// the reassembled expression text.
pub fn parse_value(input: &mut VecDeque<TokenTree>) -> String {
    let mut value = String::new();
    loop {
        match input.pop_front() {
            Some(TokenTree::Punct(p)) => {
                if p.as_char() == ',' {
                    return value;
                }
                value.push_str(&p.to_string());
            }
            Some(TokenTree::Ident(i)) => value.push_str(&i.to_string()),
            Some(TokenTree::Literal(l)) => value.push_str(&l.to_string()),
            Some(TokenTree::Group(g)) => value.push_str(&g.to_string()),
            None => return value,
        }
    }
}

/// Collects the trailing `key = value` pairs into a map.
fn parse_pairs(input: &mut VecDeque<TokenTree>) -> Result<HashMap<String, String>, TokenStream> {
    let mut pairs = HashMap::new();
    if input.is_empty() {
        return Ok(pairs);
    }
    match input.pop_front() {
        Some(TokenTree::Punct(p)) if p.as_char() == ',' => {}
        _ => return Err(r#"compile_error!("expected ',' after the format string")"#
            .parse()
            .unwrap()),
    }
    while let Some(key) = parse_key(input) {
        let value = parse_value(input);
        pairs.insert(key, value);
    }
    Ok(pairs)
}

/// The compiled body of a format string.
pub struct FormatExpansion {
    /// `formatter.write_literal(..)` / `formatter.write_val(..)` calls.
    pub output: TokenStream,
}

/// Compiles a format string plus `key = value` pairs into formatter calls
/// on the identifier `formatter`.
///
/// `{{` and `}}` escape literal braces. A `{key}` without a matching pair
/// is a compile error, emitted as such into the expansion.
pub fn expand_format(collect: &mut VecDeque<TokenTree>, formatter: &str) -> FormatExpansion {
    let error = |message: &str| FormatExpansion {
        output: format!(r#"compile_error!("{message}")"#).parse().unwrap(),
    };

    let format_string = match collect.pop_front() {
        Some(TokenTree::Literal(l)) => {
            let text = l.to_string();
            if !text.starts_with('"') || !text.ends_with('"') {
                return error("the format argument must be a string literal");
            }
            text[1..text.len() - 1].to_string()
        }
        _ => return error("the format argument must be a string literal"),
    };

    let pairs = match parse_pairs(collect) {
        Ok(pairs) => pairs,
        Err(output) => return FormatExpansion { output },
    };

    enum Mode {
        Literal(String),
        Key(String),
    }

    let mut source = String::new();
    let mut mode = Mode::Literal(String::new());
    let mut chars = format_string.chars().peekable();
    while let Some(ch) = chars.next() {
        match mode {
            Mode::Literal(mut literal) => {
                if ch == '{' && chars.peek() == Some(&'{') {
                    // escaped brace
                    chars.next();
                    literal.push('{');
                    mode = Mode::Literal(literal);
                } else if ch == '}' && chars.peek() == Some(&'}') {
                    chars.next();
                    literal.push('}');
                    mode = Mode::Literal(literal);
                } else if ch == '{' {
                    if !literal.is_empty() {
                        source.push_str(formatter);
                        source.push_str(".write_literal(\"");
                        source.push_str(&literal);
                        source.push_str("\");\n");
                    }
                    mode = Mode::Key(String::new());
                } else {
                    literal.push(ch);
                    mode = Mode::Literal(literal);
                }
            }
            Mode::Key(mut key) => {
                if ch == '}' {
                    let value = match pairs.get(&key) {
                        Some(value) => value,
                        None => {
                            return FormatExpansion {
                                output: format!(
                                    r#"compile_error!("no value supplied for key {key}")"#
                                )
                                .parse()
                                .unwrap(),
                            };
                        }
                    };
                    source.push_str(formatter);
                    source.push_str(".write_val(");
                    source.push_str(value);
                    source.push_str(");\n");
                    mode = Mode::Literal(String::new());
                } else {
                    key.push(ch);
                    mode = Mode::Key(key);
                }
            }
        }
    }
    match mode {
        Mode::Literal(literal) => {
            if !literal.is_empty() {
                source.push_str(formatter);
                source.push_str(".write_literal(\"");
                source.push_str(&literal);
                source.push_str("\");\n");
            }
        }
        Mode::Key(_) => return error("unclosed '{' in format string"),
    }

    FormatExpansion {
        output: source.parse().unwrap(),
    }
}
