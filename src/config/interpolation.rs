//! Variable interpolation for templates and marker patterns.
//!
//! Templates and configured markers use `${variable}` slots.
//!
//! # Syntax
//!
//! - `${variable_name}` - replaced with variable value
//! - `$${escaped}` - produces literal `${escaped}` in output
//! - `$$` - produces a literal `$`
//!
//! Only the braced form is a slot. A bare `$name` is kept as literal text,
//! and a `${` without its closing `}` is an error.
//!
//! # Example
//!
//! ```
//! use daykit::config::{render, TemplateContext};
//!
//! let ctx = TemplateContext::new().with("padded_day", "07");
//! assert_eq!(render("pub mod day${padded_day};", &ctx).unwrap(), "pub mod day07;");
//! ```

use crate::error::{DaykitError, Result};
use std::collections::BTreeMap;

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// Parse a string containing ${var} interpolations.
///
/// # Errors
///
/// Returns `UnterminatedVariable` when a `${` is never closed.
pub fn parse_interpolation(input: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut chars = input.chars().peekable();
    let mut current_literal = String::new();

    while let Some(c) = chars.next() {
        if c != '$' {
            current_literal.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                if chars.peek() == Some(&'{') {
                    // $${...} -> literal ${...}
                    chars.next();
                    current_literal.push_str("${");
                    for c in chars.by_ref() {
                        current_literal.push(c);
                        if c == '}' {
                            break;
                        }
                    }
                } else {
                    current_literal.push('$');
                }
            }
            Some('{') => {
                chars.next();

                if !current_literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                }

                let mut var_name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    var_name.push(c);
                }

                if !closed {
                    return Err(DaykitError::UnterminatedVariable { name: var_name });
                }
                segments.push(Segment::Variable(var_name));
            }
            _ => current_literal.push(c),
        }
    }

    if !current_literal.is_empty() {
        segments.push(Segment::Literal(current_literal));
    }

    Ok(segments)
}

/// Named values available to a template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    vars: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a variable.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.vars.insert(name.to_string(), value.into());
    }

    /// Look up a variable.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Resolve all variables in an interpolated string.
///
/// Values are inserted verbatim; they are never re-scanned for slots.
///
/// # Errors
///
/// Returns `UnresolvedVariable` if any slot has no value in the context,
/// or `UnterminatedVariable` if a slot is never closed.
pub fn render(input: &str, context: &TemplateContext) -> Result<String> {
    let mut result = String::with_capacity(input.len());

    for segment in parse_interpolation(input)? {
        match segment {
            Segment::Literal(text) => result.push_str(&text),
            Segment::Variable(name) => {
                let value = context
                    .resolve(&name)
                    .ok_or_else(|| DaykitError::UnresolvedVariable { name: name.clone() })?;
                result.push_str(value);
            }
        }
    }

    Ok(result)
}
