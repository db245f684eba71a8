//! A small, synchronous string interpolation engine: substitute values from
//! a [DataContext] into `{{ ... }}` spans of a template, optionally piping
//! them through a fixed table of built-in helpers.
//!
//! The entry point is [interpolate]. Everything else in this crate exists to
//! support it: scanning template text for interpolation spans
//! ([scan]), tokenizing the inside of a span ([tokenize]), reducing nested
//! parenthesised calls and dispatching to helpers ([eval]), and resolving
//! bare tokens against the [DataContext] ([resolve]).

mod context;
mod date;
mod error;
mod eval;
mod helpers;
mod number;
mod resolve;
mod scan;
mod token;
mod tokenize;

pub use context::{ContextValue, DataContext};
pub use error::{EngineError, Logger, NullLogger};

use error::report;
use scan::Segment;

/// Render `template` against `context`, reporting any error to `logger` and
/// returning `None`. Any error encountered while evaluating a single
/// `{{ ... }}` span aborts the whole call - there is no partial recovery.
pub fn interpolate(
    template: &str,
    context: &DataContext,
    logger: &dyn Logger,
) -> Option<String> {
    let mut output = String::with_capacity(template.len());
    for segment in scan::scan(template) {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Expression(expr) => {
                let tokens = tokenize::tokenize(expr);
                match report(logger, eval::eval_expression(&tokens, context)) {
                    Some(value) => output.push_str(&value),
                    None => return None,
                }
            }
        }
    }
    Some(output)
}
