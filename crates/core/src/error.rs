use thiserror::Error;
use weave_util::ResultTraced;

/// Any error that can occur while interpolating a template. The taxonomy is
/// closed: every failure mode the engine can hit is one of these variants.
///
/// Messages are part of the observable contract - callers (and our own
/// tests) match on the rendered text, so changing a `#[error(...)]` string
/// here is a breaking change.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Unexpected value: {0}")]
    UnexpectedValue(String),

    #[error("{where_} expected {expected} arguments, got {actual}")]
    InvalidArgumentNumber {
        where_: &'static str,
        expected: &'static str,
        actual: usize,
    },

    #[error("Invalid replace arguments: {0}, {1}")]
    InvalidReplaceArguments(String, String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0} expected integer")]
    ExpectedInteger(&'static str),

    #[error("For input string: \"{0}\"")]
    InvalidNumber(String),
}

/// The single stable tag under which every [EngineError] is reported to a
/// [Logger].
pub const ERROR_TAG: &str = "template";

/// A sink for engine-originated errors, injected by the caller. This is the
/// only way [crate::interpolate] surfaces a failure; the function itself
/// returns `None`.
pub trait Logger {
    fn log(&self, tag: &str, error: &EngineError);
}

/// Report a render failure to both the caller's [Logger] and the internal
/// `tracing` subscriber (via [ResultTraced]), then flatten to `None`.
/// Centralizing this keeps every call site in the engine doing the same
/// thing on failure.
pub(crate) fn report<T>(
    logger: &dyn Logger,
    result: Result<T, EngineError>,
) -> Option<T> {
    match result.traced() {
        Ok(value) => Some(value),
        Err(err) => {
            logger.log(ERROR_TAG, &err);
            None
        }
    }
}

/// A [Logger] that discards everything. Useful for callers that don't care
/// about diagnostics, and for tests that only check the return value.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _tag: &str, _error: &EngineError) {}
}
