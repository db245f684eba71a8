//! Common utilities that aren't specific to one other subcrate and are
//! unlikely to change frequently. The main purpose of this is to pull logic
//! out of the core crate, because that one changes a lot and requires
//! constant recompilation.
//!
//! **This crate is not semver compliant**. The version is locked to the root
//! workspace version. If you choose to depend directly on this crate, you do
//! so at your own risk of breakage.

#[cfg(any(test, feature = "test"))]
mod test_util;

#[cfg(any(test, feature = "test"))]
pub use test_util::*;

use tracing::error;

/// Extension trait for [Result]
pub trait ResultTraced<T, E>: Sized {
    /// If this is an error, trace it. Return the same result.
    #[must_use]
    fn traced(self) -> Self;
}

impl<T, E: std::error::Error + 'static> ResultTraced<T, E> for Result<T, E> {
    fn traced(self) -> Self {
        self.inspect_err(|err| error!(error = err as &dyn std::error::Error))
    }
}
