//! Build errors for the machine builder.

use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("max_deferred is 0 but reentrancy is 'defer'. Raise the limit or forbid reentrancy")]
    ZeroDeferredLimit,
}
