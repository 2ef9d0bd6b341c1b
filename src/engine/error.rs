//! Errors raised when a hook's transition request is rejected.

use thiserror::Error;

/// Errors returned by `Handle` transition requests.
///
/// Guard failures are not errors; they show up as a `false` return from the
/// transition methods.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Reentrant transition to '{target}' rejected: machine forbids reentrancy")]
    ReentrancyForbidden { target: &'static str },

    #[error("Deferred transition to '{target}' rejected: limit of {limit} per operation reached")]
    DeferredLimitExceeded { limit: usize, target: &'static str },
}
