//! Machine configuration.
//!
//! `MachineConfig` is plain serde data so a host can embed it in its own
//! configuration files. Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

/// Default number of deferred transitions one operation may apply.
pub const DEFAULT_MAX_DEFERRED: usize = 64;

/// Default number of journal records kept per machine.
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// What happens when a hook asks its machine to transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reentrancy {
    /// Queue the request and apply it once the running operation finishes
    #[default]
    Defer,

    /// Reject the request with `MachineError::ReentrancyForbidden`
    Forbid,
}

/// Runtime settings of a machine.
///
/// # Example
///
/// ```rust
/// use hookstate::{MachineConfig, Reentrancy};
///
/// let config: MachineConfig = serde_json::from_str(r#"{ "reentrancy": "forbid" }"#).unwrap();
///
/// assert_eq!(config.reentrancy, Reentrancy::Forbid);
/// assert_eq!(config.max_deferred, hookstate::config::DEFAULT_MAX_DEFERRED);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Policy for transitions requested from inside hooks
    pub reentrancy: Reentrancy,

    /// Upper bound on deferred transitions applied by one operation
    pub max_deferred: usize,

    /// Journal capacity; zero disables the journal
    pub history_limit: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            reentrancy: Reentrancy::Defer,
            max_deferred: DEFAULT_MAX_DEFERRED,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
