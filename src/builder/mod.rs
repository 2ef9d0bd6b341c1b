//! Builder API for ergonomic machine construction.
//!
//! This module provides the `state_machine!` macro that declares a closed
//! state set, and a fluent builder for configuring a machine.

pub mod error;
pub mod machine;
pub mod macros;
pub(crate) mod route;

pub use error::BuildError;
pub use machine::MachineBuilder;
