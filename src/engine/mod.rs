//! The machine and its transition engine.

pub mod error;
mod handle;
mod machine;
mod transition;

pub use error::MachineError;
pub use handle::Handle;
pub use machine::Machine;
pub use transition::Transition;
