//! Hookstate: a closed-set finite state machine engine
//!
//! A machine is defined by a fixed set of state types known at build time.
//! Exactly one of them is active at a time. Each state may hook `enter`,
//! `exit` and any number of event kinds, and the machine moves between
//! states through guarded transitions that can run actions before, between
//! or after the exit/enter pair.
//!
//! # Core Concepts
//!
//! - **State**: a type implementing `State<M>` for its machine `M`
//! - **State set**: the enum of all states, generated by `state_machine!`
//! - **Machine**: owns the active state and host data, runs transitions
//! - **Handle**: the active state's scoped back-reference to its machine
//! - **Conditions / actions**: transition guards and side effects
//!
//! Naming a state outside the set fails to compile, and so does a handler
//! for an event kind the set does not accept. Sending an event nobody
//! handles is a silent no-op.
//!
//! # Example
//!
//! ```rust
//! use hookstate::{state_machine, ConditionMode, Event, Handle, HandleEvent, Machine, State};
//!
//! #[derive(Default)]
//! struct Idle;
//!
//! #[derive(Default)]
//! struct Running;
//!
//! #[derive(Default)]
//! struct Stopped;
//!
//! #[derive(Default)]
//! struct Play;
//!
//! impl Event for Play {}
//!
//! state_machine! {
//!     enum Player {
//!         Idle,
//!         Running,
//!         Stopped,
//!     }
//!     data: Vec<&'static str>;
//!     events {
//!         Play,
//!     }
//! }
//!
//! impl State<Player> for Idle {
//!     fn exit(&mut self, machine: &mut Handle<'_, Player>) {
//!         machine.data_mut().push("Idle.exit");
//!     }
//! }
//!
//! impl State<Player> for Running {
//!     fn enter(&mut self, machine: &mut Handle<'_, Player>) {
//!         machine.data_mut().push("Running.enter");
//!     }
//! }
//!
//! impl State<Player> for Stopped {}
//!
//! impl HandleEvent<Play, Player> for Idle {
//!     fn handle_event(&mut self, _event: &Play, machine: &mut Handle<'_, Player>) {
//!         machine.go_state::<Running>().expect("deferred");
//!     }
//! }
//!
//! let mut player = Machine::<Player>::initial_state::<Idle>(false);
//!
//! assert!(player.event::<Play>());
//! assert!(player.is_state::<Running>());
//! assert_eq!(player.data(), &vec!["Idle.exit", "Running.enter"]);
//!
//! // A failing guard leaves the machine untouched.
//! assert!(!player.go_state_when::<Stopped, _>([|| false], ConditionMode::AllPass));
//! assert!(player.is_state::<Running>());
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::config::{MachineConfig, Reentrancy};
pub use crate::core::{
    Accepts, Action, ActionPosition, Condition, ConditionMode, Contains, Event, HandleEvent,
    History, State, StateSet, TransitionRecord,
};
pub use crate::engine::{Handle, Machine, MachineError, Transition};

#[doc(hidden)]
pub mod __private {
    pub use crate::builder::route::{HandledRoute, IgnoredRoute, Route};
}
