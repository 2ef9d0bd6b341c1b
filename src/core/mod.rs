//! Core state machine types.
//!
//! This module contains the building blocks every machine is made of:
//! - State hooks via the `State` and `HandleEvent` traits
//! - The closed state set via `StateSet`, `Contains` and `Accepts`
//! - Transition guards (`Condition`, `ConditionMode`)
//! - Transition side effects (`Action`, `ActionPosition`)
//! - A bounded transition journal

mod action;
mod guard;
mod history;
mod state;

pub use action::{Action, ActionPosition};
pub use guard::{Condition, ConditionMode};
pub use history::{History, TransitionRecord};
pub use state::{Accepts, Contains, Event, HandleEvent, State, StateSet};
