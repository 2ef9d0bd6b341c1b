//! Event routing support for `state_machine!`.
//!
//! The macro wraps each arm's state in a `Route` and calls `route` on it.
//! Method resolution picks `HandledRoute` by value when the state
//! implements the handler, and falls back to `IgnoredRoute` through an
//! autoref otherwise. Both traits must be in scope at the call site.

use crate::core::{Accepts, Event, HandleEvent, StateSet};
use crate::engine::Handle;
use std::marker::PhantomData;

/// State `S` of set `M` being offered an event of kind `E`.
pub struct Route<'s, S, E, M> {
    state: &'s mut S,
    kind: PhantomData<fn(&E, &M)>,
}

impl<'s, S, E, M> Route<'s, S, E, M> {
    pub fn new(state: &'s mut S) -> Self {
        Self {
            state,
            kind: PhantomData,
        }
    }
}

pub trait HandledRoute<E, M: StateSet> {
    fn route(self, event: &E, machine: &mut Handle<'_, M>) -> bool;
}

impl<S, E, M> HandledRoute<E, M> for Route<'_, S, E, M>
where
    E: Event,
    M: Accepts<E>,
    S: HandleEvent<E, M>,
{
    fn route(self, event: &E, machine: &mut Handle<'_, M>) -> bool {
        self.state.handle_event(event, machine);
        true
    }
}

pub trait IgnoredRoute<E, M: StateSet> {
    fn route(&self, event: &E, machine: &mut Handle<'_, M>) -> bool;
}

impl<S, E, M: StateSet> IgnoredRoute<E, M> for Route<'_, S, E, M> {
    fn route(&self, _event: &E, _machine: &mut Handle<'_, M>) -> bool {
        false
    }
}
