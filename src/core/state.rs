//! State traits for the closed state set of a machine.
//!
//! A machine is defined by one enum with an arm per concrete state type.
//! The `state_machine!` macro generates the enum together with its
//! `StateSet`, `Contains` and `Accepts` impls, but they can also be
//! written by hand.

use crate::engine::Handle;
use std::any::{Any, TypeId};

/// Marker for event kinds a machine can route to its states.
///
/// Events carry no engine-imposed payload. `Machine::event` builds one from
/// `Default`; `Machine::dispatch` sends a caller-built value.
pub trait Event: Any {}

/// Behavior of a single concrete state of machine `M`.
///
/// Both hooks are optional and default to no-ops. The `Handle` passed to a
/// hook is the state's back-reference to its machine. It only lives for the
/// duration of the hook call, so a retired state can never reach the
/// machine again.
///
/// # Example
///
/// ```rust
/// use hookstate::{state_machine, Handle, State};
///
/// #[derive(Default)]
/// struct Closed;
///
/// #[derive(Default)]
/// struct Open;
///
/// state_machine! {
///     enum Door {
///         Closed,
///         Open,
///     }
///     data: u32;
/// }
///
/// impl State<Door> for Closed {}
///
/// impl State<Door> for Open {
///     fn enter(&mut self, machine: &mut Handle<'_, Door>) {
///         *machine.data_mut() += 1;
///     }
/// }
/// ```
pub trait State<M: StateSet>: 'static {
    /// Called after the state has been installed as the active state.
    fn enter(&mut self, _machine: &mut Handle<'_, M>) {}

    /// Called while the state is still installed, right before it is retired.
    fn exit(&mut self, _machine: &mut Handle<'_, M>) {}
}

/// Event handler of a state for one event kind.
///
/// A state without an impl for `E` silently ignores `E`. Implementing the
/// handler requires `E` to be accepted by the machine, so every handler
/// that compiles is reachable.
pub trait HandleEvent<E: Event, M: Accepts<E>>: State<M> {
    fn handle_event(&mut self, event: &E, machine: &mut Handle<'_, M>);
}

/// The closed set of states of one machine.
///
/// Implementors are enums with exactly one arm per concrete state type.
/// Hook dispatch is an exhaustive match over the active arm.
pub trait StateSet: Sized + 'static {
    /// Host data owned by the machine and reachable from every hook.
    type Data: 'static;

    /// Name of the active arm, used in logs and the transition journal.
    fn name(&self) -> &'static str;

    /// Type of the state held by the active arm. State identity checks
    /// compare against this, never against names.
    fn active_type(&self) -> TypeId;

    fn enter(&mut self, machine: &mut Handle<'_, Self>);

    fn exit(&mut self, machine: &mut Handle<'_, Self>);

    /// Route `event` to the active state. Returns `false` when the active
    /// state has no handler for the event's kind, including kinds the set
    /// does not accept at all.
    fn route(&mut self, event: &dyn Any, machine: &mut Handle<'_, Self>) -> bool;
}

/// Membership of state type `S` in the state set.
///
/// Operations that name a target state require this bound, so naming a
/// state outside the set is rejected at build time.
pub trait Contains<S>: StateSet {
    /// Name of the arm holding `S`. Unique within the set.
    const NAME: &'static str;

    fn wrap(state: S) -> Self;

    fn get(&self) -> Option<&S>;

    fn get_mut(&mut self) -> Option<&mut S>;
}

/// Event kind `E` belongs to the vocabulary of the state set.
///
/// `StateSet::route` must forward accepted kinds to every state that
/// implements `HandleEvent<E, Self>`.
pub trait Accepts<E: Event>: StateSet {}
