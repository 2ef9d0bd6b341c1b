//! State machine that owns the active state and runs transitions.

use crate::config::MachineConfig;
use crate::core::{
    Action, ActionPosition, Condition, ConditionMode, Contains, Event, History, State, StateSet,
};
use crate::engine::handle::{Deferred, Handle};
use crate::engine::transition::Transition;
use std::any::{type_name, TypeId};
use tracing::{debug, trace};
use uuid::Uuid;

/// State machine over the closed state set `M`.
///
/// Exactly one state is active at any time. The machine owns it by value
/// together with the host data `M::Data`.
///
/// Every transition runs the same sequence:
///
/// 1. evaluate the guard, if any; on failure return `false` untouched
/// 2. `Before` actions
/// 3. `exit` of the active state
/// 4. `Between` actions
/// 5. build and install the new state
/// 6. `enter` of the new state
/// 7. `After` actions
///
/// Transitions requested by hooks through their `Handle` are applied
/// afterwards, in request order, each running the full sequence.
pub struct Machine<M: StateSet> {
    id: Uuid,
    state: M,
    data: M::Data,
    config: MachineConfig,
    deferred: Deferred<M>,
    history: History,
}

impl<M: StateSet> Machine<M> {
    /// Create a machine with `S` active and default host data.
    ///
    /// `S::enter` runs only when `execute_enter` is set.
    pub fn initial_state<S>(execute_enter: bool) -> Self
    where
        S: State<M> + Default,
        M: Contains<S>,
        M::Data: Default,
    {
        Self::with_data::<S>(Default::default(), execute_enter)
    }

    /// Create a machine with `S` active and the given host data.
    pub fn with_data<S>(data: M::Data, execute_enter: bool) -> Self
    where
        S: State<M> + Default,
        M: Contains<S>,
    {
        Self::start(
            <M as Contains<S>>::wrap(S::default()),
            data,
            MachineConfig::default(),
            execute_enter,
        )
    }

    pub(crate) fn start(
        initial: M,
        data: M::Data,
        config: MachineConfig,
        execute_enter: bool,
    ) -> Self {
        let mut machine = Self {
            id: Uuid::new_v4(),
            state: initial,
            data,
            deferred: Deferred::new(&config),
            history: History::new(config.history_limit),
            config,
        };
        debug!(
            machine = %machine.id,
            state = machine.state.name(),
            execute_enter,
            "machine initialized"
        );

        if execute_enter {
            machine.deferred.reset();
            machine.enter();
            machine.drain();
        }
        machine
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Check if `S` is the active state (nominal type identity).
    pub fn is_state<S>(&self) -> bool
    where
        S: State<M>,
        M: Contains<S>,
    {
        self.state.active_type() == TypeId::of::<S>()
    }

    /// The active state, if it is an `S`.
    pub fn state<S>(&self) -> Option<&S>
    where
        M: Contains<S>,
    {
        <M as Contains<S>>::get(&self.state)
    }

    pub fn state_mut<S>(&mut self) -> Option<&mut S>
    where
        M: Contains<S>,
    {
        <M as Contains<S>>::get_mut(&mut self.state)
    }

    pub fn active(&self) -> &M {
        &self.state
    }

    pub fn active_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn data(&self) -> &M::Data {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut M::Data {
        &mut self.data
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Send a default-built `E` to the active state.
    ///
    /// Returns `false` when the active state has no handler for `E`.
    pub fn event<E>(&mut self) -> bool
    where
        E: Event + Default,
    {
        self.dispatch(E::default())
    }

    /// Send `event` to the active state.
    pub fn dispatch<E>(&mut self, event: E) -> bool
    where
        E: Event,
    {
        self.deferred.reset();
        let handled = {
            let (state, mut handle) = self.split();
            state.route(&event, &mut handle)
        };
        trace!(
            machine = %self.id,
            event = type_name::<E>(),
            state = self.state.name(),
            handled,
            "event routed"
        );
        self.drain();
        handled
    }

    /// Unconditional transition to a fresh `S`.
    pub fn go_state<S>(&mut self) -> bool
    where
        S: State<M> + Default,
        M: Contains<S>,
    {
        self.apply::<S>(Transition::new())
    }

    /// Guarded transition to a fresh `S`. Returns `false` without touching
    /// the machine when the guard fails.
    pub fn go_state_when<'a, S, I>(&mut self, conditions: I, mode: ConditionMode) -> bool
    where
        S: State<M> + Default,
        M: Contains<S>,
        I: IntoIterator,
        I::Item: Into<Condition<'a>>,
    {
        self.apply::<S>(Transition::new().conditions(conditions).condition_mode(mode))
    }

    /// Unconditional transition to a fresh `S` running `actions` at
    /// `position`.
    pub fn go_state_then<'a, S, I>(&mut self, actions: I, position: ActionPosition) -> bool
    where
        S: State<M> + Default,
        M: Contains<S>,
        I: IntoIterator,
        I::Item: Into<Action<'a>>,
    {
        self.apply::<S>(Transition::new().actions(actions).action_position(position))
    }

    /// Guarded transition to a fresh `S` with actions.
    pub fn go_state_guarded<'a, S, C, A>(
        &mut self,
        conditions: C,
        actions: A,
        mode: ConditionMode,
        position: ActionPosition,
    ) -> bool
    where
        S: State<M> + Default,
        M: Contains<S>,
        C: IntoIterator,
        C::Item: Into<Condition<'a>>,
        A: IntoIterator,
        A::Item: Into<Action<'a>>,
    {
        self.apply::<S>(
            Transition::new()
                .conditions(conditions)
                .condition_mode(mode)
                .actions(actions)
                .action_position(position),
        )
    }

    /// Run `transition` towards a fresh `S`. The state is only built once
    /// the guard has passed and the `Between` actions have run.
    pub fn apply<S>(&mut self, transition: Transition<'_>) -> bool
    where
        S: State<M> + Default,
        M: Contains<S>,
    {
        self.run::<S, _>(|| <M as Contains<S>>::wrap(S::default()), transition)
    }

    /// Unconditional transition to a caller-built state value.
    pub fn go_state_into<S>(&mut self, state: S) -> bool
    where
        S: State<M>,
        M: Contains<S>,
    {
        self.apply_into(state, Transition::new())
    }

    /// Run `transition` towards a caller-built state value.
    pub fn apply_into<S>(&mut self, state: S, transition: Transition<'_>) -> bool
    where
        S: State<M>,
        M: Contains<S>,
    {
        self.run::<S, _>(move || <M as Contains<S>>::wrap(state), transition)
    }

    fn run<S, F>(&mut self, build: F, transition: Transition<'_>) -> bool
    where
        M: Contains<S>,
        F: FnOnce() -> M,
    {
        self.deferred.reset();
        let moved = self.transition(<M as Contains<S>>::NAME, build, transition, false);
        self.drain();
        moved
    }

    fn transition<F>(
        &mut self,
        to: &'static str,
        build: F,
        mut transition: Transition<'_>,
        deferred: bool,
    ) -> bool
    where
        F: FnOnce() -> M,
    {
        let from = self.state.name();

        if !transition.guard_passes() {
            debug!(machine = %self.id, from, to, deferred, "transition blocked by guard");
            return false;
        }

        transition.run_actions(ActionPosition::Before);
        self.exit();
        transition.run_actions(ActionPosition::Between);
        self.state = build();
        self.enter();
        transition.run_actions(ActionPosition::After);

        self.history.record(from, to, deferred);
        debug!(machine = %self.id, from, to, deferred, "transition applied");
        true
    }

    /// Apply transitions requested by hooks until none are left.
    fn drain(&mut self) {
        while let Some(request) = self.deferred.pop() {
            self.transition(request.target, request.build, request.transition, true);
        }
    }

    fn enter(&mut self) {
        let (state, mut handle) = self.split();
        trace!(machine = %handle.id(), state = handle.active_name(), "enter");
        StateSet::enter(state, &mut handle);
    }

    fn exit(&mut self) {
        let (state, mut handle) = self.split();
        trace!(machine = %handle.id(), state = handle.active_name(), "exit");
        StateSet::exit(state, &mut handle);
    }

    fn split(&mut self) -> (&mut M, Handle<'_, M>) {
        let handle = Handle::new(self.id, &self.state, &mut self.data, &mut self.deferred);
        (&mut self.state, handle)
    }
}
