//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::config::{MachineConfig, Reentrancy};
use crate::core::{Contains, State, StateSet};
use crate::engine::Machine;

/// Builder for constructing machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use hookstate::{state_machine, MachineBuilder, Reentrancy, State};
///
/// #[derive(Default)]
/// struct Green;
///
/// #[derive(Default)]
/// struct Red;
///
/// state_machine! {
///     enum Light {
///         Green,
///         Red,
///     }
/// }
///
/// impl State<Light> for Green {}
/// impl State<Light> for Red {}
///
/// let light = MachineBuilder::<Light>::new(())
///     .reentrancy(Reentrancy::Forbid)
///     .history_limit(8)
///     .build::<Red>()
///     .unwrap();
///
/// assert!(light.is_state::<Red>());
/// ```
pub struct MachineBuilder<M: StateSet> {
    data: M::Data,
    config: MachineConfig,
    execute_enter: bool,
}

impl<M: StateSet> MachineBuilder<M> {
    /// Create a new builder owning the host data.
    pub fn new(data: M::Data) -> Self {
        Self {
            data,
            config: MachineConfig::default(),
            execute_enter: false,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn reentrancy(mut self, reentrancy: Reentrancy) -> Self {
        self.config.reentrancy = reentrancy;
        self
    }

    pub fn max_deferred(mut self, limit: usize) -> Self {
        self.config.max_deferred = limit;
        self
    }

    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Run the initial state's `enter` hook during `build`.
    pub fn execute_enter(mut self, execute_enter: bool) -> Self {
        self.execute_enter = execute_enter;
        self
    }

    /// Build the machine with a fresh `S` active.
    pub fn build<S>(self) -> Result<Machine<M>, BuildError>
    where
        S: State<M> + Default,
        M: Contains<S>,
    {
        self.build_into(S::default())
    }

    /// Build the machine with `state` active.
    pub fn build_into<S>(self, state: S) -> Result<Machine<M>, BuildError>
    where
        S: State<M>,
        M: Contains<S>,
    {
        if self.config.reentrancy == Reentrancy::Defer && self.config.max_deferred == 0 {
            return Err(BuildError::ZeroDeferredLimit);
        }

        Ok(Machine::start(
            <M as Contains<S>>::wrap(state),
            self.data,
            self.config,
            self.execute_enter,
        ))
    }
}

impl<M: StateSet> Default for MachineBuilder<M>
where
    M::Data: Default,
{
    fn default() -> Self {
        Self::new(Default::default())
    }
}
