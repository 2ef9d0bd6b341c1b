//! Back-reference from an active state to its machine.

use crate::config::{MachineConfig, Reentrancy};
use crate::core::{Contains, State, StateSet};
use crate::engine::error::MachineError;
use crate::engine::transition::Transition;
use std::any::TypeId;
use std::collections::VecDeque;
use tracing::warn;
use uuid::Uuid;

/// A transition requested from inside a hook. The target is built only
/// once the request's guard has passed.
pub(crate) struct Request<M> {
    pub(crate) target: &'static str,
    pub(crate) build: Box<dyn FnOnce() -> M>,
    pub(crate) transition: Transition<'static>,
}

/// FIFO of transitions requested from hooks during one operation.
pub(crate) struct Deferred<M> {
    policy: Reentrancy,
    limit: usize,
    applied: usize,
    queue: VecDeque<Request<M>>,
}

impl<M: StateSet> Deferred<M> {
    pub(crate) fn new(config: &MachineConfig) -> Self {
        Self {
            policy: config.reentrancy,
            limit: config.max_deferred,
            applied: 0,
            queue: VecDeque::new(),
        }
    }

    fn push(&mut self, machine: Uuid, request: Request<M>) -> Result<(), MachineError> {
        let target = request.target;

        if self.policy == Reentrancy::Forbid {
            warn!(%machine, to = target, "reentrant transition rejected");
            return Err(MachineError::ReentrancyForbidden { target });
        }

        if self.applied + self.queue.len() >= self.limit {
            warn!(%machine, to = target, limit = self.limit, "deferred transition limit reached");
            return Err(MachineError::DeferredLimitExceeded {
                limit: self.limit,
                target,
            });
        }

        self.queue.push_back(request);
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Option<Request<M>> {
        let request = self.queue.pop_front()?;
        self.applied += 1;
        Some(request)
    }

    /// Start counting for a new top-level operation.
    pub(crate) fn reset(&mut self) {
        self.applied = 0;
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }
}

/// The machine as seen from inside a hook.
///
/// A handle is created for each hook call and borrows the machine only for
/// that call. It gives access to the host data and lets the state request
/// further transitions, which the machine applies in request order once the
/// running operation has finished.
///
/// # Example
///
/// ```rust
/// use hookstate::{state_machine, Event, Handle, HandleEvent, Machine, State};
///
/// #[derive(Default)]
/// struct Waiting;
///
/// #[derive(Default)]
/// struct Done;
///
/// #[derive(Default)]
/// struct Finish;
///
/// impl Event for Finish {}
///
/// state_machine! {
///     enum Job {
///         Waiting,
///         Done,
///     }
///     events {
///         Finish,
///     }
/// }
///
/// impl State<Job> for Waiting {}
/// impl State<Job> for Done {}
///
/// impl HandleEvent<Finish, Job> for Waiting {
///     fn handle_event(&mut self, _event: &Finish, machine: &mut Handle<'_, Job>) {
///         machine.go_state::<Done>().expect("deferred");
///     }
/// }
///
/// let mut job = Machine::<Job>::initial_state::<Waiting>(false);
/// job.event::<Finish>();
/// assert!(job.is_state::<Done>());
/// ```
pub struct Handle<'m, M: StateSet> {
    id: Uuid,
    active: &'static str,
    active_type: TypeId,
    data: &'m mut M::Data,
    deferred: &'m mut Deferred<M>,
}

impl<'m, M: StateSet> Handle<'m, M> {
    pub(crate) fn new(
        id: Uuid,
        active: &M,
        data: &'m mut M::Data,
        deferred: &'m mut Deferred<M>,
    ) -> Self {
        Self {
            id,
            active: active.name(),
            active_type: active.active_type(),
            data,
            deferred,
        }
    }

    /// Id of the hosting machine.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Name of the state whose hook is running.
    pub fn active_name(&self) -> &'static str {
        self.active
    }

    pub fn is_state<S>(&self) -> bool
    where
        S: State<M>,
        M: Contains<S>,
    {
        self.active_type == TypeId::of::<S>()
    }

    pub fn data(&self) -> &M::Data {
        &*self.data
    }

    pub fn data_mut(&mut self) -> &mut M::Data {
        &mut *self.data
    }

    /// Number of requests queued and not yet applied.
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    /// Request an unconditional transition to a fresh `S`.
    pub fn go_state<S>(&mut self) -> Result<(), MachineError>
    where
        S: State<M> + Default,
        M: Contains<S>,
    {
        self.apply::<S>(Transition::new())
    }

    /// Request a transition to a fresh `S` with guard and actions. The guard
    /// is evaluated when the request is applied, not when it is made.
    pub fn apply<S>(&mut self, transition: Transition<'static>) -> Result<(), MachineError>
    where
        S: State<M> + Default,
        M: Contains<S>,
    {
        self.request::<S, _>(|| <M as Contains<S>>::wrap(S::default()), transition)
    }

    /// Request a transition to a caller-built state value.
    pub fn go_state_into<S>(
        &mut self,
        state: S,
        transition: Transition<'static>,
    ) -> Result<(), MachineError>
    where
        S: State<M>,
        M: Contains<S>,
    {
        self.request::<S, _>(move || <M as Contains<S>>::wrap(state), transition)
    }

    fn request<S, F>(
        &mut self,
        build: F,
        transition: Transition<'static>,
    ) -> Result<(), MachineError>
    where
        M: Contains<S>,
        F: FnOnce() -> M + 'static,
    {
        let request = Request {
            target: <M as Contains<S>>::NAME,
            build: Box::new(build),
            transition,
        };
        self.deferred.push(self.id, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct On;

    #[derive(Default)]
    struct Off;

    crate::state_machine! {
        enum Switch {
            On,
            Off,
        }
        data: u8;
    }

    impl State<Switch> for On {}
    impl State<Switch> for Off {}

    fn config(reentrancy: Reentrancy, max_deferred: usize) -> MachineConfig {
        MachineConfig {
            reentrancy,
            max_deferred,
            ..MachineConfig::default()
        }
    }

    #[test]
    fn handle_exposes_data_and_active_state() {
        let mut data = 7u8;
        let mut deferred = Deferred::<Switch>::new(&MachineConfig::default());
        let id = Uuid::new_v4();
        let mut handle = Handle::new(id, &Switch::On(On), &mut data, &mut deferred);

        assert_eq!(handle.id(), id);
        assert!(handle.is_state::<On>());
        assert!(!handle.is_state::<Off>());
        assert_eq!(handle.active_name(), "On");

        *handle.data_mut() += 1;
        assert_eq!(*handle.data(), 8);
    }

    #[test]
    fn requests_queue_in_order() {
        let mut data = 0u8;
        let mut deferred = Deferred::<Switch>::new(&MachineConfig::default());
        let mut handle = Handle::new(Uuid::new_v4(), &Switch::On(On), &mut data, &mut deferred);

        handle.go_state::<Off>().unwrap();
        handle.go_state::<On>().unwrap();
        assert_eq!(handle.pending(), 2);

        assert_eq!(deferred.pop().map(|r| r.target), Some("Off"));
        assert_eq!(deferred.pop().map(|r| r.target), Some("On"));
        assert!(deferred.pop().is_none());
    }

    #[test]
    fn forbid_policy_rejects_requests() {
        let mut data = 0u8;
        let mut deferred = Deferred::<Switch>::new(&config(Reentrancy::Forbid, 8));
        let mut handle = Handle::new(Uuid::new_v4(), &Switch::On(On), &mut data, &mut deferred);

        assert_eq!(
            handle.go_state::<Off>(),
            Err(MachineError::ReentrancyForbidden { target: "Off" })
        );
        assert_eq!(handle.pending(), 0);
    }

    #[test]
    fn limit_counts_applied_and_queued_requests() {
        let mut data = 0u8;
        let mut deferred = Deferred::<Switch>::new(&config(Reentrancy::Defer, 2));

        {
            let mut handle = Handle::new(Uuid::new_v4(), &Switch::On(On), &mut data, &mut deferred);
            handle.go_state::<Off>().unwrap();
        }
        assert!(deferred.pop().is_some());

        let mut handle = Handle::new(Uuid::new_v4(), &Switch::Off(Off), &mut data, &mut deferred);
        handle.go_state::<On>().unwrap();
        assert_eq!(
            handle.go_state::<Off>(),
            Err(MachineError::DeferredLimitExceeded {
                limit: 2,
                target: "Off"
            })
        );

        deferred.reset();
        assert_eq!(deferred.len(), 1);
    }
}
