//! Generalized transition descriptor.
//!
//! Every `go_state` form is a `Transition` with some parts left at their
//! defaults: no guard, no actions, `AllPass`, `Between`.

use crate::core::{Action, ActionPosition, Condition, ConditionMode};

/// Guard and actions of one transition attempt.
///
/// A transition without conditions is unguarded. A transition whose
/// conditions were set to an empty list is guarded by that empty list and
/// follows `ConditionMode::evaluate`.
///
/// # Example
///
/// ```rust
/// use hookstate::{ActionPosition, ConditionMode, Transition};
///
/// let transition = Transition::new()
///     .when(|| true)
///     .when(|| false)
///     .condition_mode(ConditionMode::OnePass)
///     .then(|| println!("switching"))
///     .action_position(ActionPosition::After);
///
/// assert!(transition.is_guarded());
/// ```
#[derive(Debug, Default)]
pub struct Transition<'a> {
    conditions: Option<Vec<Condition<'a>>>,
    condition_mode: ConditionMode,
    actions: Vec<Action<'a>>,
    action_position: ActionPosition,
}

impl<'a> Transition<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one guard condition.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: FnMut() -> bool + 'a,
    {
        self.conditions
            .get_or_insert_with(Vec::new)
            .push(Condition::new(predicate));
        self
    }

    /// Append a list of guard conditions. Marks the transition as guarded
    /// even when the list is empty.
    pub fn conditions<I>(mut self, conditions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Condition<'a>>,
    {
        self.conditions
            .get_or_insert_with(Vec::new)
            .extend(conditions.into_iter().map(Into::into));
        self
    }

    pub fn condition_mode(mut self, mode: ConditionMode) -> Self {
        self.condition_mode = mode;
        self
    }

    /// Append one action.
    pub fn then<F>(mut self, action: F) -> Self
    where
        F: FnOnce() + 'a,
    {
        self.actions.push(Action::new(action));
        self
    }

    pub fn actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Action<'a>>,
    {
        self.actions.extend(actions.into_iter().map(Into::into));
        self
    }

    pub fn action_position(mut self, position: ActionPosition) -> Self {
        self.action_position = position;
        self
    }

    pub fn is_guarded(&self) -> bool {
        self.conditions.is_some()
    }

    pub fn mode(&self) -> ConditionMode {
        self.condition_mode
    }

    pub fn position(&self) -> ActionPosition {
        self.action_position
    }

    /// Evaluate the guard. Unguarded transitions always pass.
    pub(crate) fn guard_passes(&mut self) -> bool {
        let mode = self.condition_mode;
        match self.conditions.as_mut() {
            Some(conditions) => mode.evaluate(conditions),
            None => true,
        }
    }

    /// Run the actions, in order, if they are attached at `position`.
    pub(crate) fn run_actions(&mut self, position: ActionPosition) {
        if self.action_position != position {
            return;
        }
        for action in self.actions.drain(..) {
            action.run();
        }
    }
}
