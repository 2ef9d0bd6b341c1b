//! Guard conditions for controlling state transitions.
//!
//! Conditions are zero-argument predicates evaluated before a transition
//! touches the machine. A list of conditions is combined by a
//! `ConditionMode`.

use std::fmt;

/// Predicate that gates whether a transition proceeds.
///
/// Side effects inside a condition are legal, but a condition may not run
/// at all when an earlier one already decided the outcome.
///
/// # Example
///
/// ```rust
/// use hookstate::Condition;
///
/// let limit = 3;
/// let mut below_limit = Condition::new(|| limit > 2);
///
/// assert!(below_limit.check());
/// ```
pub struct Condition<'a> {
    predicate: Box<dyn FnMut() -> bool + 'a>,
}

impl<'a> Condition<'a> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: FnMut() -> bool + 'a,
    {
        Condition {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn check(&mut self) -> bool {
        (self.predicate)()
    }
}

impl<'a, F> From<F> for Condition<'a>
where
    F: FnMut() -> bool + 'a,
{
    fn from(predicate: F) -> Self {
        Condition::new(predicate)
    }
}

impl fmt::Debug for Condition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}

/// How a list of conditions combines into one guard result.
///
/// Conditions are evaluated left to right and evaluation stops as soon as
/// the outcome is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConditionMode {
    /// At least one condition must hold.
    OnePass,

    /// Every condition must hold.
    #[default]
    AllPass,
}

impl ConditionMode {
    /// Combine `conditions` under this mode.
    ///
    /// An empty list passes under `AllPass` and fails under `OnePass`.
    pub fn evaluate(self, conditions: &mut [Condition<'_>]) -> bool {
        match self {
            Self::AllPass => conditions.iter_mut().all(Condition::check),
            Self::OnePass => conditions.iter_mut().any(Condition::check),
        }
    }
}
