//! Side effects attached to a transition.

use std::fmt;

/// Side-effecting step run once as part of a transition.
pub struct Action<'a> {
    run: Box<dyn FnOnce() + 'a>,
}

impl<'a> Action<'a> {
    pub fn new<F>(run: F) -> Self
    where
        F: FnOnce() + 'a,
    {
        Action { run: Box::new(run) }
    }

    pub fn run(self) {
        (self.run)()
    }
}

impl<'a, F> From<F> for Action<'a>
where
    F: FnOnce() + 'a,
{
    fn from(run: F) -> Self {
        Action::new(run)
    }
}

impl fmt::Debug for Action<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// When a transition's actions run relative to the exit/enter sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionPosition {
    /// Before the old state exits; the old state is still installed.
    Before,

    /// After the old state exits and before the new state is installed.
    #[default]
    Between,

    /// After the new state has been installed and entered.
    After,
}
