//! Fallback composition of steps.

use crate::stage::Stage;
use oneof_core::{Nil, Var, VarError};
use std::ops::{BitOr, Shr};
use tracing::trace;

/// A set of alternative branches tried in order.
///
/// Each accepted branch gets its own copy of the *original* input; the
/// first non-empty result wins and later branches are never invoked. A
/// branch that does not accept the input's active alternative type is
/// skipped outright rather than called and failed. When every branch
/// comes up empty the last empty result is returned, so its shape reflects
/// the branch that actually ran. A held input no branch accepts is a
/// coverage failure.
#[derive(Default)]
pub struct Fork {
    branches: Vec<Box<dyn Stage>>,
}

impl Fork {
    /// A fork with no branches.
    pub fn new() -> Fork {
        Fork::default()
    }

    /// A one-branch fork.
    pub fn of(stage: impl Stage + 'static) -> Fork {
        Fork::new().or(stage)
    }

    /// Append a fallback branch.
    pub fn or(mut self, stage: impl Stage + 'static) -> Fork {
        self.branches.push(Box::new(stage));
        self
    }

    /// Number of branches.
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// Whether the fork has no branches.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

impl Stage for Fork {
    fn accepts(&self, input: &Var) -> bool {
        input.is_empty() || self.branches.iter().any(|branch| branch.accepts(input))
    }

    fn call(&mut self, input: Var) -> Result<Var, VarError> {
        if input.is_empty() {
            return Ok(input);
        }
        let mut last_empty = None;
        for branch in &mut self.branches {
            if !branch.accepts(&input) {
                continue;
            }
            let result = branch.call(input.clone())?;
            if result.is_some() {
                return Ok(result);
            }
            last_empty = Some(result);
        }
        match last_empty {
            Some(empty) => {
                trace!(branches = self.branches.len(), "fork exhausted");
                Ok(empty)
            }
            None => {
                let alt = input
                    .active()
                    .map_or(std::any::type_name::<Nil>(), |alt| alt.name());
                Err(VarError::UnhandledAlternative { alt })
            }
        }
    }
}

impl<S: Stage + 'static> Shr<S> for Fork {
    type Output = crate::Sequence;

    fn shr(self, rhs: S) -> crate::Sequence {
        crate::Sequence::of(self).then(rhs)
    }
}

impl<S: Stage + 'static> BitOr<S> for Fork {
    type Output = Fork;

    fn bitor(self, rhs: S) -> Fork {
        self.or(rhs)
    }
}

/// Build a [`Fork`] from a list of branches: `fork![by_int, by_str]`.
#[macro_export]
macro_rules! fork {
    ($($stage:expr),* $(,)?) => {{
        let fork = $crate::Fork::new();
        $(let fork = fork.or($stage);)*
        fork
    }};
}
