//! Sequential composition of steps.

use crate::stage::Stage;
use oneof_core::{Var, VarError};
use std::ops::{BitOr, Shr};
use tracing::trace;

/// An ordered chain of steps.
///
/// Calling the chain applies each step left to right. Once a step produces
/// an empty value, the remaining steps see it and pass it through without
/// dispatching, so emptiness short-circuits the rest of the chain. A chain
/// with no steps is the identity.
#[derive(Default)]
pub struct Sequence {
    stages: Vec<Box<dyn Stage>>,
}

impl Sequence {
    /// The identity chain.
    pub fn new() -> Sequence {
        Sequence::default()
    }

    /// A one-step chain.
    pub fn of(stage: impl Stage + 'static) -> Sequence {
        Sequence::new().then(stage)
    }

    /// Append a step.
    pub fn then(mut self, stage: impl Stage + 'static) -> Sequence {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of steps in the chain.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain is the identity.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Stage for Sequence {
    fn accepts(&self, input: &Var) -> bool {
        match self.stages.first() {
            Some(first) => first.accepts(input),
            None => true,
        }
    }

    fn call(&mut self, input: Var) -> Result<Var, VarError> {
        trace!(steps = self.stages.len(), "sequence");
        self.stages
            .iter_mut()
            .try_fold(input, |value, stage| stage.call(value))
    }
}

impl<S: Stage + 'static> Shr<S> for Sequence {
    type Output = Sequence;

    fn shr(self, rhs: S) -> Sequence {
        self.then(rhs)
    }
}

impl<S: Stage + 'static> BitOr<S> for Sequence {
    type Output = crate::Fork;

    fn bitor(self, rhs: S) -> crate::Fork {
        crate::Fork::of(self).or(rhs)
    }
}

/// Build a [`Sequence`] from a list of steps: `sequence![add1, add1]`.
/// `sequence![]` is the identity chain.
#[macro_export]
macro_rules! sequence {
    ($($stage:expr),* $(,)?) => {{
        let seq = $crate::Sequence::new();
        $(let seq = seq.then($stage);)*
        seq
    }};
}
