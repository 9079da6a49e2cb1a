//! The pipeline step contract and the handler-backed step.
//!
//! A [`Stage`] is one unit of a lazy pipeline: it can be asked whether it
//! accepts a value (by the value's active alternative type) without running
//! anything, and it can be called with an owned value. Acceptance is what
//! lets [`Fork`](crate::Fork) skip a branch that could never dispatch the
//! input instead of invoking it and failing.
//!
//! Every `call` implementation propagates an already-empty input unchanged;
//! a combinator never has to special-case emptiness before delegating.

use oneof_core::{weak_visit, Handler, Var, VarError};

/// One step of a pipeline.
pub trait Stage {
    /// Whether this step can dispatch the value's active alternative.
    ///
    /// An empty value is always accepted; it flows through `call`
    /// untouched.
    fn accepts(&self, input: &Var) -> bool;

    /// Run the step on an owned value.
    ///
    /// Empty inputs pass through unchanged. Calling with a held
    /// alternative no arm covers is an error, not an empty result; use
    /// [`Stage::accepts`] to select before calling.
    fn call(&mut self, input: Var) -> Result<Var, VarError>;
}

/// A step backed by a [`Handler`]'s arm set.
pub struct Step {
    handler: Handler,
}

impl Step {
    /// A step dispatching through `handler`.
    pub fn new(handler: Handler) -> Step {
        Step { handler }
    }

    /// A one-closure step, like [`Handler::of`].
    pub fn of<T, R, F>(f: F) -> Step
    where
        T: std::any::Any + Clone,
        R: std::any::Any + Clone,
        F: FnMut(T) -> R + 'static,
    {
        Step::new(Handler::of(f))
    }
}

impl Stage for Step {
    fn accepts(&self, input: &Var) -> bool {
        match input.active() {
            Some(alt) => self.handler.handles_id(alt.id()),
            None => true,
        }
    }

    fn call(&mut self, input: Var) -> Result<Var, VarError> {
        if input.is_empty() {
            return Ok(input);
        }
        weak_visit(&mut self.handler, input)
    }
}

impl From<Handler> for Step {
    fn from(handler: Handler) -> Step {
        Step::new(handler)
    }
}

impl<S: Stage + 'static> std::ops::Shr<S> for Step {
    type Output = crate::Sequence;

    fn shr(self, rhs: S) -> crate::Sequence {
        crate::Sequence::of(self).then(rhs)
    }
}

impl<S: Stage + 'static> std::ops::BitOr<S> for Step {
    type Output = crate::Fork;

    fn bitor(self, rhs: S) -> crate::Fork {
        crate::Fork::of(self).or(rhs)
    }
}

/// Composition entry points available on every step type.
///
/// [`Sequence`](crate::Sequence) and [`Fork`](crate::Fork) shadow these
/// with inherent methods that extend themselves in place, so chained
/// composition stays flat regardless of grouping.
pub trait StageExt: Stage + Sized + 'static {
    /// Feed this step's output into `next`.
    fn then<S: Stage + 'static>(self, next: S) -> crate::Sequence {
        crate::Sequence::of(self).then(next)
    }

    /// Fall back to `next` when this step comes up empty.
    fn or<S: Stage + 'static>(self, next: S) -> crate::Fork {
        crate::Fork::of(self).or(next)
    }
}

impl<S: Stage + Sized + 'static> StageExt for S {}
