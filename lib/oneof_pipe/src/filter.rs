//! Predicate and type gates as pipeline steps.

use crate::stage::Stage;
use oneof_core::{Nil, Var, VarError};
use std::any::Any;
use std::marker::PhantomData;
use std::ops::{BitOr, Shr};

/// Keep a `T` value only when the predicate holds.
///
/// The result shape is the optional single of `T`: the value rides through
/// when the predicate accepts it and is replaced by emptiness otherwise.
pub struct Filter<T, P> {
    predicate: P,
    _marker: PhantomData<fn(T)>,
}

impl<T, P> Filter<T, P>
where
    T: Any + Clone,
    P: FnMut(&T) -> bool,
{
    pub fn new(predicate: P) -> Filter<T, P> {
        Filter {
            predicate,
            _marker: PhantomData,
        }
    }
}

impl<T, P> Stage for Filter<T, P>
where
    T: Any + Clone,
    P: FnMut(&T) -> bool,
{
    fn accepts(&self, input: &Var) -> bool {
        input.is_empty() || input.holds::<T>()
    }

    fn call(&mut self, input: Var) -> Result<Var, VarError> {
        if input.is_empty() {
            return Ok(input);
        }
        match input.into_alt::<T>() {
            Ok(value) if (self.predicate)(&value) => Ok(Var::optional(value)),
            Ok(_) => Ok(Var::optional_empty::<T>()),
            Err(original) => Err(unhandled(&original)),
        }
    }
}

/// Keep the value only when its runtime type is exactly `T`.
///
/// Unlike [`Filter`] there is no predicate to run: a matching value is
/// restated as a single of `T`, any other type gates to the empty value
/// without ever being touched.
pub struct FilterType<T> {
    _marker: PhantomData<fn(T)>,
}

impl<T: Any + Clone> FilterType<T> {
    pub fn new() -> FilterType<T> {
        FilterType {
            _marker: PhantomData,
        }
    }
}

impl<T: Any + Clone> Default for FilterType<T> {
    fn default() -> Self {
        FilterType::new()
    }
}

impl<T: Any + Clone> Stage for FilterType<T> {
    fn accepts(&self, input: &Var) -> bool {
        input.is_empty() || input.holds::<T>()
    }

    fn call(&mut self, input: Var) -> Result<Var, VarError> {
        if input.is_empty() {
            return Ok(input);
        }
        match input.into_alt::<T>() {
            Ok(value) => Ok(Var::single(value)),
            Err(_) => Ok(Var::empty()),
        }
    }
}

fn unhandled(value: &Var) -> VarError {
    let alt = value
        .active()
        .map_or(std::any::type_name::<Nil>(), |alt| alt.name());
    VarError::UnhandledAlternative { alt }
}

impl<T, P, S> Shr<S> for Filter<T, P>
where
    T: Any + Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
    S: Stage + 'static,
{
    type Output = crate::Sequence;

    fn shr(self, rhs: S) -> crate::Sequence {
        crate::Sequence::of(self).then(rhs)
    }
}

impl<T, P, S> BitOr<S> for Filter<T, P>
where
    T: Any + Clone + 'static,
    P: FnMut(&T) -> bool + 'static,
    S: Stage + 'static,
{
    type Output = crate::Fork;

    fn bitor(self, rhs: S) -> crate::Fork {
        crate::Fork::of(self).or(rhs)
    }
}

impl<T: Any + Clone + 'static, S: Stage + 'static> Shr<S> for FilterType<T> {
    type Output = crate::Sequence;

    fn shr(self, rhs: S) -> crate::Sequence {
        crate::Sequence::of(self).then(rhs)
    }
}

impl<T: Any + Clone + 'static, S: Stage + 'static> BitOr<S> for FilterType<T> {
    type Output = crate::Fork;

    fn bitor(self, rhs: S) -> crate::Fork {
        crate::Fork::of(self).or(rhs)
    }
}
