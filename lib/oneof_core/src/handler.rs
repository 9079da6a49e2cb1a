//! Handlers: sets of typed arms for dispatch.
//!
//! A [`Handler`] is the runtime stand-in for an overload set: each arm
//! accepts exactly one alternative type (or the empty marker) and declares
//! the shape its auto-wrapped result will have, so result-shape inference
//! can run before anything is invoked.
//!
//! Arm constructors choose the wrap mode that C++-style overload detection
//! would infer from the return type:
//! - [`Handler::on`]: plain-value handler; the result wraps into
//!   `Single` (or `Empty` for a `()`-returning action).
//! - [`Handler::bind`]: handler that already returns a [`Var`]; its
//!   result shape cannot be seen statically, so it is declared explicitly.
//! - [`Handler::on_empty`] / [`Handler::bind_empty`]: the same two
//!   flavors for the empty-marker case.
//!
//! The first arm registered for a type wins; later arms for the same type
//! are ignored, like the earlier overload in a resolution order.

use crate::error::VarError;
use crate::shape::Shape;
use crate::value::{wrap, wrapped_shape, AltSlot, Var};
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};

type ArmFn = Box<dyn FnMut(Option<AltSlot>) -> Var>;

struct Arm {
    results: Result<Shape, VarError>,
    call: ArmFn,
}

/// Result shape read off a plain return type.
///
/// A closure returning [`Var`] has no shape visible in its type; the
/// failure is recorded on the arm and reported by result-shape inference,
/// naming the declaring constructor to use instead.
fn inferred_results<R: 'static>(declare_with: &'static str) -> Result<Shape, VarError> {
    if TypeId::of::<R>() == TypeId::of::<Var>() {
        return Err(VarError::UndeclaredResultShape { declare_with });
    }
    Ok(wrapped_shape::<R>())
}

/// An arm set with by-type lookup.
#[derive(Default)]
pub struct Handler {
    arms: Vec<Arm>,
    by_type: FxHashMap<TypeId, usize>,
    empty_arm: Option<usize>,
}

impl Handler {
    /// An empty handler; add arms with the builder methods.
    pub fn new() -> Handler {
        Handler::default()
    }

    /// A handler with a single plain-value arm, the common one-closure
    /// case.
    pub fn of<T, R, F>(f: F) -> Handler
    where
        T: Any + Clone,
        R: Any + Clone,
        F: FnMut(T) -> R + 'static,
    {
        Handler::new().on(f)
    }

    /// Add an arm for alternative `T` returning a plain value.
    ///
    /// The result wraps into `Single<R>`, or `Empty` when `R` is `()`. A
    /// closure returning [`Var`] must use [`Handler::bind`] instead, so
    /// the result shape is declared; registering one here makes inference
    /// fail with [`VarError::UndeclaredResultShape`].
    pub fn on<T, R, F>(self, mut f: F) -> Handler
    where
        T: Any + Clone,
        R: Any + Clone,
        F: FnMut(T) -> R + 'static,
    {
        self.push_alt::<T>(
            inferred_results::<R>("Handler::bind"),
            Box::new(move |slot| invoke_typed(slot, &mut f)),
        )
    }

    /// Add an arm for alternative `T` returning an already-shaped value
    /// with the declared `results` shape.
    pub fn bind<T, F>(self, results: Shape, mut f: F) -> Handler
    where
        T: Any + Clone,
        F: FnMut(T) -> Var + 'static,
    {
        self.push_alt::<T>(Ok(results), Box::new(move |slot| invoke_typed(slot, &mut f)))
    }

    /// Add the empty-marker arm, returning a plain value.
    pub fn on_empty<R, F>(self, mut f: F) -> Handler
    where
        R: Any + Clone,
        F: FnMut() -> R + 'static,
    {
        self.push_empty(
            inferred_results::<R>("Handler::bind_empty"),
            Box::new(move |_slot| wrap(f())),
        )
    }

    /// Add the empty-marker arm, returning an already-shaped value with
    /// the declared `results` shape.
    pub fn bind_empty<F>(self, results: Shape, mut f: F) -> Handler
    where
        F: FnMut() -> Var + 'static,
    {
        self.push_empty(Ok(results), Box::new(move |_slot| f()))
    }

    /// Whether an arm accepts alternative type `T`.
    pub fn handles<T: 'static>(&self) -> bool {
        self.handles_id(TypeId::of::<T>())
    }

    /// Whether an arm accepts the alternative with this `TypeId`.
    pub fn handles_id(&self, id: TypeId) -> bool {
        self.by_type.contains_key(&id)
    }

    /// Whether the handler has an empty-marker arm.
    pub fn handles_empty(&self) -> bool {
        self.empty_arm.is_some()
    }

    fn push_alt<T: 'static>(mut self, results: Result<Shape, VarError>, call: ArmFn) -> Handler {
        let id = TypeId::of::<T>();
        if !self.by_type.contains_key(&id) {
            self.by_type.insert(id, self.arms.len());
            self.arms.push(Arm { results, call });
        }
        self
    }

    fn push_empty(mut self, results: Result<Shape, VarError>, call: ArmFn) -> Handler {
        if self.empty_arm.is_none() {
            self.empty_arm = Some(self.arms.len());
            self.arms.push(Arm { results, call });
        }
        self
    }

    /// Declared result shape of the arm covering the alternative with
    /// this `TypeId`.
    pub(crate) fn alt_results(&self, id: TypeId, name: &'static str) -> Result<&Shape, VarError> {
        let index = self
            .by_type
            .get(&id)
            .ok_or(VarError::UnhandledAlternative { alt: name })?;
        self.arms[*index].results.as_ref().map_err(Clone::clone)
    }

    /// Declared result shape of the empty-marker arm.
    pub(crate) fn empty_results(&self) -> Result<&Shape, VarError> {
        let index = self.empty_arm.ok_or(VarError::MissingEmptyArm)?;
        self.arms[index].results.as_ref().map_err(Clone::clone)
    }

    /// Invoke the arm for the slot's alternative.
    pub(crate) fn invoke_alt(&mut self, slot: AltSlot) -> Result<Var, VarError> {
        let info = slot.info();
        let index = *self
            .by_type
            .get(&info.id())
            .ok_or(VarError::UnhandledAlternative { alt: info.name() })?;
        Ok((self.arms[index].call)(Some(slot)))
    }

    /// Invoke the empty-marker arm.
    pub(crate) fn invoke_empty(&mut self) -> Result<Var, VarError> {
        let index = self.empty_arm.ok_or(VarError::MissingEmptyArm)?;
        Ok((self.arms[index].call)(None))
    }
}

/// Downcast the slot and run a typed closure, auto-wrapping the result.
///
/// Dispatch only routes a slot here after matching its `TypeId`, so the
/// mismatch branches are unreachable; they fall back to `Empty` rather
/// than panic.
fn invoke_typed<T, R, F>(slot: Option<AltSlot>, f: &mut F) -> Var
where
    T: Any + Clone,
    R: Any + Clone,
    F: FnMut(T) -> R,
{
    match slot.and_then(AltSlot::take::<T>) {
        Some(value) => wrap(f(value)),
        None => Var::empty(),
    }
}
