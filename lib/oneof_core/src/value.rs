//! The `Var` container.
//!
//! A `Var` pairs a fixed [`Shape`] with an optional type-erased payload.
//! The shape never changes during the value's lifetime; assignment and the
//! monadic operations only replace the payload or produce new values.
//!
//! Alternatives must be `'static + Clone`. Cloning only happens where the
//! algebra genuinely re-uses a value (fallback forks, eager defaults); the
//! monadic flow itself always moves.

use crate::alt::{AltType, Nil};
use crate::error::VarError;
use crate::shape::Shape;
use std::any::{Any, TypeId};
use std::fmt;

/// Object-safe payload storage: `Any` plus clone-through-the-box.
trait Payload: Any {
    fn clone_box(&self) -> Box<dyn Payload>;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any + Clone> Payload for T {
    fn clone_box(&self) -> Box<dyn Payload> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// The active alternative: its identity plus the boxed value.
pub(crate) struct AltSlot {
    info: AltType,
    value: Box<dyn Payload>,
}

impl AltSlot {
    pub(crate) fn new<T: Any + Clone>(value: T) -> AltSlot {
        AltSlot {
            info: AltType::of::<T>(),
            value: Box::new(value),
        }
    }

    pub(crate) fn info(&self) -> AltType {
        self.info
    }

    /// Move the value out. `None` on a type mismatch, which dispatch rules
    /// out before calling.
    pub(crate) fn take<T: Any>(self) -> Option<T> {
        if self.info.id() != TypeId::of::<T>() {
            return None;
        }
        self.value.into_any().downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl Clone for AltSlot {
    fn clone(&self) -> Self {
        AltSlot {
            info: self.info,
            value: self.value.clone_box(),
        }
    }
}

/// A value of one of the six canonical shapes: an immutable shape, a
/// mutable payload.
#[derive(Clone)]
pub struct Var {
    shape: Shape,
    slot: Option<AltSlot>,
}

impl Var {
    /// The `Empty` value.
    pub fn empty() -> Var {
        Var {
            shape: Shape::empty(),
            slot: None,
        }
    }

    /// A `Single` holding `value`.
    pub fn single<T: Any + Clone>(value: T) -> Var {
        Var {
            shape: Shape::single::<T>(),
            slot: Some(AltSlot::new(value)),
        }
    }

    /// An `OptionalSingle` holding `value`.
    pub fn optional<T: Any + Clone>(value: T) -> Var {
        Var {
            shape: Shape::optional::<T>(),
            slot: Some(AltSlot::new(value)),
        }
    }

    /// An empty `OptionalSingle` of `T`.
    pub fn optional_empty<T: Any + Clone>() -> Var {
        Var {
            shape: Shape::optional::<T>(),
            slot: None,
        }
    }

    /// A value of an arbitrary shape, holding `value`.
    ///
    /// Fails with [`VarError::AlternativeMismatch`] when `T` is not one of
    /// `shape`'s alternatives.
    pub fn new<T: Any + Clone>(shape: Shape, value: T) -> Result<Var, VarError> {
        if !shape.alts().contains_type::<T>() {
            return Err(VarError::AlternativeMismatch {
                shape: shape.kind(),
                alt: std::any::type_name::<T>(),
            });
        }
        Ok(Var {
            shape,
            slot: Some(AltSlot::new(value)),
        })
    }

    /// An empty value of an emptyable shape.
    ///
    /// Fails with [`VarError::BadCast`] when the shape always holds an
    /// alternative.
    pub fn new_empty(shape: Shape) -> Result<Var, VarError> {
        if !shape.is_emptyable() {
            return Err(VarError::BadCast {
                target: shape.kind(),
            });
        }
        Ok(Var { shape, slot: None })
    }

    /// The value's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Index of the active alternative within the shape, `None` when
    /// empty.
    pub fn index(&self) -> Option<usize> {
        let slot = self.slot.as_ref()?;
        self.shape.alts().index_of(slot.info.id())
    }

    /// The active alternative's identity, `None` when empty.
    pub fn active(&self) -> Option<AltType> {
        self.slot.as_ref().map(AltSlot::info)
    }

    /// Whether the value currently holds no alternative.
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Whether the value currently holds an alternative.
    pub fn is_some(&self) -> bool {
        self.slot.is_some()
    }

    /// Whether the active alternative is of type `T`.
    ///
    /// `holds::<Nil>()` asks about the empty marker and is equivalent to
    /// [`Var::is_empty`].
    pub fn holds<T: 'static>(&self) -> bool {
        if TypeId::of::<T>() == TypeId::of::<Nil>() {
            return self.is_empty();
        }
        self.slot
            .as_ref()
            .is_some_and(|slot| slot.info.id() == TypeId::of::<T>())
    }

    /// Whether the active alternative sits at `index`.
    pub fn holds_index(&self, index: usize) -> bool {
        self.index() == Some(index)
    }

    /// Borrow the active alternative as `T`.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.slot
            .as_ref()
            .and_then(|slot| slot.value.as_any().downcast_ref::<T>())
    }

    /// Mutably borrow the active alternative as `T`.
    pub fn get_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.slot
            .as_mut()
            .and_then(|slot| slot.value.as_any_mut().downcast_mut::<T>())
    }

    /// Move the active alternative out as `T`, or give the value back
    /// unchanged.
    pub fn into_alt<T: Any + Clone>(self) -> Result<T, Var> {
        let Var { shape, slot } = self;
        match slot {
            Some(slot) if slot.info.id() == TypeId::of::<T>() => match slot.take::<T>() {
                Some(value) => Ok(value),
                // Unreachable: the ids matched.
                None => Err(Var { shape, slot: None }),
            },
            slot => Err(Var { shape, slot }),
        }
    }

    /// Replace the payload with `value`, keeping the shape.
    pub fn set<T: Any + Clone>(&mut self, value: T) -> Result<(), VarError> {
        if !self.shape.alts().contains_type::<T>() {
            return Err(VarError::AlternativeMismatch {
                shape: self.shape.kind(),
                alt: std::any::type_name::<T>(),
            });
        }
        self.slot = Some(AltSlot::new(value));
        Ok(())
    }

    /// Make the value empty, keeping the shape. Fails on shapes that
    /// always hold an alternative.
    pub fn clear(&mut self) -> Result<(), VarError> {
        if !self.shape.is_emptyable() {
            return Err(VarError::BadCast {
                target: self.shape.kind(),
            });
        }
        self.slot = None;
        Ok(())
    }

    /// Re-express the value in `target`, keeping the payload. Internal:
    /// callers have already inferred `target` from the algebra, so a
    /// failure is a declared-versus-actual result mismatch.
    pub(crate) fn reproject(self, target: Shape) -> Result<Var, VarError> {
        match &self.slot {
            None => {
                if !target.is_emptyable() {
                    return Err(VarError::ResultShapeMismatch {
                        declared: target.kind(),
                        got: self.shape.kind(),
                    });
                }
            }
            Some(slot) => {
                if !target.alts().contains(slot.info().id()) {
                    return Err(VarError::ResultShapeMismatch {
                        declared: target.kind(),
                        got: self.shape.kind(),
                    });
                }
            }
        }
        Ok(Var {
            shape: target,
            slot: self.slot,
        })
    }

    pub(crate) fn into_slot(self) -> Option<AltSlot> {
        self.slot
    }

    pub(crate) fn from_parts(shape: Shape, slot: Option<AltSlot>) -> Var {
        Var { shape, slot }
    }
}

impl fmt::Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Var")
            .field("shape", &self.shape)
            .field("active", &self.active())
            .finish()
    }
}

/// Auto-wrap a value into shape form.
///
/// A value that is already a [`Var`] passes through unchanged; `()` and
/// [`Nil`] wrap into the `Empty` value; anything else wraps into a
/// `Single`.
pub fn wrap<T: Any + Clone>(value: T) -> Var {
    let id = TypeId::of::<T>();
    if id == TypeId::of::<Var>() {
        let any: Box<dyn Any> = Box::new(value);
        return match any.downcast::<Var>() {
            Ok(var) => *var,
            // Unreachable: the TypeId matched.
            Err(_) => Var::empty(),
        };
    }
    if id == TypeId::of::<()>() || id == TypeId::of::<Nil>() {
        return Var::empty();
    }
    Var::single(value)
}

/// The shape [`wrap`] gives a value of type `T`.
///
/// `()` and [`Nil`] wrap to `Empty`; everything else to `Single<T>`. A `T`
/// that is itself [`Var`] has no statically known shape; handlers and
/// producers returning `Var` must declare their result shape explicitly
/// (see [`crate::Handler::bind`]).
pub fn wrapped_shape<T: 'static>() -> Shape {
    let id = TypeId::of::<T>();
    if id == TypeId::of::<()>() || id == TypeId::of::<Nil>() {
        return Shape::empty();
    }
    Shape::single::<T>()
}

#[cfg(test)]
mod tests;
