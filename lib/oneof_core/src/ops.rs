//! The monadic operation set.
//!
//! Every operation follows the same per-call machine: short-circuit on an
//! `Empty`-shaped input, check current emptiness for emptyable shapes,
//! dispatch through the visitor layer, then re-project the auto-wrapped
//! result into the shape the algebra inferred.
//!
//! Operations consume the value (the container owns its payload and the
//! pipeline moves it along) and return `Result`: coverage and conversion
//! violations that a fully static rendition would reject at compile time
//! surface as [`VarError`]s here.

use crate::error::VarError;
use crate::handler::Handler;
use crate::shape::{Shape, ShapeKind};
use crate::value::{wrap, wrapped_shape, Var};
use crate::visit::{map_result_shape, match_result_shape, visit, weak_visit};
use std::any::{Any, TypeId};
use tracing::trace;

impl Var {
    /// Transform the active alternative, preserving emptiness.
    ///
    /// An `Empty` input stays `Empty` without consulting the handler. A
    /// currently-empty emptyable input produces the empty value of the
    /// inferred result shape; the handler runs only on a held alternative.
    pub fn map(self, handler: &mut Handler) -> Result<Var, VarError> {
        if self.shape().kind() == ShapeKind::Empty {
            return Ok(self);
        }
        let result = map_result_shape(self.shape(), handler)?;
        trace!(input = %self.shape(), output = %result, "map");
        if self.is_empty() {
            return Var::new_empty(result);
        }
        weak_visit(handler, self)?.reproject(result)
    }

    /// Dispatch on every case the shape admits, including the empty
    /// marker.
    ///
    /// Unlike [`Var::map`], the handler must cover emptiness, so this is
    /// defined even for `Empty`-shaped inputs: the empty-marker arm runs.
    pub fn match_with(self, handler: &mut Handler) -> Result<Var, VarError> {
        let result = match_result_shape(self.shape(), handler)?;
        trace!(input = %self.shape(), output = %result, "match");
        visit(handler, self)?.reproject(result)
    }

    /// Like [`Var::map`], but an empty outcome is replaced by the eagerly
    /// supplied `default`.
    pub fn map_or<D>(self, handler: &mut Handler, default: D) -> Result<Var, VarError>
    where
        D: Any + Clone,
    {
        let mapped = map_result_shape(self.shape(), handler)?;
        let result = mapped.first_of(&default_shape::<D>()?);
        if self.is_empty() {
            return wrap(default).reproject(result);
        }
        weak_visit(handler, self)?.reproject(result)
    }

    /// Like [`Var::map_or`], but the default is produced lazily: the
    /// producer runs only on the empty path, never when the handler runs.
    ///
    /// A producer returning [`Var`] has no statically visible shape and is
    /// rejected with [`VarError::UndeclaredResultShape`]; use a plain
    /// value, or fall back to [`Var::or_else_bind`] composition.
    pub fn map_or_else<D, F>(self, handler: &mut Handler, default: F) -> Result<Var, VarError>
    where
        D: Any + Clone,
        F: FnOnce() -> D,
    {
        let mapped = map_result_shape(self.shape(), handler)?;
        let result = mapped.first_of(&default_shape::<D>()?);
        if self.is_empty() {
            return wrap(default()).reproject(result);
        }
        weak_visit(handler, self)?.reproject(result)
    }

    /// Return the value unchanged if it holds an alternative, else the
    /// wrapped output of `default`. The result shape is
    /// `first_of(input, wrapped producer result)`; a producer returning
    /// [`Var`] must declare its shape through [`Var::or_else_bind`].
    pub fn or_else<D, F>(self, default: F) -> Result<Var, VarError>
    where
        D: Any + Clone,
        F: FnOnce() -> D,
    {
        let result = self.shape().first_of(&default_shape::<D>()?);
        if self.is_empty() {
            return wrap(default()).reproject(result);
        }
        self.reproject(result)
    }

    /// [`Var::or_else`] for producers that already return a [`Var`], with
    /// the producer's result shape declared explicitly.
    pub fn or_else_bind<F>(self, results: &Shape, default: F) -> Result<Var, VarError>
    where
        F: FnOnce() -> Var,
    {
        let result = self.shape().first_of(results);
        if self.is_empty() {
            return default().reproject(result);
        }
        self.reproject(result)
    }

    /// Demote to the smallest non-emptyable shape with the same
    /// alternative set.
    ///
    /// `Empty` is returned unchanged; a non-emptyable value only has its
    /// shape restated. A currently-empty emptyable value cannot be
    /// demoted and fails with [`VarError::BadCast`].
    pub fn take(self) -> Result<Var, VarError> {
        if self.shape().kind() == ShapeKind::Empty {
            return Ok(self);
        }
        let target = Shape::new(self.shape().alts().clone(), false)?;
        self.try_cast(&target)
    }

    /// Explicit, checked conversion into `target`.
    ///
    /// Every alternative of the source shape must be an alternative of
    /// `target`; neither side may be `Empty`-shaped. Converting a
    /// currently-empty value into a non-emptyable `target` is the one
    /// runtime narrowing failure, [`VarError::BadCast`].
    pub fn try_cast(self, target: &Shape) -> Result<Var, VarError> {
        check_cast_shapes(self.shape(), target)?;
        if self.is_empty() && !target.is_emptyable() {
            trace!(from = %self.shape(), to = %target, "narrowing cast of empty value");
            return Err(VarError::BadCast {
                target: target.kind(),
            });
        }
        Ok(Var::from_parts(target.clone(), self.into_slot()))
    }

    /// Explicit conversion without the emptiness check.
    ///
    /// The caller asserts the value holds an alternative whenever `target`
    /// is non-emptyable; the assertion is checked in debug builds only.
    /// Violating it leaves the result permanently empty in a shape that
    /// promises otherwise, a logic error rather than memory unsafety.
    pub fn cast_unchecked(self, target: &Shape) -> Result<Var, VarError> {
        check_cast_shapes(self.shape(), target)?;
        debug_assert!(
            self.is_some() || target.is_emptyable(),
            "cast_unchecked: empty value narrowed into `{target}`",
        );
        Ok(Var::from_parts(target.clone(), self.into_slot()))
    }

    /// Implicit conversion into `target`.
    ///
    /// Requires [`Shape::coercible_to`]: on top of the explicit-cast
    /// rules, an emptyable source only coerces into an emptyable
    /// `target`, so the conversion can never fail once the shapes are
    /// validated.
    pub fn coerce(self, target: &Shape) -> Result<Var, VarError> {
        check_cast_shapes(self.shape(), target)?;
        if self.shape().is_emptyable() && !target.is_emptyable() {
            return Err(VarError::NarrowingCoercion {
                from: self.shape().kind(),
                to: target.kind(),
            });
        }
        Ok(Var::from_parts(target.clone(), self.into_slot()))
    }
}

/// Wrapped shape of an eager or lazily-produced default.
///
/// A default that is itself a [`Var`] carries no shape in its type, so the
/// fallback algebra cannot see it; those go through [`Var::or_else_bind`].
fn default_shape<D: 'static>() -> Result<Shape, VarError> {
    if TypeId::of::<D>() == TypeId::of::<Var>() {
        return Err(VarError::UndeclaredResultShape {
            declare_with: "Var::or_else_bind",
        });
    }
    Ok(wrapped_shape::<D>())
}

/// Shared shape-level validation for the conversion family.
fn check_cast_shapes(source: &Shape, target: &Shape) -> Result<(), VarError> {
    if source.kind() == ShapeKind::Empty {
        return Err(VarError::EmptyShapeCast("from"));
    }
    if target.kind() == ShapeKind::Empty {
        return Err(VarError::EmptyShapeCast("to"));
    }
    for alt in source.alts().iter() {
        if !target.alts().contains(alt.id()) {
            return Err(VarError::ForeignAlternative {
                from: source.kind(),
                to: target.kind(),
                alt: alt.name(),
            });
        }
    }
    Ok(())
}
