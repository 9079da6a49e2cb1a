//! Error types for the shape algebra.
//!
//! Most of these report conditions a fully static type system would reject
//! before running (handler coverage, alternative membership); they surface
//! here as recoverable errors instead. The one inherently-runtime failure
//! is [`VarError::BadCast`]: narrowing a currently-empty value into a
//! shape that cannot be empty.

use crate::shape::ShapeKind;
use thiserror::Error;

/// Everything that can go wrong constructing, converting, or dispatching
/// on a [`crate::Var`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VarError {
    /// Narrowing cast: the value is currently empty but the destination
    /// shape always holds an alternative.
    #[error("bad variant cast: value is empty but `{target}` cannot be")]
    BadCast {
        /// Kind of the destination shape.
        target: ShapeKind,
    },

    /// Explicit conversion where some source alternative is missing from
    /// the destination.
    #[error("shape `{from}` does not convert to `{to}`: alternative `{alt}` is not in the destination")]
    ForeignAlternative {
        /// Kind of the source shape.
        from: ShapeKind,
        /// Kind of the destination shape.
        to: ShapeKind,
        /// Name of the offending alternative type.
        alt: &'static str,
    },

    /// Implicit conversion that could silently lose emptiness.
    #[error("implicit conversion from emptyable `{from}` to non-emptyable `{to}` is not allowed; use an explicit cast")]
    NarrowingCoercion {
        /// Kind of the source shape.
        from: ShapeKind,
        /// Kind of the destination shape.
        to: ShapeKind,
    },

    /// Conversion through the `Empty` shape, which has no alternatives to
    /// convert.
    #[error("cannot cast {0} shape `Empty`: it has no alternatives")]
    EmptyShapeCast(&'static str),

    /// Dispatch found no handler arm for the active alternative.
    #[error("no handler arm accepts alternative `{alt}`")]
    UnhandledAlternative {
        /// Name of the uncovered alternative type.
        alt: &'static str,
    },

    /// Full dispatch on a value that can be empty, with no empty-marker
    /// arm (or weak dispatch reached an empty value).
    #[error("value can be empty but the handler has no empty-marker arm")]
    MissingEmptyArm,

    /// Attempted to build a non-emptyable shape with zero alternatives.
    #[error("a shape with no alternatives must admit the empty marker")]
    EmptyWithoutMarker,

    /// A value was offered to a shape that does not list its type.
    #[error("value of type `{alt}` is not an alternative of shape `{shape}`")]
    AlternativeMismatch {
        /// Kind of the target shape.
        shape: ShapeKind,
        /// Name of the offered value's type.
        alt: &'static str,
    },

    /// A plain-value arm or default producer whose return type is itself
    /// a shaped value: its result shape cannot be read off the type.
    #[error("result is already a shaped value; declare its shape with `{declare_with}`")]
    UndeclaredResultShape {
        /// The declaring constructor to use instead.
        declare_with: &'static str,
    },

    /// A handler arm produced a value outside its declared result shape.
    #[error("handler arm produced `{got}` but declared `{declared}`")]
    ResultShapeMismatch {
        /// Kind the arm declared.
        declared: ShapeKind,
        /// Kind actually produced.
        got: ShapeKind,
    },
}
