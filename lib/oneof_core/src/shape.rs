//! Shape classification.
//!
//! A [`Shape`] is an alternative set plus an emptyability flag. The six
//! canonical kinds are never stored: [`Shape::kind`] derives them from the
//! alternative count and emptyability, so classification can never disagree
//! with the canonicalization algebra in [`crate::canon`].
//!
//! | kind             | alternatives | emptyable |
//! |------------------|--------------|-----------|
//! | `Empty`          | 0            | always empty |
//! | `Single`         | 1            | no        |
//! | `Pair`           | 2            | no        |
//! | `Multi`          | ≥ 3          | no        |
//! | `OptionalSingle` | 1            | yes       |
//! | `OptionalMulti`  | ≥ 2          | yes       |
//!
//! A shape with zero alternatives that cannot be empty is unrepresentable:
//! [`Shape::new`] rejects it and every other constructor is closed under
//! the table above.

use crate::alt::{AltSet, AltType};
use crate::error::VarError;
use std::any::TypeId;
use std::fmt;

/// The six canonical shape kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Zero alternatives; the value is always empty.
    Empty,
    /// One alternative, always held.
    Single,
    /// Two alternatives, exactly one held.
    Pair,
    /// Three or more alternatives, exactly one held.
    Multi,
    /// One alternative, held or empty.
    OptionalSingle,
    /// Two or more alternatives, one held or empty.
    OptionalMulti,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Empty => "Empty",
            ShapeKind::Single => "Single",
            ShapeKind::Pair => "Pair",
            ShapeKind::Multi => "Multi",
            ShapeKind::OptionalSingle => "OptionalSingle",
            ShapeKind::OptionalMulti => "OptionalMulti",
        };
        f.write_str(name)
    }
}

/// An alternative set plus emptyability, canonical by construction.
///
/// Equality is set equality: alternative order is ignored, emptyability is
/// not. Index-based queries follow the stored (first-occurrence) order.
#[derive(Clone, PartialEq, Eq)]
pub struct Shape {
    pub(crate) alts: AltSet,
    pub(crate) emptyable: bool,
}

impl Shape {
    /// The `Empty` shape.
    pub fn empty() -> Shape {
        Shape {
            alts: AltSet::new(),
            emptyable: true,
        }
    }

    /// The `Single` shape holding `T`.
    pub fn single<T: 'static>() -> Shape {
        Shape {
            alts: AltSet::of::<T>(),
            emptyable: false,
        }
    }

    /// The `OptionalSingle` shape holding `T` or nothing.
    pub fn optional<T: 'static>() -> Shape {
        Shape {
            alts: AltSet::of::<T>(),
            emptyable: true,
        }
    }

    /// The shape holding one of `A` or `B`.
    ///
    /// Collapses to `Single` when `A` and `B` are the same type, per the
    /// canonicalization rules.
    pub fn pair<A: 'static, B: 'static>() -> Shape {
        let mut alts = AltSet::of::<A>();
        alts.insert(AltType::of::<B>());
        Shape {
            alts,
            emptyable: false,
        }
    }

    /// A non-emptyable shape over `alts`.
    ///
    /// Fails with [`VarError::EmptyWithoutMarker`] when `alts` is empty:
    /// `Empty` is the only zero-alternative shape and it is always empty.
    pub fn multi(alts: AltSet) -> Result<Shape, VarError> {
        Shape::new(alts, false)
    }

    /// An emptyable shape over `alts`. An empty set yields `Empty`.
    pub fn optional_multi(alts: AltSet) -> Shape {
        Shape {
            alts,
            emptyable: true,
        }
    }

    /// The general constructor.
    pub fn new(alts: AltSet, emptyable: bool) -> Result<Shape, VarError> {
        if alts.is_empty() && !emptyable {
            return Err(VarError::EmptyWithoutMarker);
        }
        Ok(Shape { alts, emptyable })
    }

    /// Derive the canonical kind from the alternative count and
    /// emptyability.
    pub fn kind(&self) -> ShapeKind {
        match (self.alts.len(), self.emptyable) {
            (0, _) => ShapeKind::Empty,
            (1, false) => ShapeKind::Single,
            (2, false) => ShapeKind::Pair,
            (_, false) => ShapeKind::Multi,
            (1, true) => ShapeKind::OptionalSingle,
            (_, true) => ShapeKind::OptionalMulti,
        }
    }

    /// The ordered alternative set.
    pub fn alts(&self) -> &AltSet {
        &self.alts
    }

    /// Number of non-empty alternatives.
    pub fn len(&self) -> usize {
        self.alts.len()
    }

    /// Whether this shape has no alternatives (kind `Empty`).
    pub fn is_empty(&self) -> bool {
        self.alts.is_empty()
    }

    /// Whether a value of this shape can be empty.
    ///
    /// True for `Empty` itself (such a value always is) and for the two
    /// optional kinds.
    pub fn is_emptyable(&self) -> bool {
        self.emptyable
    }

    /// Whether this shape has more than one non-empty alternative.
    pub fn is_multi(&self) -> bool {
        self.alts.len() > 1
    }

    /// Whether alternative index `index` exists.
    pub fn contains_index(&self, index: usize) -> bool {
        index < self.alts.len()
    }

    /// Whether `T` is an alternative of this shape.
    ///
    /// Asking about the empty marker ([`crate::Nil`]) is always valid and
    /// answers whether the shape is emptyable.
    pub fn contains<T: 'static>(&self) -> bool {
        if TypeId::of::<T>() == TypeId::of::<crate::Nil>() {
            return self.emptyable;
        }
        self.alts.contains_type::<T>()
    }

    /// The alternative at `index`.
    pub fn alt_at(&self, index: usize) -> Option<&AltType> {
        self.alts.get(index)
    }

    /// Whether a value of this shape converts *explicitly* into `dest`:
    /// every alternative of `self` is an alternative of `dest`, and neither
    /// side is `Empty`. The conversion may still fail at runtime when the
    /// value is currently empty and `dest` is not emptyable.
    pub fn convertible_to(&self, dest: &Shape) -> bool {
        !self.is_empty() && !dest.is_empty() && self.alts.subset_of(&dest.alts)
    }

    /// Whether a value of this shape converts *implicitly* into `dest`:
    /// convertible, and emptiness can never be lost (an emptyable source
    /// requires an emptyable destination). Implicit conversions cannot fail
    /// at runtime.
    pub fn coercible_to(&self, dest: &Shape) -> bool {
        self.convertible_to(dest) && (!self.emptyable || dest.emptyable)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.kind(), self.alts)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

#[cfg(test)]
mod tests;
