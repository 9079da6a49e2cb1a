//! The canonicalization algebra.
//!
//! Four pure functions over [`Shape`]: `simplify`, `with_empty`, `join`,
//! and `first_of`, plus the left-to-right folds `join_all` / `first_of_all`
//! used by result-shape inference.
//!
//! Laws (all covered by tests, see `tests.rs` and `tests/canon_props.rs`):
//! - `simplify` is idempotent.
//! - `T.join(Empty) == T.with_empty()`.
//! - `A.first_of(A) == A.simplify()`.
//! - `first_of(A, B) == A.simplify()` whenever `A` is not emptyable.
//! - Folding `join` / `first_of` over three operands is independent of
//!   pairwise grouping.

use crate::alt::{AltSet, AltType};
use crate::shape::Shape;

impl Shape {
    /// Reduce to canonical form.
    ///
    /// `Shape` values are canonical by construction (duplicates collapse in
    /// [`AltSet`], kinds are derived), so this is the identity; it exists
    /// so algebraic call sites compose uniformly and so idempotence is a
    /// directly testable law. Raw alternative lists enter the algebra
    /// through [`Shape::deduce`] instead.
    pub fn simplify(self) -> Shape {
        self
    }

    /// Deduce the canonical shape of a raw alternative list.
    ///
    /// Duplicates collapse; an occurrence of the empty marker
    /// ([`crate::Nil`]) is removed from the list and forces emptyability.
    /// An empty remaining list yields `Empty`.
    pub fn deduce(alts: &[AltType], emptyable: bool) -> Shape {
        let nil = AltType::of::<crate::Nil>();
        let mut set = AltSet::new();
        let mut saw_nil = false;
        for alt in alts {
            if *alt == nil {
                saw_nil = true;
            } else {
                set.insert(*alt);
            }
        }
        Shape {
            alts: set,
            emptyable: emptyable || saw_nil,
        }
    }

    /// The emptyable counterpart with the same alternative set
    /// (the add-empty-marker operation). `Empty` stays `Empty`.
    pub fn with_empty(mut self) -> Shape {
        self.emptyable = true;
        self
    }

    /// The smallest shape covering both operands' alternative sets.
    ///
    /// An `Empty` operand degenerates to the other side made emptyable, so
    /// `T.join(Empty) == T.with_empty()`. Otherwise the result's
    /// alternative set is the union and it is emptyable when either operand
    /// is (logical OR of emptyability).
    pub fn join(&self, other: &Shape) -> Shape {
        if self.is_empty() {
            return other.clone().with_empty();
        }
        if other.is_empty() {
            return self.clone().with_empty();
        }
        Shape {
            alts: self.alts.union(&other.alts),
            emptyable: self.emptyable || other.emptyable,
        }
        .simplify()
    }

    /// The shape of "this value if non-empty, else `other`".
    ///
    /// An `Empty` operand drops out. A non-emptyable `self` always wins and
    /// the result is `self` alone. Otherwise the result unions both
    /// alternative sets and is emptyable only when the fallback itself can
    /// still be empty.
    pub fn first_of(&self, other: &Shape) -> Shape {
        if self.is_empty() {
            return other.clone().simplify();
        }
        if other.is_empty() {
            return self.clone().simplify();
        }
        if !self.emptyable {
            return self.clone().simplify();
        }
        Shape {
            alts: self.alts.union(&other.alts),
            emptyable: other.emptyable,
        }
        .simplify()
    }

    /// Left-to-right `join` fold. `None` for an empty iterator.
    pub fn join_all<'a, I>(shapes: I) -> Option<Shape>
    where
        I: IntoIterator<Item = &'a Shape>,
    {
        let mut iter = shapes.into_iter();
        let first = iter.next()?.clone().simplify();
        Some(iter.fold(first, |acc, next| acc.join(next)))
    }

    /// Left-to-right `first_of` fold. `None` for an empty iterator.
    pub fn first_of_all<'a, I>(shapes: I) -> Option<Shape>
    where
        I: IntoIterator<Item = &'a Shape>,
    {
        let mut iter = shapes.into_iter();
        let first = iter.next()?.clone().simplify();
        Some(iter.fold(first, |acc, next| acc.first_of(next)))
    }
}
