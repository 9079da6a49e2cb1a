//! Alternative identities and alternative sets.
//!
//! An *alternative* is one of the value types a shape may hold when it is
//! not empty. Alternatives are identified by `TypeId`; the type name rides
//! along for diagnostics only and never participates in equality.
//!
//! `AltSet` is the ordered, duplicate-free collection the whole algebra is
//! built from. Union keeps the left operand's order and appends unseen
//! alternatives from the right, so canonicalization is deterministic
//! without depending on insertion order for shape *classification*.

use smallvec::SmallVec;
use std::any::TypeId;
use std::fmt;

/// The empty marker: the zero-information value standing for "no
/// alternative is held".
///
/// It is not an alternative itself, but classification and dispatch accept
/// it wherever a type query may legitimately ask about emptiness, e.g.
/// [`crate::Var::holds::<Nil>`](crate::Var::holds).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Nil;

/// Identity of a single alternative type.
#[derive(Copy, Clone)]
pub struct AltType {
    id: TypeId,
    name: &'static str,
}

impl AltType {
    /// The identity of alternative type `T`.
    pub fn of<T: 'static>() -> Self {
        AltType {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The type's name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for AltType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AltType {}

impl fmt::Debug for AltType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An ordered set of alternative types.
///
/// Duplicates collapse on insertion, so every `AltSet` is already in
/// canonical (set) form. Two sets compare equal when they contain the same
/// alternatives, regardless of order; order still matters for the index
/// queries (`index_of`, `get`), which follow first insertion.
#[derive(Clone, Default)]
pub struct AltSet {
    alts: SmallVec<[AltType; 4]>,
}

impl AltSet {
    /// The set with no alternatives.
    pub fn new() -> Self {
        AltSet::default()
    }

    /// The one-element set `{T}`.
    pub fn of<T: 'static>() -> Self {
        let mut set = AltSet::new();
        set.insert(AltType::of::<T>());
        set
    }

    /// Insert an alternative; a duplicate is ignored.
    pub fn insert(&mut self, alt: AltType) {
        if !self.contains(alt.id()) {
            self.alts.push(alt);
        }
    }

    /// Set union, keeping `self`'s order and appending `other`'s unseen
    /// alternatives in their order.
    pub fn union(&self, other: &AltSet) -> AltSet {
        let mut merged = self.clone();
        for alt in other.iter() {
            merged.insert(*alt);
        }
        merged
    }

    /// Whether the set contains the alternative with this `TypeId`.
    pub fn contains(&self, id: TypeId) -> bool {
        self.alts.iter().any(|alt| alt.id() == id)
    }

    /// Whether the set contains alternative type `T`.
    pub fn contains_type<T: 'static>(&self) -> bool {
        self.contains(TypeId::of::<T>())
    }

    /// Position of the alternative with this `TypeId`, if present.
    pub fn index_of(&self, id: TypeId) -> Option<usize> {
        self.alts.iter().position(|alt| alt.id() == id)
    }

    /// The alternative at `index`.
    pub fn get(&self, index: usize) -> Option<&AltType> {
        self.alts.get(index)
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.alts.len()
    }

    /// Whether the set has no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alts.is_empty()
    }

    /// Whether every alternative of `self` is also in `other`.
    pub fn subset_of(&self, other: &AltSet) -> bool {
        self.alts.iter().all(|alt| other.contains(alt.id()))
    }

    /// Iterate in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &AltType> {
        self.alts.iter()
    }
}

impl PartialEq for AltSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.subset_of(other)
    }
}

impl Eq for AltSet {}

impl FromIterator<AltType> for AltSet {
    fn from_iter<I: IntoIterator<Item = AltType>>(iter: I) -> Self {
        let mut set = AltSet::new();
        for alt in iter {
            set.insert(alt);
        }
        set
    }
}

impl fmt::Debug for AltSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.alts.iter()).finish()
    }
}

/// Build an [`AltSet`] from a list of types: `alt_set![i32, String]`.
#[macro_export]
macro_rules! alt_set {
    ($($ty:ty),* $(,)?) => {{
        let mut set = $crate::AltSet::new();
        $(set.insert($crate::AltType::of::<$ty>());)*
        set
    }};
}

#[cfg(test)]
mod tests;
