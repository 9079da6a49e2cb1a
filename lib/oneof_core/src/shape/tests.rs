#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::alt_set;
use pretty_assertions::assert_eq;

// One row per entry of the shape table: kind, alternative count,
// emptyability, multi-ness.

#[test]
fn empty_row() {
    let shape = Shape::empty();
    assert_eq!(shape.kind(), ShapeKind::Empty);
    assert_eq!(shape.len(), 0);
    assert!(shape.is_emptyable());
    assert!(!shape.is_multi());
}

#[test]
fn single_row() {
    let shape = Shape::single::<i32>();
    assert_eq!(shape.kind(), ShapeKind::Single);
    assert_eq!(shape.len(), 1);
    assert!(!shape.is_emptyable());
    assert!(!shape.is_multi());
}

#[test]
fn pair_row() {
    let shape = Shape::pair::<i32, String>();
    assert_eq!(shape.kind(), ShapeKind::Pair);
    assert_eq!(shape.len(), 2);
    assert!(!shape.is_emptyable());
    assert!(shape.is_multi());
}

#[test]
fn multi_row() {
    let shape = Shape::multi(alt_set![i32, String, f64]).expect("non-empty set");
    assert_eq!(shape.kind(), ShapeKind::Multi);
    assert_eq!(shape.len(), 3);
    assert!(!shape.is_emptyable());
    assert!(shape.is_multi());
}

#[test]
fn optional_single_row() {
    let shape = Shape::optional::<i32>();
    assert_eq!(shape.kind(), ShapeKind::OptionalSingle);
    assert_eq!(shape.len(), 1);
    assert!(shape.is_emptyable());
    assert!(!shape.is_multi());
}

#[test]
fn optional_multi_row() {
    let shape = Shape::optional_multi(alt_set![i32, String]);
    assert_eq!(shape.kind(), ShapeKind::OptionalMulti);
    assert_eq!(shape.len(), 2);
    assert!(shape.is_emptyable());
    assert!(shape.is_multi());
}

#[test]
fn zero_alternatives_without_marker_is_rejected() {
    assert_eq!(
        Shape::new(AltSet::new(), false),
        Err(VarError::EmptyWithoutMarker)
    );
    assert!(Shape::multi(AltSet::new()).is_err());
}

#[test]
fn duplicate_pair_collapses_to_single() {
    assert_eq!(Shape::pair::<i32, i32>(), Shape::single::<i32>());
    assert_eq!(Shape::pair::<i32, i32>().kind(), ShapeKind::Single);
}

#[test]
fn optional_multi_of_nothing_is_empty() {
    assert_eq!(Shape::optional_multi(AltSet::new()), Shape::empty());
}

#[test]
fn contains_queries() {
    let shape = Shape::pair::<i32, String>();
    assert!(shape.contains::<i32>());
    assert!(shape.contains::<String>());
    assert!(!shape.contains::<f64>());
    assert!(shape.contains_index(0));
    assert!(shape.contains_index(1));
    assert!(!shape.contains_index(2));
}

#[test]
fn alt_at_follows_stored_order() {
    let shape = Shape::pair::<i32, String>();
    assert_eq!(shape.alt_at(0), Some(&AltType::of::<i32>()));
    assert_eq!(shape.alt_at(1), Some(&AltType::of::<String>()));
    assert_eq!(shape.alt_at(2), None);
}

#[test]
fn contains_empty_marker_tracks_emptyability() {
    assert!(Shape::optional::<i32>().contains::<crate::Nil>());
    assert!(!Shape::single::<i32>().contains::<crate::Nil>());
    assert!(Shape::empty().contains::<crate::Nil>());
}

#[test]
fn equality_ignores_alternative_order() {
    assert_eq!(Shape::pair::<i32, String>(), Shape::pair::<String, i32>());
    assert_ne!(
        Shape::pair::<i32, String>(),
        Shape::optional_multi(alt_set![i32, String])
    );
}

#[test]
fn explicit_convertibility_is_subset_based() {
    let single = Shape::single::<i32>();
    let pair = Shape::pair::<i32, String>();
    assert!(single.convertible_to(&pair));
    assert!(!pair.convertible_to(&single));
    assert!(!single.convertible_to(&Shape::empty()));
    assert!(!Shape::empty().convertible_to(&single));

    // Narrowing out of emptyability is still an *explicit* conversion.
    assert!(Shape::optional::<i32>().convertible_to(&single));
}

#[test]
fn implicit_coercion_keeps_emptyability() {
    let optional = Shape::optional::<i32>();
    assert!(!optional.coercible_to(&Shape::single::<i32>()));
    assert!(optional.coercible_to(&Shape::optional_multi(alt_set![i32, String])));
    assert!(Shape::single::<i32>().coercible_to(&optional));
}
