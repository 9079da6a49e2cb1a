#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::alt_set;
use crate::shape::ShapeKind;

#[test]
fn single_always_holds_its_alternative() {
    let var = Var::single(10_i32);
    assert_eq!(var.shape().kind(), ShapeKind::Single);
    assert_eq!(var.index(), Some(0));
    assert!(var.is_some());
    assert!(!var.is_empty());
    assert!(var.holds::<i32>());
    assert!(!var.holds::<Nil>());
    assert_eq!(var.get::<i32>(), Some(&10));
}

#[test]
fn optional_can_be_empty() {
    let held = Var::optional(10_i32);
    assert_eq!(held.shape().kind(), ShapeKind::OptionalSingle);
    assert_eq!(held.get::<i32>(), Some(&10));

    let vacant = Var::optional_empty::<i32>();
    assert_eq!(vacant.shape().kind(), ShapeKind::OptionalSingle);
    assert_eq!(vacant.index(), None);
    assert!(vacant.is_empty());
    assert!(vacant.holds::<Nil>());
    assert!(!vacant.holds::<i32>());
    assert_eq!(vacant.get::<i32>(), None);
}

#[test]
fn empty_value() {
    let var = Var::empty();
    assert_eq!(var.shape().kind(), ShapeKind::Empty);
    assert!(var.is_empty());
    assert!(var.holds::<Nil>());
    assert_eq!(var.index(), None);
}

#[test]
fn new_checks_alternative_membership() {
    let shape = Shape::pair::<i32, String>();
    let var = Var::new(shape.clone(), String::from("hi")).expect("String is an alternative");
    assert_eq!(var.index(), Some(1));
    assert!(var.holds::<String>());

    let err = Var::new(shape, 1.5_f64);
    assert_eq!(
        err.map(|_| ()),
        Err(VarError::AlternativeMismatch {
            shape: ShapeKind::Pair,
            alt: std::any::type_name::<f64>(),
        })
    );
}

#[test]
fn new_empty_requires_emptyable_shape() {
    assert!(Var::new_empty(Shape::optional::<i32>()).is_ok());
    assert_eq!(
        Var::new_empty(Shape::single::<i32>()).map(|_| ()),
        Err(VarError::BadCast {
            target: ShapeKind::Single
        })
    );
}

#[test]
fn get_mut_and_set_keep_the_shape() {
    let mut var = Var::new(Shape::pair::<i32, String>(), 7_i32).expect("i32 is an alternative");
    if let Some(value) = var.get_mut::<i32>() {
        *value += 1;
    }
    assert_eq!(var.get::<i32>(), Some(&8));

    var.set(String::from("now a string")).expect("in shape");
    assert_eq!(var.index(), Some(1));
    assert_eq!(var.shape().kind(), ShapeKind::Pair);

    assert!(var.set(1.5_f64).is_err());
}

#[test]
fn clear_respects_emptyability() {
    let mut optional = Var::optional(10_i32);
    optional.clear().expect("optional can be empty");
    assert!(optional.is_empty());

    let mut single = Var::single(10_i32);
    assert_eq!(
        single.clear(),
        Err(VarError::BadCast {
            target: ShapeKind::Single
        })
    );
    assert!(single.is_some());
}

#[test]
fn holds_index_tracks_the_active_position() {
    let var = Var::new(Shape::pair::<i32, String>(), String::from("second")).expect("in shape");
    assert!(var.holds_index(1));
    assert!(!var.holds_index(0));

    // An empty value sits at no index.
    assert!(!Var::optional_empty::<i32>().holds_index(0));
}

#[test]
fn into_alt_moves_the_value_out() {
    let var = Var::single(String::from("owned"));
    assert_eq!(var.into_alt::<String>().ok(), Some(String::from("owned")));

    let var = Var::single(10_i32);
    let back = var.into_alt::<String>().expect_err("wrong type");
    assert_eq!(back.get::<i32>(), Some(&10));
}

#[test]
fn clone_duplicates_the_payload() {
    let var = Var::new(
        Shape::optional_multi(alt_set![i32, String]),
        String::from("deep"),
    )
    .expect("in shape");
    let copy = var.clone();
    assert_eq!(copy.get::<String>(), Some(&String::from("deep")));
    assert_eq!(var.get::<String>(), Some(&String::from("deep")));
}

#[test]
fn wrap_auto_detects() {
    // Plain values wrap into Single.
    let var = wrap(10_i32);
    assert_eq!(var.shape().kind(), ShapeKind::Single);
    assert_eq!(var.get::<i32>(), Some(&10));

    // Unit and the marker wrap into Empty.
    assert_eq!(wrap(()).shape().kind(), ShapeKind::Empty);
    assert_eq!(wrap(Nil).shape().kind(), ShapeKind::Empty);

    // A value that is already shaped passes through.
    let var = wrap(Var::optional(7_i32));
    assert_eq!(var.shape().kind(), ShapeKind::OptionalSingle);
    assert_eq!(var.get::<i32>(), Some(&7));
}

#[test]
fn wrapped_shape_matches_wrap() {
    assert_eq!(wrapped_shape::<i32>(), Shape::single::<i32>());
    assert_eq!(wrapped_shape::<()>(), Shape::empty());
    assert_eq!(wrapped_shape::<Nil>(), Shape::empty());
}
