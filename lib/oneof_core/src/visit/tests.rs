#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use crate::alt_set;
use pretty_assertions::assert_eq;

#[test]
fn weak_visit_dispatches_on_the_active_alternative() {
    let mut handler = Handler::new()
        .on(|x: i32| x * 2)
        .on(|s: String| s.len());
    let out = weak_visit(&mut handler, Var::single(21_i32)).expect("arm covers i32");
    assert_eq!(out.get::<i32>(), Some(&42));

    let out = weak_visit(&mut handler, Var::single(String::from("four"))).expect("arm covers");
    assert_eq!(out.get::<usize>(), Some(&4));
}

#[test]
fn weak_visit_rejects_empty_values() {
    let mut handler = Handler::of(|x: i32| x);
    assert_eq!(
        weak_visit(&mut handler, Var::optional_empty::<i32>()).map(|_| ()),
        Err(VarError::MissingEmptyArm)
    );
}

#[test]
fn visit_routes_emptiness_to_the_empty_arm() {
    let mut handler = Handler::of(|x: i32| x * 2).on_empty(|| -1_i32);
    let out = visit(&mut handler, Var::optional_empty::<i32>()).expect("empty arm exists");
    assert_eq!(out.get::<i32>(), Some(&-1));

    let out = visit(&mut handler, Var::optional(5_i32)).expect("arm covers i32");
    assert_eq!(out.get::<i32>(), Some(&10));
}

#[test]
fn map_shape_of_empty_input_is_empty() {
    let handler = Handler::new();
    let shape = map_result_shape(&Shape::empty(), &handler).expect("no arms needed");
    assert_eq!(shape, Shape::empty());
}

#[test]
fn map_shape_folds_arm_results_with_join() {
    let handler = Handler::new().on(|x: i32| x).on(|_s: String| 1.5_f64);
    let shape = map_result_shape(&Shape::single::<i32>(), &handler).expect("covered");
    assert_eq!(shape, Shape::single::<i32>());

    let shape = map_result_shape(&Shape::pair::<i32, String>(), &handler).expect("covered");
    assert_eq!(shape, Shape::pair::<i32, f64>());
}

#[test]
fn map_shape_preserves_emptyability() {
    let handler = Handler::of(|x: i32| x * 2);
    let shape = map_result_shape(&Shape::optional::<i32>(), &handler).expect("covered");
    assert_eq!(shape, Shape::optional::<i32>());
}

#[test]
fn map_shape_honors_declared_bind_results() {
    let handler = Handler::new().bind(Shape::optional::<String>(), |_x: i32| {
        Var::optional_empty::<String>()
    });
    let shape = map_result_shape(&Shape::single::<i32>(), &handler).expect("covered");
    assert_eq!(shape, Shape::optional::<String>());
}

#[test]
fn map_shape_requires_every_alternative() {
    let handler = Handler::of(|x: i32| x);
    assert_eq!(
        map_result_shape(&Shape::pair::<i32, String>(), &handler),
        Err(VarError::UnhandledAlternative {
            alt: std::any::type_name::<String>(),
        })
    );
}

#[test]
fn match_shape_requires_the_empty_arm_for_emptyable_inputs() {
    let handler = Handler::of(|x: i32| x);
    assert_eq!(
        match_result_shape(&Shape::optional::<i32>(), &handler),
        Err(VarError::MissingEmptyArm)
    );
    // Non-emptyable inputs never reach the empty arm.
    assert_eq!(
        match_result_shape(&Shape::single::<i32>(), &handler),
        Ok(Shape::single::<i32>())
    );
}

#[test]
fn match_shape_joins_the_empty_arm_result() {
    let handler = Handler::of(|x: i32| x).on_empty(|| String::from("fallback"));
    let shape = match_result_shape(&Shape::optional::<i32>(), &handler).expect("covered");
    assert_eq!(shape, Shape::pair::<i32, String>());
    assert!(!shape.is_emptyable());
}

#[test]
fn match_shape_of_empty_input_is_the_empty_arm_shape() {
    let handler = Handler::new().on_empty(|| 7_i32);
    let shape = match_result_shape(&Shape::empty(), &handler).expect("covered");
    assert_eq!(shape, Shape::single::<i32>());
}

#[test]
fn match_shape_widens_across_arms() {
    let handler = Handler::new()
        .on(|x: i32| x)
        .on(|s: String| s)
        .on_empty(|| 0_u8);
    let input = Shape::optional_multi(alt_set![i32, String]);
    let shape = match_result_shape(&input, &handler).expect("covered");
    assert_eq!(
        shape,
        Shape::multi(alt_set![u8, i32, String]).expect("non-empty")
    );
}
