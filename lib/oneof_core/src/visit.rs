//! The dispatch/visitor layer.
//!
//! Two dispatch flavors over a [`Var`] and a [`Handler`]:
//! - [`weak_visit`]: the handler need not cover the empty marker; only
//!   legal once the value is known to hold an alternative.
//! - [`visit`]: the handler must cover every case the shape admits,
//!   including the empty marker for emptyable shapes and for `Empty`
//!   itself.
//!
//! Result-shape inference enumerates the wrapped result shape of each arm
//! an input shape can reach and folds them with `join`; the monadic
//! operations re-project every dispatch result into the inferred shape.

use crate::error::VarError;
use crate::handler::Handler;
use crate::shape::{Shape, ShapeKind};
use crate::value::Var;

/// Dispatch to the arm for the active alternative.
///
/// Fails with [`VarError::MissingEmptyArm`] when the value is currently
/// empty (callers check emptiness first) and with
/// [`VarError::UnhandledAlternative`] when no arm covers the active type.
pub fn weak_visit(handler: &mut Handler, value: Var) -> Result<Var, VarError> {
    match value.into_slot() {
        Some(slot) => handler.invoke_alt(slot),
        None => Err(VarError::MissingEmptyArm),
    }
}

/// Dispatch to the arm for the active alternative, or to the empty-marker
/// arm when the value is empty.
pub fn visit(handler: &mut Handler, value: Var) -> Result<Var, VarError> {
    match value.into_slot() {
        Some(slot) => handler.invoke_alt(slot),
        None => handler.invoke_empty(),
    }
}

/// Result shape of mapping `handler` over a value of shape `input`.
///
/// `Empty` maps to `Empty` without consulting the handler. Otherwise every
/// alternative must be covered; the arms' declared result shapes fold with
/// `join`, and an emptyable input makes the result emptyable (the no-op
/// empty path is preserved).
pub fn map_result_shape(input: &Shape, handler: &Handler) -> Result<Shape, VarError> {
    if input.kind() == ShapeKind::Empty {
        return Ok(Shape::empty());
    }
    let folded = fold_alt_results(input, handler, None)?;
    if input.is_emptyable() {
        return Ok(folded.with_empty());
    }
    Ok(folded)
}

/// Result shape of matching `handler` over a value of shape `input`.
///
/// Like [`map_result_shape`], but a shape that can be empty additionally
/// requires the empty-marker arm, whose declared result shape joins the
/// fold; the empty path is handled, not preserved.
pub fn match_result_shape(input: &Shape, handler: &Handler) -> Result<Shape, VarError> {
    if input.is_emptyable() {
        let empty_results = handler.empty_results()?.clone();
        return fold_alt_results(input, handler, Some(empty_results));
    }
    fold_alt_results(input, handler, None)
}

/// Fold the declared result shapes of the arms reachable from `input`,
/// optionally seeding the fold with the empty-marker arm's shape.
fn fold_alt_results(
    input: &Shape,
    handler: &Handler,
    seed: Option<Shape>,
) -> Result<Shape, VarError> {
    let mut acc = seed;
    for alt in input.alts().iter() {
        let results = handler.alt_results(alt.id(), alt.name())?;
        acc = Some(match acc {
            Some(current) => current.join(results),
            None => results.clone().simplify(),
        });
    }
    // A seedless fold over zero alternatives cannot happen: `Empty` is
    // handled by the callers before folding.
    Ok(acc.unwrap_or_else(Shape::empty))
}

#[cfg(test)]
mod tests;
