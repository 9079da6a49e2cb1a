//! Canonical sum-type shapes and the operations shared across them.
//!
//! A value in this library holds one of several possible alternatives, or
//! possibly nothing. Six canonical shapes cover every combination of "can
//! be empty" and "has more than one alternative" (see [`ShapeKind`]), and
//! every operation that combines two values (transforming, merging,
//! falling back) reduces the combination to the *simplest equivalent
//! shape* rather than merely a workable one.
//!
//! # Layers
//!
//! 1. **Classification** (`shape`): which shape a value has, along the two
//!    axes emptyable / multi-alternative.
//! 2. **Canonicalization** (`canon`): the pure algebra (`simplify`,
//!    `with_empty`, `join`, `first_of`) that picks the minimal shape for
//!    any alternative set.
//! 3. **Dispatch** (`handler`, `visit`): invoking a typed arm on the
//!    active alternative (or the empty marker), with result shapes
//!    inferred by folding the algebra over the arms.
//! 4. **Operations** (`ops`): `map`, `match_with`, `map_or`,
//!    `map_or_else`, `or_else`, `take`, and the conversion family, each
//!    defined once in terms of the layers below.
//!
//! # Example
//!
//! ```
//! use oneof_core::{Handler, ShapeKind, Var};
//!
//! # fn main() -> Result<(), oneof_core::VarError> {
//! let doubled = Var::optional(10_i32)
//!     .map(&mut Handler::of(|x: i32| x * 2))?
//!     .map(&mut Handler::of(|x: i32| x * 2))?;
//! assert_eq!(doubled.shape().kind(), ShapeKind::OptionalSingle);
//! assert_eq!(doubled.get::<i32>(), Some(&40));
//! # Ok(())
//! # }
//! ```

mod alt;
mod canon;
mod error;
mod handler;
mod ops;
mod shape;
mod value;
mod visit;

pub use alt::{AltSet, AltType, Nil};
pub use error::VarError;
pub use handler::Handler;
pub use shape::{Shape, ShapeKind};
pub use value::{wrap, wrapped_shape, Var};
pub use visit::{map_result_shape, match_result_shape, visit, weak_visit};
