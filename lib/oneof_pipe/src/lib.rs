//! Lazy pipeline combinators over the `oneof_core` algebra.
//!
//! A pipeline is built from [`Stage`]s and run later against a
//! [`Var`](oneof_core::Var). Two composition modes:
//!
//! - [`Sequence`] chains steps; an empty intermediate value skips the rest
//!   of the chain.
//! - [`Fork`] tries branches against the *original* input and keeps the
//!   first non-empty result; branches that cannot dispatch the input's
//!   active type are skipped without being invoked.
//!
//! [`Filter`] and [`FilterType`] gate values into the pipeline by
//! predicate or by exact runtime type. Steps compose with
//! [`then`](StageExt::then) / [`or`](StageExt::or), the `>>` and `|`
//! operators, or the [`sequence!`] / [`fork!`] macros.
//!
//! # Example
//!
//! ```
//! use oneof_core::Var;
//! use oneof_pipe::{sequence, Stage, Step};
//!
//! # fn main() -> Result<(), oneof_core::VarError> {
//! let mut add_two = sequence![Step::of(|x: i32| x + 1), Step::of(|x: i32| x + 1)];
//! let out = add_two.call(Var::single(0_i32))?;
//! assert_eq!(out.get::<i32>(), Some(&2));
//! # Ok(())
//! # }
//! ```

mod filter;
mod fork;
mod sequence;
mod stage;

pub use filter::{Filter, FilterType};
pub use fork::Fork;
pub use sequence::Sequence;
pub use stage::{Stage, StageExt, Step};
