//! Predicates for validating parsed field values
//!
//! The numeric checks of a [`ValidationChain`](crate::ValidationChain) are built
//! from these predicates. They can also be passed to
//! [`ensure_int`](crate::ValidationChain::ensure_int) and
//! [`ensure_float`](crate::ValidationChain::ensure_float) directly, combined
//! with `and`, `or` and `not`, or replaced by plain closures.
//!
//! # Example
//!
//! ```rust
//! use formbind::{Form, Input};
//! use formbind::predicate::*;
//!
//! let mut form: Form = vec![Input::text("age", "17")].into_iter().collect();
//!
//! form.validate("age")
//!     .ensure_int(ge(18).and(le(130)), "You must be an adult.");
//!
//! assert_eq!(form.errors()[0].to_string(), "You must be an adult.");
//! ```

mod combinators;
mod comparison;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};
pub use comparison::{between, ge, gt, le, lt, Between, Describe, Ge, Gt, Le, Limit, Lt};
