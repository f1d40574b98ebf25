//! # formbind
//!
//! Read the inputs of an HTML form, convert them to typed values, bind them
//! onto your own records and validate them, collecting every error at once.
//!
//! ## Overview
//!
//! - [`Input`]: one named input with its raw text and [`InputKind`], plus
//!   kind-aware conversions (`int`, `uint`, `float`, `bool`, `time`).
//! - [`Form`]: the inputs of one form and the errors recorded against it.
//! - [`Form::bind`]: copies inputs onto a record whose field names match
//!   case-insensitively. See [`Bind`], [`BindInput`] and [`record!`].
//! - [`Form::validate`]: a fluent [`ValidationChain`] of checks that append
//!   errors to the form instead of failing.
//!
//! ## Quick Example
//!
//! ```rust
//! use formbind::{record, Form, Input, InputKind};
//!
//! #[derive(Debug, Default)]
//! struct Order {
//!     item: String,
//!     quantity: u32,
//!     gift: bool,
//! }
//!
//! record!(Order { item, quantity, gift });
//!
//! let mut form: Form = vec![
//!     Input::text("item", "teapot"),
//!     Input::new("quantity", "3", InputKind::Number),
//!     Input::checkbox("gift", "yes", false),
//! ]
//! .into_iter()
//! .collect();
//!
//! form.validate("item").required();
//! form.validate("quantity").required().greater(0).less_or_equal(10);
//!
//! if form.has_errors() {
//!     for err in form.errors() {
//!         println!("{}", err);
//!     }
//! } else {
//!     let mut order = Order::default();
//!     form.bind(&mut order).expect("validated form binds");
//!     assert_eq!(order.quantity, 3);
//!     assert!(!order.gift);
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events while binding and recording errors.
//! - `serde`: `Serialize`/`Deserialize` for [`Input`] and [`InputKind`], and
//!   `Serialize` for [`FormError`], so recorded errors can be sent to a client.
//! - `proptest`: an `Arbitrary` impl for [`InputKind`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bind;
pub mod error;
pub mod form;
pub mod input;
pub mod predicate;
pub mod testing;
pub mod validation;

// Re-exports
pub use bind::{Bind, BindInput, Field};
pub use error::{BindError, FormError, ValidationError};
pub use form::Form;
pub use input::{Input, InputKind};
pub use validation::ValidationChain;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bind::{Bind, BindInput, Field};
    pub use crate::error::{BindError, FormError, ValidationError};
    pub use crate::form::Form;
    pub use crate::input::{Input, InputKind};
    pub use crate::record;
    pub use crate::validation::ValidationChain;
}
