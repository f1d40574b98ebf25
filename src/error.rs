//! Error types for form lookups, conversions, binding and validation
//!
//! Two families of errors live here:
//!
//! - [`FormError`] is what lookups and conversions return, and what a [`Form`]
//!   accumulates while a validation chain runs.
//! - [`BindError`] is what [`Form::bind`] returns. It wraps [`FormError`] and
//!   adds the failures that only make sense while binding a record.
//!
//! # Examples
//!
//! ```
//! use formbind::{Form, FormError, Input};
//!
//! let form: Form = vec![Input::text("age", "abc")].into_iter().collect();
//!
//! match form.get_int("age") {
//!     Err(FormError::Conversion { name, target, .. }) => {
//!         assert_eq!(name, "age");
//!         assert_eq!(target, "int");
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//!
//! let missing = form.get_string("email").unwrap_err();
//! assert_eq!(
//!     missing.to_string(),
//!     "form: could not find input with name = email"
//! );
//! ```
//!
//! [`Form`]: crate::Form
//! [`Form::bind`]: crate::Form::bind

use std::error::Error as StdError;

use crate::input::{Input, InputKind};

/// Errors produced by form lookups and value conversions, and the entries of
/// a form's accumulated error list.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum FormError {
    /// No input with the given name exists in the form.
    #[error("form: could not find input with name = {name}")]
    InputNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The raw text of an input could not be converted to the requested type.
    #[error("form: error parsing {name} as {target}: {reason}")]
    Conversion {
        /// Name of the offending input.
        name: String,
        /// Raw text that failed to convert.
        value: String,
        /// The type the text was being converted to.
        target: &'static str,
        /// Why the conversion failed.
        reason: String,
    },

    /// A check in a validation chain failed.
    #[error("{0}")]
    Validation(ValidationError),
}

impl FormError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        FormError::InputNotFound { name: name.into() }
    }

    pub(crate) fn conversion(
        input: &Input,
        target: &'static str,
        reason: impl std::fmt::Display,
    ) -> Self {
        FormError::Conversion {
            name: input.name().to_string(),
            value: input.raw_value().to_string(),
            target,
            reason: reason.to_string(),
        }
    }

    /// Returns the validation error if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            FormError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for FormError {
    fn from(err: ValidationError) -> Self {
        FormError::Validation(err)
    }
}

/// A failed check recorded by a [`ValidationChain`](crate::ValidationChain).
///
/// Carries the field name that was validated, a copy of the input if the form
/// had one, and the rendered message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[error("{message}")]
pub struct ValidationError {
    field: String,
    input: Option<Input>,
    message: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: impl Into<String>, input: Option<Input>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            input,
            message: message.into(),
        }
    }

    /// Name of the validated field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The input that failed, or `None` when the field was missing from the form.
    pub fn input(&self) -> Option<&Input> {
        self.input.as_ref()
    }

    /// The rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors returned by [`Form::bind`](crate::Form::bind).
///
/// Binding is fail-fast: the first error stops the walk over the record's
/// fields and is returned as-is.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A lookup or conversion failed while binding a field.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The destination is not a record: it neither binds the whole form itself
    /// nor exposes any fields.
    #[error("form: bind expects a record, but got: {type_name}")]
    Type {
        /// Type name of the destination.
        type_name: &'static str,
    },

    /// No conversion exists from an input to the field's type.
    #[error(
        "form: don't know how to bind input of type {kind} and value {value:?} to field of type {type_name}"
    )]
    UnsupportedType {
        /// Type name of the field.
        type_name: &'static str,
        /// Kind of the matched input.
        kind: InputKind,
        /// Raw value of the matched input.
        value: String,
    },

    /// An error raised by a caller-implemented [`Bind`](crate::Bind) or
    /// [`BindInput`](crate::BindInput) override, passed through untouched.
    #[error(transparent)]
    Custom(Box<dyn StdError + Send + Sync>),
}

impl BindError {
    /// Wrap an error from a custom binder.
    ///
    /// Accepts anything convertible to a boxed error, including plain strings.
    ///
    /// ```
    /// use formbind::BindError;
    ///
    /// let err = BindError::custom("name must have two parts");
    /// assert_eq!(err.to_string(), "name must have two parts");
    /// ```
    pub fn custom(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        BindError::Custom(err.into())
    }

    pub(crate) fn unsupported<T: ?Sized>(input: &Input) -> Self {
        BindError::UnsupportedType {
            type_name: std::any::type_name::<T>(),
            kind: input.kind(),
            value: input.raw_value().to_string(),
        }
    }
}
