//! Fluent per-field validation that accumulates errors on the form
//!
//! [`Form::validate`] returns a [`ValidationChain`] for one field. Every check
//! returns the chain, so checks read left to right, and every failed check
//! appends a [`ValidationError`] to the form instead of stopping. After running
//! all the checks you care about, inspect [`Form::has_errors`] and
//! [`Form::errors`] to report every problem at once.
//!
//! # The skip rule
//!
//! Only [`required`](ValidationChain::required) cares whether a field is
//! missing or empty. Every other check silently passes on a missing or empty
//! field, so optional fields can be validated without extra branching.
//!
//! # Example
//!
//! ```rust
//! use formbind::{Form, Input};
//!
//! let mut form: Form = vec![
//!     Input::text("name", ""),
//!     Input::text("age", "twelve"),
//!     Input::text("price", "19.99"),
//! ]
//! .into_iter()
//! .collect();
//!
//! form.validate("name").required();
//! form.validate("age").required().greater_or_equal(18);
//! form.validate("price").less_float(10.0);
//! form.validate("nickname").is_int();
//!
//! let messages: Vec<String> = form.errors().iter().map(|e| e.to_string()).collect();
//! assert_eq!(
//!     messages,
//!     vec![
//!         "name is required.",
//!         "age must be an integer.",
//!         "price must be less than 10.000000.",
//!     ]
//! );
//! ```

use crate::error::{FormError, ValidationError};
use crate::form::Form;
use crate::input::Input;
use crate::predicate::{ge, gt, le, lt, Describe, Predicate};

/// Checks for a single field, recording failures on the owning [`Form`].
///
/// Created by [`Form::validate`]. The chain holds the form exclusively until it
/// is dropped; appending errors to it is the only change it makes.
#[derive(Debug)]
pub struct ValidationChain<'f> {
    form: &'f mut Form,
    field: String,
    added: Vec<String>,
}

impl Form {
    /// Start a validation chain for the input named `field`.
    ///
    /// This never fails: a missing input is carried along and only
    /// [`required`](ValidationChain::required) reports it.
    pub fn validate(&mut self, field: impl Into<String>) -> ValidationChain<'_> {
        ValidationChain {
            form: self,
            field: field.into(),
            added: Vec::new(),
        }
    }
}

impl<'f> ValidationChain<'f> {
    /// The validated field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The validated input, if the form has one.
    pub fn input(&self) -> Option<&Input> {
        self.form.input(&self.field)
    }

    /// Messages this chain has recorded so far.
    pub fn errors(&self) -> &[String] {
        &self.added
    }

    /// Record `message` for this field unconditionally.
    pub fn add_error(mut self, message: impl Into<String>) -> Self {
        self.record(message.into());
        self
    }

    fn record(&mut self, message: String) {
        let input = self.input().cloned();
        self.added.push(message.clone());
        self.form
            .push_error(ValidationError::new(self.field.clone(), input, message));
    }

    // The input, unless it is missing or empty.
    fn present(&self) -> Option<&Input> {
        self.input().filter(|input| !input.is_empty())
    }

    /// Fail if the field is missing or empty.
    ///
    /// Message: `"<field> is required."`
    pub fn required(self) -> Self {
        let message = format!("{} is required.", self.field);
        self.required_with(message)
    }

    /// Like [`required`](Self::required) with a custom message.
    pub fn required_with(mut self, message: impl Into<String>) -> Self {
        if self.present().is_none() {
            self.record(message.into());
        }
        self
    }

    /// Run `predicate` against the field parsed as an integer.
    ///
    /// A value that does not parse records `"<field> must be an integer."`
    /// regardless of `message`; a value that parses but fails the predicate
    /// records `message`.
    pub fn ensure_int<P: Predicate<i64>>(self, predicate: P, message: impl Into<String>) -> Self {
        self.ensure_parsed(Input::int, "must be an integer", predicate, message)
    }

    /// Run `predicate` against the field parsed as a float.
    ///
    /// A value that does not parse records `"<field> must be a number."`
    /// regardless of `message`.
    pub fn ensure_float<P: Predicate<f64>>(self, predicate: P, message: impl Into<String>) -> Self {
        self.ensure_parsed(Input::float, "must be a number", predicate, message)
    }

    fn ensure_parsed<T, P>(
        mut self,
        parse: fn(&Input) -> Result<T, FormError>,
        not_parsed: &str,
        predicate: P,
        message: impl Into<String>,
    ) -> Self
    where
        P: Predicate<T>,
    {
        let Some(parsed) = self.present().map(parse) else {
            return self;
        };
        match parsed {
            Ok(value) if predicate.check(&value) => {}
            Ok(_) => self.record(message.into()),
            Err(_) => {
                let fixed = format!("{} {}.", self.field, not_parsed);
                self.record(fixed);
            }
        }
        self
    }

    fn compare_int<P: Predicate<i64> + Describe>(self, predicate: P) -> Self {
        let message = predicate.describe(&self.field);
        self.ensure_int(predicate, message)
    }

    fn compare_float<P: Predicate<f64> + Describe>(self, predicate: P) -> Self {
        let message = predicate.describe(&self.field);
        self.ensure_float(predicate, message)
    }

    /// Fail unless the integer value is less than `limit`.
    ///
    /// Message: `"<field> must be less than <limit>."`
    pub fn less(self, limit: i64) -> Self {
        self.compare_int(lt(limit))
    }

    /// Like [`less`](Self::less) with a custom message.
    pub fn less_with(self, limit: i64, message: impl Into<String>) -> Self {
        self.ensure_int(lt(limit), message)
    }

    /// Fail unless the integer value is at most `limit`.
    ///
    /// Message: `"<field> must be less than or equal to <limit>."`
    pub fn less_or_equal(self, limit: i64) -> Self {
        self.compare_int(le(limit))
    }

    /// Like [`less_or_equal`](Self::less_or_equal) with a custom message.
    pub fn less_or_equal_with(self, limit: i64, message: impl Into<String>) -> Self {
        self.ensure_int(le(limit), message)
    }

    /// Fail unless the integer value is greater than `limit`.
    ///
    /// Message: `"<field> must be greater than <limit>."`
    pub fn greater(self, limit: i64) -> Self {
        self.compare_int(gt(limit))
    }

    /// Like [`greater`](Self::greater) with a custom message.
    pub fn greater_with(self, limit: i64, message: impl Into<String>) -> Self {
        self.ensure_int(gt(limit), message)
    }

    /// Fail unless the integer value is at least `limit`.
    ///
    /// Message: `"<field> must be greater than or equal to <limit>."`
    pub fn greater_or_equal(self, limit: i64) -> Self {
        self.compare_int(ge(limit))
    }

    /// Like [`greater_or_equal`](Self::greater_or_equal) with a custom message.
    pub fn greater_or_equal_with(self, limit: i64, message: impl Into<String>) -> Self {
        self.ensure_int(ge(limit), message)
    }

    /// Fail unless the value parses as an integer.
    ///
    /// Message: `"<field> must be an integer."`
    pub fn is_int(self) -> Self {
        let message = format!("{} must be an integer.", self.field);
        self.is_int_with(message)
    }

    /// Like [`is_int`](Self::is_int) with a custom message.
    pub fn is_int_with(self, message: impl Into<String>) -> Self {
        self.is_parsable(Input::int, message)
    }

    /// Fail unless the float value is less than `limit`.
    ///
    /// Message: `"<field> must be less than <limit>."` with six decimals.
    pub fn less_float(self, limit: f64) -> Self {
        self.compare_float(lt(limit))
    }

    /// Like [`less_float`](Self::less_float) with a custom message.
    pub fn less_float_with(self, limit: f64, message: impl Into<String>) -> Self {
        self.ensure_float(lt(limit), message)
    }

    /// Fail unless the float value is at most `limit`.
    pub fn less_or_equal_float(self, limit: f64) -> Self {
        self.compare_float(le(limit))
    }

    /// Like [`less_or_equal_float`](Self::less_or_equal_float) with a custom message.
    pub fn less_or_equal_float_with(self, limit: f64, message: impl Into<String>) -> Self {
        self.ensure_float(le(limit), message)
    }

    /// Fail unless the float value is greater than `limit`.
    pub fn greater_float(self, limit: f64) -> Self {
        self.compare_float(gt(limit))
    }

    /// Like [`greater_float`](Self::greater_float) with a custom message.
    pub fn greater_float_with(self, limit: f64, message: impl Into<String>) -> Self {
        self.ensure_float(gt(limit), message)
    }

    /// Fail unless the float value is at least `limit`.
    pub fn greater_or_equal_float(self, limit: f64) -> Self {
        self.compare_float(ge(limit))
    }

    /// Like [`greater_or_equal_float`](Self::greater_or_equal_float) with a custom message.
    pub fn greater_or_equal_float_with(self, limit: f64, message: impl Into<String>) -> Self {
        self.ensure_float(ge(limit), message)
    }

    /// Fail unless the value parses as a float.
    ///
    /// Message: `"<field> must be a number."`
    pub fn is_float(self) -> Self {
        let message = format!("{} must be a number.", self.field);
        self.is_float_with(message)
    }

    /// Like [`is_float`](Self::is_float) with a custom message.
    pub fn is_float_with(self, message: impl Into<String>) -> Self {
        self.is_parsable(Input::float, message)
    }

    /// Fail unless the value converts to a bool.
    ///
    /// Checkboxes and radio buttons always pass, since their value is the
    /// checked flag. Message: `"<field> must be either true or false."`
    pub fn is_bool(self) -> Self {
        let message = format!("{} must be either true or false.", self.field);
        self.is_bool_with(message)
    }

    /// Like [`is_bool`](Self::is_bool) with a custom message.
    pub fn is_bool_with(self, message: impl Into<String>) -> Self {
        self.is_parsable(Input::bool, message)
    }

    fn is_parsable<T>(
        mut self,
        parse: fn(&Input) -> Result<T, FormError>,
        message: impl Into<String>,
    ) -> Self {
        let failed = self.present().is_some_and(|input| parse(input).is_err());
        if failed {
            self.record(message.into());
        }
        self
    }
}
