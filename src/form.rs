//! The form container
//!
//! A [`Form`] owns the inputs of one HTML form, keyed by name, plus the list of
//! errors accumulated while it is validated. A form is typically built once,
//! validated and bound, then dropped.
//!
//! # Building a form
//!
//! ```rust
//! use formbind::{Form, Input, InputKind};
//!
//! let form = Form::new()
//!     .with_input(Input::text("name", "Ada"))
//!     .with_input(Input::new("age", "36", InputKind::Number))
//!     .with_input(Input::checkbox("subscribe", "on", true));
//!
//! assert_eq!(form.get_string("name").unwrap(), "Ada");
//! assert_eq!(form.get_int("age").unwrap(), 36);
//! assert!(form.get_bool("subscribe").unwrap());
//! assert!(form.get_int("missing").is_err());
//! ```
//!
//! # From a request body
//!
//! ```rust
//! use formbind::Form;
//!
//! let form = Form::from_urlencoded("first=Ada&last=Lovelace&note=hello+world%21").unwrap();
//! assert_eq!(form.get_string("note").unwrap(), "hello world!");
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};

use crate::error::FormError;
use crate::input::{Input, InputKind};

/// The inputs of one form and its accumulated errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    inputs: BTreeMap<String, Input>,
    errors: Vec<FormError>,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Form::default()
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// Every input gets [`InputKind::Text`]. When a name appears more than
    /// once, the last value wins. A malformed percent-escape is reported as a
    /// conversion error naming the raw key of the offending pair.
    pub fn from_urlencoded(body: &str) -> Result<Self, FormError> {
        let mut form = Form::new();
        for pair in body.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(name, name)?;
            let value = decode_component(value, name)?;
            form.insert(Input::new(key, value, InputKind::Text));
        }
        Ok(form)
    }

    /// Add an input, replacing any earlier input with the same name.
    ///
    /// Returns the replaced input, if any.
    pub fn insert(&mut self, input: Input) -> Option<Input> {
        self.inputs.insert(input.name().to_string(), input)
    }

    /// Builder form of [`Form::insert`].
    pub fn with_input(mut self, input: Input) -> Self {
        self.insert(input);
        self
    }

    /// Look up an input by its exact name.
    pub fn input(&self, name: &str) -> Option<&Input> {
        self.inputs.get(name)
    }

    /// All inputs, ordered by name.
    pub fn inputs(&self) -> impl Iterator<Item = &Input> {
        self.inputs.values()
    }

    /// Number of inputs.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// True when the form has no inputs.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    fn require(&self, name: &str) -> Result<&Input, FormError> {
        self.input(name).ok_or_else(|| FormError::not_found(name))
    }

    /// The raw text of the named input.
    pub fn get_string(&self, name: &str) -> Result<String, FormError> {
        self.require(name).map(|input| input.raw_value().to_string())
    }

    /// The named input converted with [`Input::int`].
    pub fn get_int(&self, name: &str) -> Result<i64, FormError> {
        self.require(name)?.int()
    }

    /// The named input converted with [`Input::uint`].
    pub fn get_uint(&self, name: &str) -> Result<u64, FormError> {
        self.require(name)?.uint()
    }

    /// The named input converted with [`Input::float`].
    pub fn get_float(&self, name: &str) -> Result<f64, FormError> {
        self.require(name)?.float()
    }

    /// The named input converted with [`Input::bool`].
    pub fn get_bool(&self, name: &str) -> Result<bool, FormError> {
        self.require(name)?.bool()
    }

    /// The named input converted with [`Input::time`].
    pub fn get_time(&self, name: &str) -> Result<DateTime<FixedOffset>, FormError> {
        self.require(name)?.time()
    }

    /// Errors accumulated so far, in the order they were recorded.
    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    /// True if at least one error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Record an error.
    ///
    /// This is the only way errors are added to a form; validation chains go
    /// through it too.
    pub fn push_error(&mut self, err: impl Into<FormError>) {
        let err = err.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(error = %err, "form error recorded");
        self.errors.push(err);
    }
}

fn decode_component(raw: &str, key: &str) -> Result<String, FormError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| FormError::Conversion {
            name: key.to_string(),
            value: raw.to_string(),
            target: "form",
            reason: e.to_string(),
        })
}

impl FromIterator<Input> for Form {
    fn from_iter<I: IntoIterator<Item = Input>>(iter: I) -> Self {
        let mut form = Form::new();
        form.extend(iter);
        form
    }
}

impl Extend<Input> for Form {
    fn extend<I: IntoIterator<Item = Input>>(&mut self, iter: I) {
        for input in iter {
            self.insert(input);
        }
    }
}
