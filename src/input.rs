//! Form inputs and their kind-aware value conversions
//!
//! An [`Input`] is one named field of an HTML form: the name attribute, the raw
//! value attribute, the declared [`InputKind`] and, for checkboxes and radio
//! buttons, whether the element is checked.
//!
//! # Conversions
//!
//! | method    | result                  | rule                                                    |
//! |-----------|-------------------------|---------------------------------------------------------|
//! | [`int`]   | `i64`                   | base-10, optional leading sign                          |
//! | [`uint`]  | `u64`                   | base-10, no sign                                        |
//! | [`float`] | `f64`                   | base-10, scientific notation accepted                   |
//! | [`bool`]  | `bool`                  | checked flag for checkbox/radio, else `true`/`false`    |
//! | [`time`]  | `DateTime<FixedOffset>` | layout picked by kind: date, datetime-local or RFC 3339 |
//!
//! [`int`]: Input::int
//! [`uint`]: Input::uint
//! [`float`]: Input::float
//! [`bool`]: Input::bool
//! [`time`]: Input::time
//!
//! # Example
//!
//! ```rust
//! use formbind::{Input, InputKind};
//!
//! let age = Input::new("age", "42", InputKind::Number);
//! assert_eq!(age.int().unwrap(), 42);
//!
//! let terms = Input::checkbox("terms", "on", true);
//! assert!(terms.bool().unwrap());
//!
//! let born = Input::new("born", "1990-04-01", InputKind::Date);
//! assert_eq!(born.time().unwrap().to_rfc3339(), "1990-04-01T00:00:00+00:00");
//! ```

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::FormError;

const DATE_LAYOUT: &str = "%Y-%m-%d";
const DATETIME_LOCAL_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// The `type` attribute of an HTML input element.
///
/// Parsing is case-insensitive and accepts the attribute spelling
/// (`"datetime-local"`, `"tel"`, ...). The empty string is [`InputKind::Default`].
/// Use [`InputKind::from_attribute`] to fall back to [`InputKind::Text`] for
/// types a browser would not recognise.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[allow(missing_docs)]
pub enum InputKind {
    /// No type attribute at all.
    #[default]
    #[strum(serialize = "")]
    #[cfg_attr(feature = "serde", serde(rename = ""))]
    Default,
    #[strum(serialize = "button")]
    Button,
    #[strum(serialize = "checkbox")]
    Checkbox,
    #[strum(serialize = "color")]
    Color,
    #[strum(serialize = "date")]
    Date,
    #[strum(serialize = "datetime")]
    #[cfg_attr(feature = "serde", serde(rename = "datetime"))]
    DateTime,
    #[strum(serialize = "datetime-local")]
    #[cfg_attr(feature = "serde", serde(rename = "datetime-local"))]
    DateTimeLocal,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "file")]
    File,
    #[strum(serialize = "hidden")]
    Hidden,
    #[strum(serialize = "image")]
    Image,
    #[strum(serialize = "month")]
    Month,
    #[strum(serialize = "number")]
    Number,
    #[strum(serialize = "password")]
    Password,
    #[strum(serialize = "radio")]
    Radio,
    #[strum(serialize = "range")]
    Range,
    #[strum(serialize = "reset")]
    Reset,
    #[strum(serialize = "search")]
    Search,
    #[strum(serialize = "tel")]
    Tel,
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "time")]
    Time,
    #[strum(serialize = "url")]
    Url,
    #[strum(serialize = "week")]
    Week,
}

impl InputKind {
    /// Resolve a `type` attribute the way a browser does: unknown types are
    /// treated as text.
    ///
    /// ```rust
    /// use formbind::InputKind;
    ///
    /// assert_eq!(InputKind::from_attribute("DateTime-Local"), InputKind::DateTimeLocal);
    /// assert_eq!(InputKind::from_attribute(""), InputKind::Default);
    /// assert_eq!(InputKind::from_attribute("sparkles"), InputKind::Text);
    /// ```
    pub fn from_attribute(attr: &str) -> Self {
        InputKind::from_str(attr.trim()).unwrap_or(InputKind::Text)
    }

    /// Checkbox and radio inputs carry their value in the checked flag.
    pub fn is_checkable(self) -> bool {
        matches!(self, InputKind::Checkbox | InputKind::Radio)
    }
}

/// One named input of a form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Input {
    name: String,
    raw_value: String,
    kind: InputKind,
    #[cfg_attr(feature = "serde", serde(default))]
    checked: bool,
}

impl Input {
    /// Create an unchecked input.
    pub fn new(name: impl Into<String>, raw_value: impl Into<String>, kind: InputKind) -> Self {
        Input {
            name: name.into(),
            raw_value: raw_value.into(),
            kind,
            checked: false,
        }
    }

    /// Shorthand for a `type="text"` input.
    pub fn text(name: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Input::new(name, raw_value, InputKind::Text)
    }

    /// Shorthand for a `type="checkbox"` input.
    pub fn checkbox(name: impl Into<String>, raw_value: impl Into<String>, checked: bool) -> Self {
        Input::new(name, raw_value, InputKind::Checkbox).with_checked(checked)
    }

    /// Set the checked flag.
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// The name attribute.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value attribute, unparsed.
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// The declared kind.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Whether the element is checked. Only meaningful for checkboxes and radios.
    pub fn checked(&self) -> bool {
        self.checked
    }

    /// True when the raw text is the empty string.
    pub fn is_empty(&self) -> bool {
        self.raw_value.is_empty()
    }

    /// Parse the raw text as a base-10 signed integer.
    pub fn int(&self) -> Result<i64, FormError> {
        self.raw_value
            .parse::<i64>()
            .map_err(|e| FormError::conversion(self, "int", e))
    }

    /// Parse the raw text as a base-10 unsigned integer.
    ///
    /// A leading sign is rejected, including `+`.
    pub fn uint(&self) -> Result<u64, FormError> {
        self.unsigned_digits("uint")?
            .parse::<u64>()
            .map_err(|e| FormError::conversion(self, "uint", e))
    }

    /// Parse the raw text as a base-10 floating point number.
    pub fn float(&self) -> Result<f64, FormError> {
        self.raw_value
            .parse::<f64>()
            .map_err(|e| FormError::conversion(self, "float", e))
    }

    /// Convert the input to a bool.
    ///
    /// Checkboxes and radio buttons report their checked flag and ignore the
    /// raw text. Every other kind must read exactly `true` or `false`.
    pub fn bool(&self) -> Result<bool, FormError> {
        if self.kind.is_checkable() {
            return Ok(self.checked);
        }
        self.raw_value
            .parse::<bool>()
            .map_err(|e| FormError::conversion(self, "bool", e))
    }

    /// Convert the input to a timestamp.
    ///
    /// `date` inputs use `YYYY-MM-DD` and `datetime-local` inputs use
    /// `YYYY-MM-DDTHH:MM:SS[.fraction]`; both are read as UTC. Every other
    /// kind must hold a full RFC 3339 timestamp.
    pub fn time(&self) -> Result<DateTime<FixedOffset>, FormError> {
        let naive = match self.kind {
            InputKind::Date => NaiveDate::parse_from_str(&self.raw_value, DATE_LAYOUT)
                .map(|date| date.and_time(NaiveTime::default())),
            InputKind::DateTimeLocal => {
                NaiveDateTime::parse_from_str(&self.raw_value, DATETIME_LOCAL_LAYOUT)
            }
            _ => {
                return DateTime::parse_from_rfc3339(&self.raw_value)
                    .map_err(|e| FormError::conversion(self, "time", e));
            }
        };
        naive
            .map(|naive| naive.and_utc().fixed_offset())
            .map_err(|e| FormError::conversion(self, "time", e))
    }

    /// Like [`Input::time`], normalised to UTC.
    pub fn utc_time(&self) -> Result<DateTime<Utc>, FormError> {
        self.time().map(|t| t.with_timezone(&Utc))
    }

    pub(crate) fn unsigned_digits(&self, target: &'static str) -> Result<&str, FormError> {
        match self.raw_value.chars().next() {
            Some(sign @ ('+' | '-')) => Err(FormError::conversion(
                self,
                target,
                format_args!("unexpected sign {sign:?}"),
            )),
            _ => Ok(&self.raw_value),
        }
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for InputKind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use strum::IntoEnumIterator;
        proptest::sample::select(InputKind::iter().collect::<Vec<_>>()).boxed()
    }
}
