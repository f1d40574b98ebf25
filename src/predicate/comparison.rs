//! Comparison predicates with their default validation messages
//!
//! Each comparison knows how to describe a failure for a named field, which is
//! where the validation chain's default messages come from.

use std::fmt;

use super::combinators::Predicate;

/// A comparison limit that can be rendered into a message.
///
/// Integers render plainly, floats with six decimals (`10.000000`).
pub trait Limit: PartialOrd + Copy {
    /// Render the limit for a message.
    fn render(&self) -> String;
}

impl Limit for i64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Limit for f64 {
    fn render(&self) -> String {
        format!("{:.6}", self)
    }
}

/// A predicate that can explain its failure for a field.
pub trait Describe {
    /// The default message for `field` failing this predicate.
    fn describe(&self, field: &str) -> String;
}

macro_rules! comparison {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $op:tt, $phrase:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct $name<T>(pub T);

        impl<T: Limit> Predicate<T> for $name<T> {
            #[inline]
            fn check(&self, value: &T) -> bool {
                *value $op self.0
            }
        }

        impl<T: Limit> Describe for $name<T> {
            fn describe(&self, field: &str) -> String {
                format!(concat!("{} must be ", $phrase, " {}."), field, self.0.render())
            }
        }

        #[doc = concat!("Shorthand for [`", stringify!($name), "`].")]
        pub fn $ctor<T: Limit>(limit: T) -> $name<T> {
            $name(limit)
        }
    };
}

comparison!(
    /// Value is strictly less than the limit.
    Lt, lt, <, "less than"
);
comparison!(
    /// Value is less than or equal to the limit.
    Le, le, <=, "less than or equal to"
);
comparison!(
    /// Value is strictly greater than the limit.
    Gt, gt, >, "greater than"
);
comparison!(
    /// Value is greater than or equal to the limit.
    Ge, ge, >=, "greater than or equal to"
);

/// Value lies in `min..=max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: Limit> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

impl<T: Limit> Describe for Between<T> {
    fn describe(&self, field: &str) -> String {
        format!(
            "{} must be between {} and {}.",
            field,
            self.min.render(),
            self.max.render()
        )
    }
}

/// Value lies in `min..=max`.
pub fn between<T: Limit>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

impl<T: Limit + fmt::Display> fmt::Display for Between<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
