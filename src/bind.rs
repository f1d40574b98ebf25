//! Binding form inputs onto typed records
//!
//! [`Form::bind`] copies the values of a form onto a record in one pass. The
//! destination decides how it is bound through two capabilities:
//!
//! - [`Bind`] is implemented by the destination itself. Its provided
//!   [`bind_form`](Bind::bind_form) walks the fields the record exposes through
//!   [`fields`](Bind::fields) and binds each one from the input whose name
//!   matches case-insensitively. Overriding `bind_form` takes over the whole
//!   form instead.
//! - [`BindInput`] is implemented by field types. The crate implements it for
//!   strings, byte vectors, every integer and float width, `bool`, chrono
//!   timestamps, and `Option`/`Box` around any of those. Implement it on your
//!   own type to bind a field from one input however you like.
//!
//! The [`record!`](crate::record) macro writes the `Bind` impl for a plain
//! struct.
//!
//! # Example
//!
//! ```rust
//! use formbind::{record, Form, Input, InputKind};
//!
//! #[derive(Debug, Default)]
//! struct Signup {
//!     name: String,
//!     age: u8,
//!     newsletter: bool,
//!     referrer: Option<String>,
//! }
//!
//! record!(Signup { name, age, newsletter, referrer });
//!
//! let form: Form = vec![
//!     Input::text("Name", "Ada"),
//!     Input::new("age", "36", InputKind::Number),
//!     Input::checkbox("newsletter", "on", true),
//!     Input::text("utm_source", "ignored"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mut signup = Signup::default();
//! form.bind(&mut signup).unwrap();
//!
//! assert_eq!(signup.name, "Ada");
//! assert_eq!(signup.age, 36);
//! assert!(signup.newsletter);
//! assert_eq!(signup.referrer, None);
//! ```
//!
//! # Failure
//!
//! Binding stops at the first field that fails. Fields bound before it keep
//! their new values; nothing is rolled back.

use chrono::{DateTime, FixedOffset, Utc};

use crate::error::{BindError, FormError};
use crate::form::Form;
use crate::input::Input;

/// The "bind the whole form" capability of a destination.
///
/// Plain records only implement [`fields`](Bind::fields), usually through the
/// [`record!`](crate::record) macro. A type that needs to derive its state
/// from several inputs at once overrides [`bind_form`](Bind::bind_form).
///
/// # Example
///
/// ```rust
/// use formbind::{Bind, BindError, Form, Input};
///
/// #[derive(Default)]
/// struct Range {
///     span: i64,
/// }
///
/// impl Bind for Range {
///     fn bind_form(&mut self, form: &Form) -> Result<(), BindError> {
///         self.span = form.get_int("to")? - form.get_int("from")?;
///         Ok(())
///     }
/// }
///
/// let form: Form = vec![Input::text("from", "3"), Input::text("to", "10")]
///     .into_iter()
///     .collect();
/// let mut range = Range::default();
/// form.bind(&mut range).unwrap();
/// assert_eq!(range.span, 7);
/// ```
pub trait Bind {
    /// The named fields of this record, in declaration order.
    ///
    /// Returns `None` for types that are not records, which is the default.
    fn fields(&mut self) -> Option<Vec<Field<'_>>> {
        None
    }

    /// Bind the form onto `self`.
    ///
    /// The provided implementation binds each field from [`fields`](Bind::fields)
    /// with [`Form::bind_fields`], and fails with [`BindError::Type`] when the
    /// type exposes no fields.
    fn bind_form(&mut self, form: &Form) -> Result<(), BindError> {
        match self.fields() {
            Some(fields) => form.bind_fields(fields),
            None => Err(BindError::Type {
                type_name: std::any::type_name::<Self>(),
            }),
        }
    }
}

/// The "bind one input" capability of a field type.
///
/// The provided method reports [`BindError::UnsupportedType`], so a type can
/// be listed as a record field before it knows how to bind itself.
///
/// # Example
///
/// ```rust
/// use formbind::{record, BindError, BindInput, Form, Input};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Tags(Vec<String>);
///
/// impl BindInput for Tags {
///     fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
///         self.0 = input.raw_value().split(',').map(|t| t.trim().to_string()).collect();
///         Ok(())
///     }
/// }
///
/// #[derive(Default)]
/// struct Post {
///     tags: Tags,
/// }
///
/// record!(Post { tags });
///
/// let form: Form = vec![Input::text("tags", "rust, forms")].into_iter().collect();
/// let mut post = Post::default();
/// form.bind(&mut post).unwrap();
/// assert_eq!(post.tags, Tags(vec!["rust".into(), "forms".into()]));
/// ```
pub trait BindInput {
    /// Overwrite `self` with the value of `input`.
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        Err(BindError::unsupported::<Self>(input))
    }
}

/// A named, bindable field of a record.
pub struct Field<'a> {
    name: &'a str,
    slot: &'a mut dyn BindInput,
}

impl<'a> Field<'a> {
    /// Pair a field name with the field it binds into.
    pub fn new(name: &'a str, slot: &'a mut dyn BindInput) -> Self {
        Field { name, slot }
    }

    /// The name matched against input names.
    pub fn name(&self) -> &str {
        self.name
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish_non_exhaustive()
    }
}

impl Form {
    /// Bind this form onto `dest`.
    ///
    /// This is a one-way, one-time copy: later changes to either side are not
    /// reflected in the other. See the [module docs](crate::bind) for the rules.
    pub fn bind<T: Bind + ?Sized>(&self, dest: &mut T) -> Result<(), BindError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(dest = std::any::type_name::<T>(), inputs = self.len(), "binding form");
        dest.bind_form(self)
    }

    /// Bind each field from the first input whose name matches the field name
    /// case-insensitively.
    ///
    /// Fields without an input and inputs without a field are skipped. The
    /// first failing field aborts the walk.
    pub fn bind_fields<'a>(
        &self,
        fields: impl IntoIterator<Item = Field<'a>>,
    ) -> Result<(), BindError> {
        for Field { name, slot } in fields {
            let Some(input) = self.find_folded(name) else {
                #[cfg(feature = "tracing")]
                tracing::trace!(field = name, "no input for field");
                continue;
            };
            #[cfg(feature = "tracing")]
            tracing::debug!(field = name, input = input.name(), kind = %input.kind(), "binding field");
            slot.bind_input(input)?;
        }
        Ok(())
    }

    fn find_folded(&self, name: &str) -> Option<&Input> {
        self.inputs().find(|input| names_match(input.name(), name))
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

// An empty layer is only filled once its inner value has bound.
impl<T: BindInput + Default> BindInput for Option<T> {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        match self {
            Some(value) => value.bind_input(input),
            None => {
                let mut value = T::default();
                value.bind_input(input)?;
                *self = Some(value);
                Ok(())
            }
        }
    }
}

impl<T: BindInput + ?Sized> BindInput for Box<T> {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        (**self).bind_input(input)
    }
}

impl BindInput for String {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        input.raw_value().clone_into(self);
        Ok(())
    }
}

impl BindInput for Vec<u8> {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        *self = input.raw_value().as_bytes().to_vec();
        Ok(())
    }
}

macro_rules! bind_narrowed {
    ($via:ident => $($ty:ty),+) => {
        $(
            impl BindInput for $ty {
                fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
                    let wide = input.$via()?;
                    *self = <$ty>::try_from(wide)
                        .map_err(|e| FormError::conversion(input, stringify!($ty), e))?;
                    Ok(())
                }
            }
        )+
    };
}

bind_narrowed!(int => i8, i16, i32, i64, isize);
bind_narrowed!(uint => u8, u16, u32, u64, usize);

impl BindInput for i128 {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        *self = input
            .raw_value()
            .parse()
            .map_err(|e| FormError::conversion(input, "i128", e))?;
        Ok(())
    }
}

impl BindInput for u128 {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        *self = input
            .unsigned_digits("u128")?
            .parse()
            .map_err(|e| FormError::conversion(input, "u128", e))?;
        Ok(())
    }
}

impl BindInput for f64 {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        *self = input.float()?;
        Ok(())
    }
}

impl BindInput for f32 {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        *self = input.float()? as f32;
        Ok(())
    }
}

impl BindInput for bool {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        *self = input.bool()?;
        Ok(())
    }
}

impl BindInput for DateTime<FixedOffset> {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        *self = input.time()?;
        Ok(())
    }
}

impl BindInput for DateTime<Utc> {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        *self = input.utc_time()?;
        Ok(())
    }
}

/// Implement [`Bind`] for a plain struct by listing the fields to bind.
///
/// Each field is matched against input names case-insensitively using its
/// identifier. Use `field as "name"` when the input name differs, e.g. for
/// camelCase inputs. Fields left out of the list are never touched.
///
/// ```rust
/// use formbind::{record, Form, Input};
///
/// #[derive(Default)]
/// struct Person {
///     first_name: String,
///     age: Option<u32>,
/// }
///
/// record!(Person { first_name as "firstName", age });
///
/// let form: Form = vec![Input::text("firstName", "Grace"), Input::text("age", "85")]
///     .into_iter()
///     .collect();
/// let mut person = Person::default();
/// form.bind(&mut person).unwrap();
/// assert_eq!(person.first_name, "Grace");
/// assert_eq!(person.age, Some(85));
/// ```
#[macro_export]
macro_rules! record {
    (@name $field:ident) => {
        ::std::stringify!($field)
    };
    (@name $field:ident as $alias:literal) => {
        $alias
    };
    ($ty:ty { $($field:ident $(as $alias:literal)?),* $(,)? }) => {
        impl $crate::Bind for $ty {
            fn fields(&mut self) -> ::std::option::Option<::std::vec::Vec<$crate::Field<'_>>> {
                ::std::option::Option::Some(::std::vec![
                    $(
                        $crate::Field::new(
                            $crate::record!(@name $field $(as $alias)?),
                            &mut self.$field,
                        )
                    ),*
                ])
            }
        }
    };
}
