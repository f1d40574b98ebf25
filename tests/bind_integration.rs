//! Integration tests for binding forms onto records

use chrono::{DateTime, FixedOffset, Utc};
use formbind::prelude::*;

fn text_form(inputs: &[(&str, &str)]) -> Form {
    inputs
        .iter()
        .map(|(name, value)| Input::text(*name, *value))
        .collect()
}

#[derive(Debug, Default, PartialEq)]
struct Everything {
    string: String,
    bytes: Vec<u8>,
    int: i32,
    int8: i8,
    int16: i16,
    int64: i64,
    uint: u32,
    uint8: u8,
    uint64: u64,
    float32: f32,
    float64: f64,
    flag: bool,
    when: Option<DateTime<FixedOffset>>,
}

record!(Everything {
    string,
    bytes,
    int,
    int8,
    int16,
    int64,
    uint,
    uint8,
    uint64,
    float32,
    float64,
    flag,
    when,
});

#[derive(Debug, Default, PartialEq)]
struct Optionals {
    string: Option<String>,
    bytes: Option<Vec<u8>>,
    int: Option<i32>,
    int8: Option<Option<i8>>,
    int16: Box<Option<i16>>,
    int64: Option<i64>,
    uint: Option<u32>,
    uint8: Option<u8>,
    uint64: Option<u64>,
    float32: Option<f32>,
    float64: Option<f64>,
    flag: Option<bool>,
    when: Option<Option<DateTime<FixedOffset>>>,
}

record!(Optionals {
    string,
    bytes,
    int,
    int8,
    int16,
    int64,
    uint,
    uint8,
    uint64,
    float32,
    float64,
    flag,
    when,
});

fn everything_form() -> Form {
    vec![
        Input::text("string", "foo"),
        Input::text("bytes", "bar"),
        Input::new("int", "-42", InputKind::Number),
        Input::new("INT8", "-8", InputKind::Number),
        Input::new("Int16", "16", InputKind::Number),
        Input::new("int64", "-9223372036854775808", InputKind::Number),
        Input::new("uint", "42", InputKind::Number),
        Input::new("uint8", "255", InputKind::Number),
        Input::new("uint64", "18446744073709551615", InputKind::Number),
        Input::new("float32", "1.25", InputKind::Number),
        Input::new("float64", "-2.5e10", InputKind::Number),
        Input::checkbox("flag", "", true),
        Input::new("when", "2015-06-30T10:11:12", InputKind::DateTimeLocal),
        Input::text("unrelated", "left alone"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn binds_every_supported_type() {
    let form = everything_form();
    let mut dest = Everything::default();
    form.bind(&mut dest).unwrap();

    assert_eq!(dest.string, "foo");
    assert_eq!(dest.bytes, b"bar");
    assert_eq!(dest.int, -42);
    assert_eq!(dest.int8, -8);
    assert_eq!(dest.int16, 16);
    assert_eq!(dest.int64, i64::MIN);
    assert_eq!(dest.uint, 42);
    assert_eq!(dest.uint8, u8::MAX);
    assert_eq!(dest.uint64, u64::MAX);
    assert_eq!(dest.float32, 1.25);
    assert_eq!(dest.float64, -2.5e10);
    assert!(dest.flag);
    assert_eq!(
        dest.when.map(|t| t.to_rfc3339()),
        Some("2015-06-30T10:11:12+00:00".to_string())
    );
}

#[test]
fn optional_fields_are_allocated_and_match_plain_binding() {
    let form = everything_form();
    let mut plain = Everything::default();
    let mut wrapped = Optionals::default();
    form.bind(&mut plain).unwrap();
    form.bind(&mut wrapped).unwrap();

    assert_eq!(wrapped.string.as_ref(), Some(&plain.string));
    assert_eq!(wrapped.bytes.as_ref(), Some(&plain.bytes));
    assert_eq!(wrapped.int, Some(plain.int));
    assert_eq!(wrapped.int8, Some(Some(plain.int8)));
    assert_eq!(*wrapped.int16, Some(plain.int16));
    assert_eq!(wrapped.int64, Some(plain.int64));
    assert_eq!(wrapped.uint, Some(plain.uint));
    assert_eq!(wrapped.uint8, Some(plain.uint8));
    assert_eq!(wrapped.uint64, Some(plain.uint64));
    assert_eq!(wrapped.float32, Some(plain.float32));
    assert_eq!(wrapped.float64, Some(plain.float64));
    assert_eq!(wrapped.flag, Some(plain.flag));
    assert_eq!(wrapped.when, Some(plain.when));
}

#[test]
fn unmatched_optionals_stay_unset() {
    let form = text_form(&[("string", "only this")]);
    let mut dest = Optionals::default();
    form.bind(&mut dest).unwrap();
    assert_eq!(dest.string.as_deref(), Some("only this"));
    assert_eq!(dest.int, None);
    assert_eq!(dest.when, None);
}

#[derive(Debug, Default, PartialEq)]
struct Doubled {
    int: i64,
    string: String,
}

impl Bind for Doubled {
    // The provided bind_form would report a type error for this.
    fn fields(&mut self) -> Option<Vec<Field<'_>>> {
        None
    }

    fn bind_form(&mut self, form: &Form) -> Result<(), BindError> {
        self.int = form.get_int("int")? + 1;
        self.string = format!("_{}", form.get_string("string")?);
        Ok(())
    }
}

#[test]
fn whole_form_override_replaces_field_binding() {
    let form = text_form(&[("int", "42"), ("string", "foo")]);
    let mut dest = Doubled::default();
    form.bind(&mut dest).unwrap();
    assert_eq!(
        dest,
        Doubled {
            int: 43,
            string: "_foo".to_string()
        }
    );
}

#[test]
fn whole_form_override_errors_are_returned_verbatim() {
    let form = text_form(&[("string", "foo")]);
    let err = form.bind(&mut Doubled::default()).unwrap_err();
    assert!(matches!(
        err,
        BindError::Form(FormError::InputNotFound { ref name }) if name == "int"
    ));
}

#[derive(Debug, Default, PartialEq)]
struct Name {
    first: String,
    last: String,
}

#[derive(Debug, thiserror::Error)]
#[error("expected first and last name, got {0:?}")]
struct BadName(String);

impl BindInput for Name {
    fn bind_input(&mut self, input: &Input) -> Result<(), BindError> {
        let (first, last) = input
            .raw_value()
            .split_once(' ')
            .ok_or_else(|| BindError::custom(BadName(input.raw_value().to_string())))?;
        self.first = first.to_string();
        self.last = last.to_string();
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq)]
struct Person {
    name: Name,
    nickname: Option<Name>,
    age: u8,
}

record!(Person { name, nickname, age });

#[test]
fn field_override_binds_alongside_default_conversion() {
    let form = text_form(&[("name", "Foo Bar"), ("nickname", "Fizz Buzz"), ("age", "30")]);
    let mut person = Person::default();
    form.bind(&mut person).unwrap();
    assert_eq!(
        person.name,
        Name {
            first: "Foo".to_string(),
            last: "Bar".to_string()
        }
    );
    assert_eq!(
        person.nickname,
        Some(Name {
            first: "Fizz".to_string(),
            last: "Buzz".to_string()
        })
    );
    assert_eq!(person.age, 30);
}

#[test]
fn field_override_errors_pass_through_untouched() {
    let form = text_form(&[("name", "Prince")]);
    let err = form.bind(&mut Person::default()).unwrap_err();
    assert_eq!(err.to_string(), "expected first and last name, got \"Prince\"");
    match err {
        BindError::Custom(inner) => assert!(inner.downcast_ref::<BadName>().is_some()),
        other => panic!("expected custom error, got {:?}", other),
    }
}

#[derive(Debug, Default)]
struct Pair {
    first: i32,
    second: i32,
    third: i32,
}

record!(Pair { first, second, third });

// A failing field stops the bind without undoing the fields before it.
#[test]
fn failed_bind_leaves_earlier_fields_bound() {
    let form = text_form(&[("first", "1"), ("second", "two"), ("third", "3")]);
    let mut pair = Pair::default();
    let err = form.bind(&mut pair).unwrap_err();

    assert!(matches!(
        err,
        BindError::Form(FormError::Conversion { ref name, .. }) if name == "second"
    ));
    assert_eq!(pair.first, 1);
    assert_eq!(pair.second, 0);
    assert_eq!(pair.third, 0);
}

#[derive(Debug, Default)]
struct Maybe {
    age: Option<i32>,
    nested: Option<Option<u8>>,
    when: Option<DateTime<FixedOffset>>,
}

record!(Maybe { age, nested, when });

#[test]
fn failed_optional_field_stays_unset() {
    for (name, value) in [("age", "abc"), ("nested", "300"), ("when", "bogus")] {
        let mut dest = Maybe::default();
        assert!(text_form(&[(name, value)]).bind(&mut dest).is_err());
        assert_eq!(dest.age, None);
        assert_eq!(dest.nested, None);
        assert_eq!(dest.when, None);
    }
}

#[test]
fn failed_optional_field_keeps_its_previous_value() {
    let mut dest = Maybe {
        age: Some(7),
        ..Maybe::default()
    };
    assert!(text_form(&[("age", "abc")]).bind(&mut dest).is_err());
    assert_eq!(dest.age, Some(7));
}

#[test]
fn utc_fields_normalise_offsets() {
    #[derive(Default)]
    struct Event {
        starts: DateTime<Utc>,
    }
    record!(Event { starts });

    let form = text_form(&[("starts", "2024-01-01T09:30:00+09:00")]);
    let mut event = Event::default();
    form.bind(&mut event).unwrap();
    assert_eq!(event.starts.to_rfc3339(), "2024-01-01T00:30:00+00:00");
}

#[test]
fn binding_from_a_urlencoded_body() {
    #[derive(Default)]
    struct Search {
        query: String,
        page: u32,
    }
    record!(Search { query, page });

    let form = Form::from_urlencoded("Query=rust+forms&page=2").unwrap();
    let mut search = Search::default();
    form.bind(&mut search).unwrap();
    assert_eq!(search.query, "rust forms");
    assert_eq!(search.page, 2);
}
