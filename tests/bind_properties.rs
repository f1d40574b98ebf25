//! Property-based tests for conversions, binding and validation

use formbind::{record, Form, Input, InputKind};
use proptest::prelude::*;

#[derive(Debug, Default)]
struct Widths {
    i8: i8,
    i16: i16,
    i32: i32,
    i64: i64,
    u8: u8,
    u16: u16,
    u32: u32,
    u64: u64,
    f32: f32,
    f64: f64,
    text: String,
}

record!(Widths { i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, text });

#[derive(Debug, Default)]
struct Wrapped {
    i16: Option<i16>,
    u64: Option<Option<u64>>,
    f64: Box<Option<f64>>,
}

record!(Wrapped { i16, u64, f64 });

fn single(name: &str, value: String) -> Form {
    vec![Input::new(name, value, InputKind::Number)]
        .into_iter()
        .collect()
}

proptest! {
    #[test]
    fn prop_signed_round_trip(a in any::<i8>(), b in any::<i16>(), c in any::<i32>(), d in any::<i64>()) {
        let form: Form = vec![
            Input::text("i8", a.to_string()),
            Input::text("i16", b.to_string()),
            Input::text("i32", c.to_string()),
            Input::text("i64", d.to_string()),
        ].into_iter().collect();
        let mut dest = Widths::default();
        form.bind(&mut dest).unwrap();
        prop_assert_eq!(dest.i8, a);
        prop_assert_eq!(dest.i16, b);
        prop_assert_eq!(dest.i32, c);
        prop_assert_eq!(dest.i64, d);
    }

    #[test]
    fn prop_unsigned_round_trip(a in any::<u8>(), b in any::<u16>(), c in any::<u32>(), d in any::<u64>()) {
        let form: Form = vec![
            Input::text("u8", a.to_string()),
            Input::text("u16", b.to_string()),
            Input::text("u32", c.to_string()),
            Input::text("u64", d.to_string()),
        ].into_iter().collect();
        let mut dest = Widths::default();
        form.bind(&mut dest).unwrap();
        prop_assert_eq!(dest.u8, a);
        prop_assert_eq!(dest.u16, b);
        prop_assert_eq!(dest.u32, c);
        prop_assert_eq!(dest.u64, d);
    }

    #[test]
    fn prop_float_round_trip(a in any::<i16>().prop_map(|n| f32::from(n) / 8.0),
                             b in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let form: Form = vec![
            Input::text("f32", a.to_string()),
            Input::text("f64", b.to_string()),
        ].into_iter().collect();
        let mut dest = Widths::default();
        form.bind(&mut dest).unwrap();
        prop_assert_eq!(dest.f32, a);
        prop_assert_eq!(dest.f64, b);
    }

    #[test]
    fn prop_text_is_verbatim(s in ".*") {
        let form: Form = vec![Input::text("TEXT", s.clone())].into_iter().collect();
        let mut dest = Widths::default();
        form.bind(&mut dest).unwrap();
        prop_assert_eq!(dest.text, s);
    }

    #[test]
    fn prop_out_of_range_never_truncates(v in (i8::MAX as i64 + 1)..=i64::MAX) {
        let mut dest = Widths::default();
        prop_assert!(single("i8", v.to_string()).bind(&mut dest).is_err());
        prop_assert_eq!(dest.i8, 0);
    }

    #[test]
    fn prop_negative_never_binds_unsigned(v in i64::MIN..0) {
        let mut dest = Widths::default();
        prop_assert!(single("u32", v.to_string()).bind(&mut dest).is_err());
    }

    #[test]
    fn prop_wrapped_equals_plain(a in any::<i16>(), b in any::<u64>(), c in -1.0e6f64..1.0e6) {
        let form: Form = vec![
            Input::text("i16", a.to_string()),
            Input::text("u64", b.to_string()),
            Input::text("f64", c.to_string()),
        ].into_iter().collect();
        let mut plain = Widths::default();
        let mut wrapped = Wrapped::default();
        form.bind(&mut plain).unwrap();
        form.bind(&mut wrapped).unwrap();
        prop_assert_eq!(wrapped.i16, Some(plain.i16));
        prop_assert_eq!(wrapped.u64, Some(Some(plain.u64)));
        prop_assert_eq!(*wrapped.f64, Some(plain.f64));
    }

    #[test]
    fn prop_getters_are_idempotent(raw in "-?[0-9]{0,20}|[a-z]{1,5}") {
        let form = single("x", raw);
        prop_assert_eq!(form.get_int("x"), form.get_int("x"));
        prop_assert_eq!(form.get_uint("x"), form.get_uint("x"));
        prop_assert_eq!(form.get_string("x"), form.get_string("x"));
    }

    #[test]
    fn prop_checkbox_is_always_bool(raw in ".*", checked in any::<bool>()) {
        let mut form: Form = vec![Input::checkbox("c", raw, checked)].into_iter().collect();
        prop_assert_eq!(form.get_bool("c"), Ok(checked));
        form.validate("c").is_bool();
        prop_assert!(!form.has_errors());
    }

    #[test]
    fn prop_skip_rule_on_empty(limit in any::<i64>(), flimit in -1.0e9f64..1.0e9) {
        let mut form = single("e", String::new());
        form.validate("e")
            .less(limit)
            .greater(limit)
            .less_float(flimit)
            .greater_float(flimit)
            .is_int()
            .is_float()
            .is_bool();
        form.validate("absent").less_or_equal(limit).greater_or_equal(limit);
        prop_assert!(!form.has_errors());
    }

    #[test]
    fn prop_less_agrees_with_comparison(value in any::<i64>(), limit in any::<i64>()) {
        let mut form = single("n", value.to_string());
        form.validate("n").less(limit);
        prop_assert_eq!(form.has_errors(), value >= limit);
    }
}
