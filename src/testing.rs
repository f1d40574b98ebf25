//! Assertion helpers for tests that validate forms
//!
//! # Example
//!
//! ```rust
//! use formbind::{assert_form_errors, assert_no_form_errors, Form, Input};
//!
//! let mut form: Form = vec![Input::text("age", "7")].into_iter().collect();
//! form.validate("age").greater_or_equal(0);
//! assert_no_form_errors!(form);
//!
//! form.validate("age").greater(10);
//! form.validate("name").required();
//! assert_form_errors!(form, ["age must be greater than 10.", "name is required."]);
//! ```

/// Assert that a form has recorded no errors.
///
/// Panics with the recorded messages otherwise.
#[macro_export]
macro_rules! assert_no_form_errors {
    ($form:expr) => {{
        let errors = $crate::Form::errors(&$form);
        if !errors.is_empty() {
            let messages: ::std::vec::Vec<::std::string::String> =
                errors.iter().map(|e| e.to_string()).collect();
            panic!("Expected no form errors, got: {:?}", messages);
        }
    }};
}

/// Assert that a form recorded exactly these messages, in order.
#[macro_export]
macro_rules! assert_form_errors {
    ($form:expr, $expected:expr) => {{
        let messages: ::std::vec::Vec<::std::string::String> = $crate::Form::errors(&$form)
            .iter()
            .map(|e| e.to_string())
            .collect();
        let expected: ::std::vec::Vec<::std::string::String> = ::std::iter::IntoIterator::into_iter($expected)
            .map(|m| ::std::string::ToString::to_string(&m))
            .collect();
        assert_eq!(messages, expected, "form errors did not match");
    }};
}
