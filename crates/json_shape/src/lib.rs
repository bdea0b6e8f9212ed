//! JSON text helpers.
//!
//! `stringify` writes any `Serialize` value as compact JSON. `parse` reads JSON
//! text into a generic [`Value`] first and then binds it to a typed shape by
//! copying the fields the shape declares, so the shape's methods can be called
//! on the result. Unknown fields are ignored; missing or mistyped ones fail.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{from_str, from_value, to_string, to_string_pretty};

pub use serde_json::{Error, Map, Value};

/// Error surfaced by the JSON parser, unchanged.
pub type ParseError = Error;

/// Serialize `value` as compact JSON.
///
/// Struct fields are written in declaration order and map entries in
/// iteration order; no whitespace is added.
///
/// # Errors
/// Returns an error if `value` cannot be represented as JSON, for example a
/// map whose keys are not strings.
#[inline]
pub fn stringify<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    to_string(value)
}

/// Serialize `value` as indented JSON.
///
/// # Errors
/// Same as [`stringify`].
#[inline]
pub fn stringify_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    to_string_pretty(value)
}

/// Parse JSON text into a generic structured value.
///
/// # Errors
/// Returns the parser's error if `text` is not valid JSON.
pub fn parse_value(text: &str) -> Result<Value, ParseError> {
    from_str(text).inspect_err(|err| {
        debug!(
            target: "json_shape",
            "invalid JSON at line {} column {}: {err}",
            err.line(),
            err.column()
        );
    })
}

/// Bind a parsed value to the shape `S`.
///
/// # Errors
/// Returns an error if a field `S` requires is missing or has the wrong type.
pub fn bind<S: DeserializeOwned>(value: Value) -> Result<S, ParseError> {
    from_value(value).inspect_err(|err| {
        debug!(target: "json_shape", "value does not fit shape: {err}");
    })
}

/// Parse JSON text and bind it to the shape `S`.
///
/// No partial result is returned: either the whole text parses and binds, or
/// the error is returned.
///
/// # Errors
/// Returns the parser's error for malformed text, or the binding error from
/// [`bind`].
#[inline]
pub fn parse<S: DeserializeOwned>(text: &str) -> Result<S, ParseError> {
    bind(parse_value(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::error::Category;
    use serde_json::json;

    #[test]
    fn stringify_is_compact_and_keeps_insertion_order() -> Result<(), Error> {
        let value = json!({ "zeta": 1, "alpha": [true, null], "mid": "text" });
        assert_eq!(
            stringify(&value)?,
            r#"{"zeta":1,"alpha":[true,null],"mid":"text"}"#
        );
        Ok(())
    }

    #[test]
    fn parse_value_keeps_key_order() -> Result<(), Error> {
        let value = parse_value(r#"{"b": 2, "a": 1}"#)?;
        let keys: Vec<&str> = value
            .as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, ["b", "a"]);
        Ok(())
    }

    #[test]
    fn malformed_text_is_a_syntax_error() {
        let result = parse_value("{\"a\": }");
        assert_eq!(result.map_err(|err| err.classify()), Err(Category::Syntax));
        let truncated = parse_value("[1, 2");
        assert_eq!(truncated.map_err(|err| err.classify()), Err(Category::Eof));
    }

    #[test]
    fn pretty_output_is_indented() -> Result<(), Error> {
        let text = stringify_pretty(&json!({ "a": 1 }))?;
        assert_eq!(text, "{\n  \"a\": 1\n}");
        Ok(())
    }
}
