// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! String attribute ⇄ typed value codec.
//!
//! Attributes are strings; engine properties are numbers, booleans, strings
//! and nested expression arrays. A single prefix heuristic decides whether an
//! attribute holds a structured literal:
//!
//! - starts with an ASCII digit, `[`, `true` or `false` → parsed as JSON after
//!   turning every `'` into `"`;
//! - anything else → returned verbatim as a string.
//!
//! Encoding is the mirror image: strings pass through unquoted, everything
//! else is compact JSON with `"` turned into `'` so embedded string literals
//! never collide with markup attribute quoting.
//!
//! The heuristic misreads plain strings that happen to start with one of the
//! prefixes (`"42nd Street"` is decoded as a malformed number). That is the
//! documented contract, not something this module guards against.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while decoding an attribute.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The attribute looked structured but is not valid JSON after quote
    /// normalisation.
    #[error("malformed structured attribute {raw:?}: {source}")]
    Malformed {
        /// Raw attribute text.
        raw: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// `true` when `raw` is treated as a structured literal.
pub fn is_structured(raw: &str) -> bool {
    raw.starts_with(|c: char| c.is_ascii_digit())
        || raw.starts_with('[')
        || raw.starts_with("true")
        || raw.starts_with("false")
}

/// Decode a present attribute value.
pub fn decode(raw: &str) -> Result<Value, CodecError> {
    if !is_structured(raw) {
        return Ok(Value::String(raw.to_owned()));
    }
    serde_json::from_str(&raw.replace('\'', "\"")).map_err(|source| CodecError::Malformed {
        raw: raw.to_owned(),
        source,
    })
}

/// Decode an attribute read; an absent attribute decodes to `null`.
///
/// Default policy for absent attributes belongs to the caller.
pub fn decode_attribute(raw: Option<&str>) -> Result<Value, CodecError> {
    raw.map_or(Ok(Value::Null), decode)
}

/// Encode a value into its attribute form.
pub fn encode(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string().replace('"', "'"),
    }
}

/// Shortest decimal text for a number, without a trailing `.0` for integral
/// values (`12`, `2.25`, `-0.5`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if value == 0.0 {
        // -0 prints as 0 in markup.
        return "0".to_owned();
    }
    format!("{value}")
}

/// `circle-radius` → `circleRadius`.
pub fn kebab_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (index, word) in name.split('-').enumerate() {
        if index == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn decode_numbers() {
        assert_eq!(decode("1").unwrap(), json!(1));
        assert_eq!(decode("0").unwrap(), json!(0));
        assert_eq!(decode("234").unwrap(), json!(234));
        assert_eq!(decode("12.375").unwrap(), json!(12.375));
    }

    #[test]
    fn decode_booleans() {
        assert_eq!(decode("true").unwrap(), json!(true));
        assert_eq!(decode("false").unwrap(), json!(false));
    }

    #[test]
    fn decode_arrays() {
        assert_eq!(decode("[1,true]").unwrap(), json!([1, true]));
        assert_eq!(
            decode(r#"["true",'blah']"#).unwrap(),
            json!(["true", "blah"]),
            "single quoted strings"
        );
        assert_eq!(
            decode(r#"["foo",[4, [true]]]"#).unwrap(),
            json!(["foo", [4, [true]]]),
            "nested arrays"
        );
    }

    #[test]
    fn decode_plain_strings_verbatim() {
        assert_eq!(decode("visible").unwrap(), json!("visible"));
        assert_eq!(decode("#000000").unwrap(), json!("#000000"));
        assert_eq!(decode("").unwrap(), json!(""));
        assert_eq!(decode("null").unwrap(), json!("null"));
    }

    #[test]
    fn decode_absent_is_null() {
        assert_eq!(decode_attribute(None).unwrap(), Value::Null);
        assert_eq!(decode_attribute(Some("5")).unwrap(), json!(5));
    }

    #[test]
    fn decode_malformed_structured_fails() {
        let err = decode("42nd Street").unwrap_err();
        assert!(matches!(err, CodecError::Malformed { ref raw, .. } if raw == "42nd Street"));
        assert!(decode("[1,").is_err());
    }

    #[test]
    fn encode_strings_unchanged() {
        assert_eq!(encode(&json!("foo bar")), "foo bar");
        assert_eq!(encode(&json!("it's")), "it's");
    }

    #[test]
    fn encode_scalars() {
        assert_eq!(encode(&json!(true)), "true");
        assert_eq!(encode(&json!(false)), "false");
        assert_eq!(encode(&json!(0)), "0");
        assert_eq!(encode(&json!(12)), "12");
        assert_eq!(encode(&json!(12.375)), "12.375");
    }

    #[test]
    fn encode_arrays_single_quoted() {
        assert_eq!(encode(&json!([4, true])), "[4,true]");
        assert_eq!(encode(&json!(["foo", "bar"])), "['foo','bar']");
        assert_eq!(
            encode(&json!(["foo", ["bar", [false, 4, "hello"]]])),
            "['foo',['bar',[false,4,'hello']]]"
        );
    }

    #[test]
    fn format_number_matches_markup_text() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(2.25), "2.25");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn kebab_to_camel_cases() {
        assert_eq!(kebab_to_camel("circle-radius"), "circleRadius");
        assert_eq!(kebab_to_camel("circle"), "circle");
        assert_eq!(
            kebab_to_camel("fill-extrusion-vertical-gradient"),
            "fillExtrusionVerticalGradient"
        );
    }
}
