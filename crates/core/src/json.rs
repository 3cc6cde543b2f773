//! Optional deep reads over loosely shaped JSON records.
//!
//! Records from regulations.gov frequently omit fields, so every lookup here degrades to a
//! default instead of failing. Only a value that is present but has the wrong JSON type is
//! reported, as [`PathError::MalformedRecord`].

use crate::{PathError, PathResult};
use serde_json::Value;

pub(crate) static NULL: Value = Value::Null;

/// Walks `keys` from `json` and returns the value at the end of the path.
///
/// Returns `default` as soon as a key is missing or an intermediate value is not an object.
/// There is no partial matching: either the whole path exists or the default is returned.
pub fn get_nested<'a>(json: &'a Value, keys: &[&str], default: &'a Value) -> &'a Value {
    let mut subset = json;

    for key in keys {
        match subset.get(*key) {
            Some(next) => subset = next,
            None => return default,
        }
    }

    subset
}

/// Reads an optional string at `keys`.
///
/// Missing keys and JSON `null` both read as `None`.
///
/// # Errors
///
/// Returns `PathError::MalformedRecord` if the value exists but is not a string.
pub fn nested_str<'a>(json: &'a Value, keys: &[&str]) -> PathResult<Option<&'a str>> {
    match get_nested(json, keys, &NULL) {
        Value::Null => Ok(None),
        Value::String(value) => Ok(Some(value.as_str())),
        other => Err(PathError::MalformedRecord(format!(
            "`{}` must be a string, found {}",
            keys.join("."),
            type_name(other)
        ))),
    }
}

/// Whether `value` counts as empty when checking optional collections.
///
/// `null`, `false`, zero, and empty strings, arrays and objects are all falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_nested_walks_full_path() {
        let record = json!({"data": {"attributes": {"agencyId": "EPA"}}});
        let value = get_nested(&record, &["data", "attributes", "agencyId"], &NULL);
        assert_eq!(value, &json!("EPA"));
    }

    #[test]
    fn get_nested_returns_default_on_first_missing_key() {
        let record = json!({"data": {"id": "EPA-2020-0001"}});
        let default = json!("fallback");
        let value = get_nested(&record, &["data", "attributes", "agencyId"], &default);
        assert_eq!(value, &default);
    }

    #[test]
    fn get_nested_treats_scalar_intermediate_as_missing() {
        let record = json!({"data": {"attributes": "not-an-object"}});
        let value = get_nested(&record, &["data", "attributes", "docketId"], &NULL);
        assert!(value.is_null());
    }

    #[test]
    fn nested_str_maps_null_to_none() {
        let record = json!({"data": {"id": null}});
        assert_eq!(nested_str(&record, &["data", "id"]).expect("lookup"), None);
    }

    #[test]
    fn nested_str_rejects_non_string_values() {
        let record = json!({"data": {"id": 42}});
        let err = nested_str(&record, &["data", "id"]).expect_err("number id");
        match err {
            PathError::MalformedRecord(msg) => {
                assert!(msg.contains("data.id"));
                assert!(msg.contains("a number"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn falsy_values_match_python_truthiness() {
        for value in [
            json!(null),
            json!(false),
            json!(0),
            json!(""),
            json!([]),
            json!({}),
        ] {
            assert!(is_falsy(&value), "{value} should be falsy");
        }

        for value in [json!(true), json!(1), json!("null"), json!([{}]), json!({"a": 1})] {
            assert!(!is_falsy(&value), "{value} should be truthy");
        }
    }
}
