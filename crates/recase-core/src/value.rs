use crate::error::{RecaseError, Result};
use crate::CaseStyle;
use serde_json::Value;
use tracing::{debug, warn};

/// Classification of a dynamically-typed input at the conversion boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified<'a> {
    /// The undefined sentinel (`None`) or JSON `null`.
    Absent,
    Text(&'a str),
    Invalid {
        type_name: &'static str,
        rendered: String,
    },
}

pub fn classify(value: Option<&Value>) -> Classified<'_> {
    match value {
        None | Some(Value::Null) => Classified::Absent,
        Some(Value::String(s)) => Classified::Text(s),
        Some(other) => Classified::Invalid {
            type_name: json_type_name(other),
            rendered: other.to_string(),
        },
    }
}

pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert a dynamically-typed value, validating it at the boundary.
///
/// Absent input (undefined or null) resolves to an empty string; any other
/// non-string value fails with [`RecaseError::InvalidInputType`].
pub fn convert_value(value: Option<&Value>, style: CaseStyle) -> Result<String> {
    match classify(value) {
        Classified::Absent => {
            let sentinel = if value.is_none() { "undefined" } else { "null" };
            warn!("Received {} input, returning empty string", sentinel);
            Ok(String::new())
        }
        Classified::Text(text) => {
            debug!("Converting {:?} to {}", text, style);
            Ok(crate::convert(text, style))
        }
        Classified::Invalid { type_name, rendered } => Err(RecaseError::InvalidInputType {
            type_name: type_name.to_string(),
            rendered,
        }),
    }
}

pub fn kebab_case_value(value: Option<&Value>) -> Result<String> {
    convert_value(value, CaseStyle::Kebab)
}

pub fn camel_case_value(value: Option<&Value>) -> Result<String> {
    convert_value(value, CaseStyle::Camel)
}

pub fn dot_case_value(value: Option<&Value>) -> Result<String> {
    convert_value(value, CaseStyle::Dot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_absent() {
        assert_eq!(classify(None), Classified::Absent);
        assert_eq!(classify(Some(&Value::Null)), Classified::Absent);
    }

    #[test]
    fn test_classify_text() {
        let value = json!("hello");
        assert_eq!(classify(Some(&value)), Classified::Text("hello"));
    }

    #[test]
    fn test_classify_invalid_carries_type_and_rendering() {
        let value = json!({"a": 1});
        match classify(Some(&value)) {
            Classified::Invalid { type_name, rendered } => {
                assert_eq!(type_name, "object");
                assert_eq!(rendered, r#"{"a":1}"#);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_json_type_names() {
        assert_eq!(json_type_name(&json!(true)), "boolean");
        assert_eq!(json_type_name(&json!(1.5)), "number");
        assert_eq!(json_type_name(&json!([1])), "array");
        assert_eq!(json_type_name(&json!("s")), "string");
        assert_eq!(json_type_name(&Value::Null), "null");
    }
}
