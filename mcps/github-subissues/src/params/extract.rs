//! Field extraction from loosely typed tool arguments
//!
//! Tool arguments arrive as arbitrary JSON. These helpers turn one field at
//! a time into a concrete value, producing the caller-facing messages the
//! tools report back (`missing required parameter: owner`, ...).
//!
//! A required field counts as missing when it is absent, `null`, an empty
//! string, or zero. GitHub never hands out zero as an issue number or id.

use serde_json::Value;
use thiserror::Error;

/// A parameter failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("missing required parameter: {0}")]
    Missing(&'static str),

    #[error("parameter {name} is not of type {expected}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
    },

    #[error("parameter {0} is not a valid non-negative integer")]
    NotAnInteger(&'static str),
}

/// Required, non-empty string
pub fn required_string(value: Option<&Value>, name: &'static str) -> Result<String, ParamError> {
    match value {
        None | Some(Value::Null) => Err(ParamError::Missing(name)),
        Some(Value::String(s)) if s.is_empty() => Err(ParamError::Missing(name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ParamError::WrongType {
            name,
            expected: "string",
        }),
    }
}

/// Required, non-zero integer
pub fn required_u64(value: Option<&Value>, name: &'static str) -> Result<u64, ParamError> {
    match optional_u64(value, name)? {
        None | Some(0) => Err(ParamError::Missing(name)),
        Some(n) => Ok(n),
    }
}

/// Optional integer; `None` only when the field is absent or `null`
pub fn optional_u64(value: Option<&Value>, name: &'static str) -> Result<Option<u64>, ParamError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => as_u64(n)
            .map(Some)
            .ok_or(ParamError::NotAnInteger(name)),
        Some(_) => Err(ParamError::WrongType {
            name,
            expected: "number",
        }),
    }
}

/// Optional boolean
pub fn optional_bool(
    value: Option<&Value>,
    name: &'static str,
) -> Result<Option<bool>, ParamError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(ParamError::WrongType {
            name,
            expected: "boolean",
        }),
    }
}

// MCP clients frequently send integral floats (42.0) for numeric arguments.
fn as_u64(n: &serde_json::Number) -> Option<u64> {
    if let Some(v) = n.as_u64() {
        return Some(v);
    }
    let f = n.as_f64()?;
    if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 {
        Some(f as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_string() {
        assert_eq!(
            required_string(Some(&json!("owner")), "owner").unwrap(),
            "owner"
        );
        assert_eq!(
            required_string(None, "owner"),
            Err(ParamError::Missing("owner"))
        );
        assert_eq!(
            required_string(Some(&json!("")), "owner"),
            Err(ParamError::Missing("owner"))
        );
        assert_eq!(
            required_string(Some(&Value::Null), "repo"),
            Err(ParamError::Missing("repo"))
        );
    }

    #[test]
    fn test_required_string_wrong_type() {
        let err = required_string(Some(&json!(12)), "repo").unwrap_err();
        assert_eq!(err.to_string(), "parameter repo is not of type string");
    }

    #[test]
    fn test_required_u64() {
        assert_eq!(required_u64(Some(&json!(42)), "issue_number").unwrap(), 42);
        assert_eq!(required_u64(Some(&json!(42.0)), "issue_number").unwrap(), 42);
        assert_eq!(
            required_u64(Some(&json!(0)), "issue_number").unwrap_err().to_string(),
            "missing required parameter: issue_number"
        );
        assert_eq!(
            required_u64(None, "sub_issue_id").unwrap_err().to_string(),
            "missing required parameter: sub_issue_id"
        );
    }

    #[test]
    fn test_required_u64_rejects_bad_numbers() {
        assert_eq!(
            required_u64(Some(&json!("42")), "issue_number"),
            Err(ParamError::WrongType {
                name: "issue_number",
                expected: "number"
            })
        );
        assert_eq!(
            required_u64(Some(&json!(-1)), "issue_number"),
            Err(ParamError::NotAnInteger("issue_number"))
        );
        assert_eq!(
            required_u64(Some(&json!(4.5)), "issue_number"),
            Err(ParamError::NotAnInteger("issue_number"))
        );
    }

    #[test]
    fn test_optional_u64_keeps_explicit_zero() {
        assert_eq!(optional_u64(None, "after_id").unwrap(), None);
        assert_eq!(optional_u64(Some(&Value::Null), "after_id").unwrap(), None);
        assert_eq!(optional_u64(Some(&json!(0)), "after_id").unwrap(), Some(0));
        assert_eq!(optional_u64(Some(&json!(102)), "after_id").unwrap(), Some(102));
    }

    #[test]
    fn test_optional_bool() {
        assert_eq!(optional_bool(None, "replace_parent").unwrap(), None);
        assert_eq!(
            optional_bool(Some(&json!(true)), "replace_parent").unwrap(),
            Some(true)
        );
        assert!(optional_bool(Some(&json!("yes")), "replace_parent").is_err());
    }
}
