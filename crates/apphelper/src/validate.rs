//! Rule-based model validation.
//!
//! Rules are written as pipe-delimited strings, each rule optionally carrying
//! colon-delimited, comma-separated arguments:
//!
//! ```
//! use serde_json::json;
//!
//! let model = json!({ "username": "alice", "age": 30 });
//! apphelper::validate(&model, &[
//!     ("username", "notEmpty|len:3,16"),
//!     ("age", "numeric|min:18"),
//! ]).unwrap();
//! ```
//!
//! Validation stops at the first unsatisfied rule and reports the field and
//! rule in the error message.

use std::sync::OnceLock;

use serde_json::Value;

use crate::error::{HelperError, HelperResult};

/// Validate `model` against per-field rule strings.
///
/// Fields are checked in the order given; within a field, rules run left to
/// right. Returns the first failure as [`HelperError::Validation`], an
/// unrecognized rule name as [`HelperError::UnknownRule`], and a malformed
/// rule argument as [`HelperError::RuleArgument`].
pub fn validate(model: &Value, rules: &[(&str, &str)]) -> HelperResult<()> {
    for (field, rule_spec) in rules {
        let value = model.get(field);

        for rule in rule_spec.split('|').filter(|r| !r.is_empty()) {
            let (name, args) = match rule.split_once(':') {
                Some((name, args)) => (name, Some(args)),
                None => (rule, None),
            };

            if !check_rule(name, args, value)? {
                return Err(HelperError::validation(format!(
                    "Field \"{}\" did not satisfy rule: \"{}\"",
                    field,
                    rule.replace(':', " ")
                )));
            }
        }
    }

    Ok(())
}

fn check_rule(name: &str, args: Option<&str>, value: Option<&Value>) -> HelperResult<bool> {
    match name {
        "notEmpty" => Ok(is_not_empty(value)),
        "numeric" => Ok(numeric_value(value).is_some()),
        "integer" => Ok(integer_value(value).is_some()),
        "min" => {
            let min = numeric_arg(name, args)?;
            Ok(numeric_value(value).is_some_and(|n| n >= min))
        }
        "max" => {
            let max = numeric_arg(name, args)?;
            Ok(numeric_value(value).is_some_and(|n| n <= max))
        }
        "len" => {
            let (min, max) = len_args(args)?;
            let Some(len) = value.and_then(Value::as_str).map(|s| s.chars().count()) else {
                return Ok(false);
            };
            Ok(len >= min && max.is_none_or(|max| len <= max))
        }
        "email" => Ok(value.and_then(Value::as_str).is_some_and(is_email)),
        "url" => Ok(value
            .and_then(Value::as_str)
            .is_some_and(|s| url::Url::parse(s).is_ok())),
        other => Err(HelperError::UnknownRule(other.to_string())),
    }
}

/// Present, non-null, and (for strings and arrays) non-empty.
fn is_not_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(_) => true,
    }
}

/// A JSON number, or a string that parses as one.
fn numeric_value(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn integer_value(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn numeric_arg(rule: &str, args: Option<&str>) -> HelperResult<f64> {
    let raw = args.ok_or_else(|| HelperError::rule_argument(rule, "missing argument"))?;
    raw.trim()
        .parse()
        .map_err(|_| HelperError::rule_argument(rule, format!("not a number: {raw:?}")))
}

fn len_args(args: Option<&str>) -> HelperResult<(usize, Option<usize>)> {
    let raw = args.ok_or_else(|| HelperError::rule_argument("len", "missing argument"))?;
    let mut parts = raw.splitn(2, ',');

    let min = parts
        .next()
        .unwrap_or_default()
        .trim()
        .parse()
        .map_err(|_| HelperError::rule_argument("len", format!("bad minimum in {raw:?}")))?;

    let max = match parts.next() {
        Some(part) => Some(
            part.trim()
                .parse()
                .map_err(|_| HelperError::rule_argument("len", format!("bad maximum in {raw:?}")))?,
        ),
        None => None,
    };

    Ok((min, max))
}

/// Best-effort email validation.
///
/// This is intentionally not fully RFC-compliant; stricter checks belong to
/// the caller.
fn is_email(s: &str) -> bool {
    static EMAIL_RE: OnceLock<regex::Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| {
            regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid built-in email regex")
        })
        .is_match(s)
}
