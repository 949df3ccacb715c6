//! Shape validation for outbound parameter sets.
//!
//! Every check works on a [`Params`] map and either passes or returns the
//! first failure. Fields nobody asks about are left alone and reach the
//! server untouched.

use crate::errors::{Casino25Error, Casino25Result};
use chrono::DateTime;
use serde_json::{Map, Value};
use std::fmt;

/// Named parameters sent with a remote call.
pub type Params = Map<String, Value>;

/// Secondary check run after a field passed its type check.
pub type Refinement<'a> = &'a dyn Fn(&Params, &str) -> Casino25Result<()>;

/// Primitive type a parameter is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    /// Unix seconds, or an RFC 3339 string.
    Timestamp,
    StringList,
    List,
}

impl ParamType {
    /// Whether `value` has this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Integer => value.is_i64() || value.is_u64(),
            ParamType::Timestamp => match value {
                Value::String(s) => DateTime::parse_from_rfc3339(s).is_ok(),
                other => other.is_i64() || other.is_u64(),
            },
            ParamType::StringList => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            ParamType::List => value.is_array(),
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ParamType::String => "a string",
            ParamType::Integer => "an integer",
            ParamType::Timestamp => "a timestamp",
            ParamType::StringList => "an array of strings",
            ParamType::List => "an array",
        };
        f.write_str(description)
    }
}

/// Fails if `key` is absent, otherwise checks its type and runs `refine`.
pub fn required_param(
    params: &Params,
    key: &str,
    ty: ParamType,
    refine: Option<Refinement<'_>>,
) -> Casino25Result<()> {
    if !params.contains_key(key) {
        return Err(Casino25Error::missing_parameter(key));
    }

    check_type(params, key, ty)?;

    if let Some(refine) = refine {
        refine(params, key)?;
    }

    Ok(())
}

/// Like [`required_param`], but an absent `key` passes.
pub fn optional_param(
    params: &Params,
    key: &str,
    ty: ParamType,
    refine: Option<Refinement<'_>>,
) -> Casino25Result<()> {
    if !params.contains_key(key) {
        return Ok(());
    }

    check_type(params, key, ty)?;

    if let Some(refine) = refine {
        refine(params, key)?;
    }

    Ok(())
}

/// Checks the stored value of `key` against `expected`. An absent key passes.
pub fn check_type(params: &Params, key: &str, expected: ParamType) -> Casino25Result<()> {
    match params.get(key) {
        Some(value) if !expected.matches(value) => {
            Err(Casino25Error::invalid_type(key, expected))
        }
        _ => Ok(()),
    }
}

/// The value of `key` must be a string equal to one of `allowed`.
///
/// Comparison is strict: `"open"` does not match `"Open"` and the number `1`
/// does not match `"1"`.
pub fn strict_values(params: &Params, key: &str, allowed: &[&str]) -> Casino25Result<()> {
    let permitted = params
        .get(key)
        .and_then(Value::as_str)
        .is_some_and(|value| allowed.contains(&value));

    if !permitted {
        return Err(Casino25Error::invalid_value(key, allowed));
    }

    Ok(())
}
