//! Environment placeholder expansion
//!
//! A string value that is exactly `${NAME}` or `${NAME||default}` is replaced
//! by the environment variable `NAME`. `NAME` starts with an ASCII letter or
//! underscore and has at least one more ASCII word character. Placeholders
//! embedded in a longer string are not expanded.
//!
//! Resolution rules:
//!
//! - `${NAME||default}`: the variable if set and non-empty, otherwise the
//!   literal `default` text.
//! - `${NAME}`: the variable if set and non-empty, otherwise the placeholder
//!   text unchanged.
//!
//! # Examples
//!
//! ```
//! use pigeon_config::env::expand_string;
//! use std::collections::HashMap;
//!
//! let env = HashMap::from([("DB_HOST".to_string(), "db.internal".to_string())]);
//! assert_eq!(expand_string("${DB_HOST}", &env), "db.internal");
//! assert_eq!(expand_string("${DB_PORT||5432}", &env), "5432");
//! assert_eq!(expand_string("${DB_USER}", &env), "${DB_USER}");
//! assert_eq!(expand_string("host=${DB_HOST}", &env), "host=${DB_HOST}");
//! ```

use std::collections::HashMap;

use crate::value::{Mapping, Value};

/// Source of environment variables for placeholder expansion.
pub trait Environment: Send + Sync + std::fmt::Debug {
    /// Look up a variable. `None` means unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads variables from the process environment.
///
/// Variables whose value is not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// A parsed `${NAME}` / `${NAME||default}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder<'a> {
    name: &'a str,
    default: Option<&'a str>,
}

/// Match the whole of `s` against the placeholder grammar.
fn parse_placeholder(s: &str) -> Option<Placeholder<'_>> {
    let body = s.strip_prefix("${")?.strip_suffix('}')?;

    let (name, default) = match body.split_once("||") {
        Some((name, default)) => (name, Some(default)),
        None => (body, None),
    };

    if !is_variable_name(name) || default.is_some_and(|d| d.contains('}')) {
        return None;
    }

    Some(Placeholder { name, default })
}

fn is_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }

    let rest = chars.as_str();
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Expand a single string value.
pub fn expand_string<E: Environment + ?Sized>(s: &str, env: &E) -> String {
    let Some(placeholder) = parse_placeholder(s) else {
        return s.to_string();
    };

    if let Some(value) = env.var(placeholder.name).filter(|v| !v.is_empty()) {
        return value;
    }

    match placeholder.default {
        Some(default) => default.to_string(),
        None => {
            tracing::trace!(
                name = placeholder.name,
                "Environment variable unset, keeping placeholder"
            );
            s.to_string()
        }
    }
}

/// Expand every string leaf of a value, recursing through sequences and
/// mappings. Non-string scalars pass through unchanged.
pub fn expand_value<E: Environment + ?Sized>(value: Value, env: &E) -> Value {
    match value {
        Value::String(s) => Value::String(expand_string(&s, env)),
        Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| expand_value(item, env))
                .collect(),
        ),
        Value::Mapping(map) => Value::Mapping(expand_mapping(map, env)),
        other => other,
    }
}

/// Expand every value of a mapping, keeping its keys.
pub fn expand_mapping<E: Environment + ?Sized>(map: Mapping, env: &E) -> Mapping {
    map.into_iter()
        .map(|(key, value)| (key, expand_value(value, env)))
        .collect()
}
