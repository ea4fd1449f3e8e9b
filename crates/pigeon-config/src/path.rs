//! Dot-separated key path resolution
//!
//! Paths address a location in a decoded document by repeated mapping
//! lookup: `server.http.port` reads `port` from the `http` mapping inside the
//! top-level `server` mapping.
//!
//! # Examples
//!
//! ```
//! use pigeon_config::path::{parse_path, resolve};
//! use pigeon_config::{Mapping, Value};
//!
//! let mut http = Mapping::new();
//! http.insert("port".to_string(), Value::Int(8080));
//! let mut root = Mapping::new();
//! root.insert("http".to_string(), Value::Mapping(http));
//!
//! assert_eq!(parse_path("http.port"), vec!["http", "port"]);
//! assert_eq!(resolve("http.port", &root), Some(&Value::Int(8080)));
//! assert_eq!(resolve("http", &root), None);
//! ```

use crate::value::{Mapping, Value};

/// Split a path into its segments.
///
/// An empty path has no segments. Empty segments (`a..b`) are kept as-is and
/// only match a literally empty key.
pub fn parse_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').collect()
}

/// Resolve a path against the root mapping of a document.
///
/// Returns `None` when the path is empty, when any intermediate segment is
/// missing or is not a mapping, or when the terminal value is not readable
/// (see [`resolve_from`]).
pub fn resolve<'a>(path: &str, root: &'a Mapping) -> Option<&'a Value> {
    let segments = parse_path(path);
    let (first, rest) = segments.split_first()?;
    resolve_from(root.get(*first)?, rest)
}

/// Continue resolution from an already looked-up node.
///
/// `value` is the node the previous segment pointed to and `rest` are the
/// segments still to walk. With nothing left to walk, `value` is terminal and
/// is returned only if it is a non-empty string, a number, a boolean or a
/// sequence. Null, mapping and empty-string terminals read as absent.
pub fn resolve_from<'a>(value: &'a Value, rest: &[&str]) -> Option<&'a Value> {
    let Some((next, rest)) = rest.split_first() else {
        return terminal(value);
    };

    match value {
        Value::Mapping(map) => resolve_from(map.get(*next)?, rest),
        _ => None,
    }
}

fn terminal(value: &Value) -> Option<&Value> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::Bool(_)
        | Value::Int(_)
        | Value::Int64(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Sequence(_) => Some(value),
        Value::Null | Value::Mapping(_) => None,
    }
}
