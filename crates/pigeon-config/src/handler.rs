//! Typed accessor contract shared by every loaded configuration

use crate::error::Result;
use crate::value::Value;

/// Read access to a loaded configuration document.
///
/// Keys are dot-separated paths (see [`crate::path`]). Typed accessors are
/// total: a missing key, an unreadable terminal value or a value of a
/// different variant all return the supplied default. There is no numeric
/// widening and no string parsing, so `int("port", 0)` on a stored `"8080"`
/// string returns `0`.
///
/// [`Handler::set`] is deliberately flat: it writes a top-level key and never
/// walks the path, while reads are hierarchical. `set("server.port", "80")`
/// creates a top-level key literally named `server.port`, which no dotted
/// read can reach.
///
/// Implementors provide [`Handler::set`] and [`Handler::get`]; the typed
/// accessors are built on `get`.
pub trait Handler: Send + Sync + std::fmt::Debug {
    /// Store `value` as a string under the top-level `key`, replacing any
    /// value or subtree previously stored there.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Resolve `key` to a readable value.
    ///
    /// Fails with [`crate::Error::EmptyKey`] for an empty key and
    /// [`crate::Error::KeyNotFound`] when resolution misses.
    fn get(&self, key: &str) -> Result<Value>;

    fn string(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Ok(Value::String(s)) => s,
            _ => default.to_string(),
        }
    }

    /// Read a string and split it on `;`.
    fn strings(&self, key: &str, default: Vec<String>) -> Vec<String> {
        match self.get(key) {
            Ok(Value::String(s)) => s.split(';').map(str::to_string).collect(),
            _ => default,
        }
    }

    fn int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Ok(Value::Int(n)) => n,
            _ => default,
        }
    }

    fn int64(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Ok(Value::Int64(n)) => n,
            _ => default,
        }
    }

    fn bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Ok(Value::Bool(b)) => b,
            _ => default,
        }
    }

    fn float(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Ok(Value::Float(f)) => f,
            _ => default,
        }
    }

    fn slice(&self, key: &str, default: Vec<Value>) -> Vec<Value> {
        match self.get(key) {
            Ok(Value::Sequence(items)) => items,
            _ => default,
        }
    }
}
