//! Decoded configuration document model
//!
//! Every format adapter decodes into the same closed [`Value`] tree, so path
//! resolution and environment expansion never need to know which format a
//! document came from.

use std::collections::BTreeMap;

/// A string-keyed mapping node. Key order carries no meaning.
pub type Mapping = BTreeMap<String, Value>;

/// A node in a decoded configuration document.
///
/// Integers are split by width: values that fit in 32 bits decode to
/// [`Value::Int`], wider ones to [`Value::Int64`]. Typed accessors never
/// widen one into the other.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Int64(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Classify a signed integer into `Int` or `Int64` by width.
    pub fn integer(n: i64) -> Self {
        match i32::try_from(n) {
            Ok(small) => Self::Int(small),
            Err(_) => Self::Int64(n),
        }
    }

    /// Classify an unsigned integer; values beyond `i64::MAX` become `Float`.
    pub fn unsigned(n: u64) -> Self {
        match i64::try_from(n) {
            Ok(signed) => Self::integer(signed),
            Err(_) => Self::Float(n as f64),
        }
    }

    /// Short name of the variant, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Int64(_) => "int64",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int64(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}
