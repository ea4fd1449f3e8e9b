//! Built-in format adapters

mod json;
mod toml;
mod yaml;

pub use self::json::JsonAdapter;
pub use self::toml::TomlAdapter;
pub use self::yaml::YamlAdapter;

use std::sync::Arc;

use crate::env::{Environment, ProcessEnv};
use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::{Mapping, Value};

/// The configured environment, or the process environment when none is set.
fn environment_or_process(environment: &Option<Arc<dyn Environment>>) -> &dyn Environment {
    match environment {
        Some(env) => env.as_ref(),
        None => &ProcessEnv,
    }
}

/// Accept a decoded root node as a document.
///
/// A null root (a document with no content) is an empty mapping; any other
/// non-mapping root is rejected.
fn root_mapping(value: Value, format: Format) -> Result<Mapping> {
    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(Error::decode(
            format.label(),
            format!("root must be a mapping, found {}", other.kind()),
        )),
    }
}
