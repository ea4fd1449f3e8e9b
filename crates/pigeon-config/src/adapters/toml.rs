//! TOML format adapter

use std::sync::Arc;

use super::environment_or_process;
use crate::adapter::ConfigAdapter;
use crate::env::Environment;
use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::{Mapping, Value};

/// Adapter for TOML configuration files
///
/// TOML datetimes have no counterpart in [`Value`] and are stored as their
/// string form.
#[derive(Debug, Clone, Default)]
pub struct TomlAdapter {
    environment: Option<Arc<dyn Environment>>,
}

impl TomlAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(environment: impl Environment + 'static) -> Self {
        Self {
            environment: Some(Arc::new(environment)),
        }
    }
}

impl ConfigAdapter for TomlAdapter {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn decode(&self, source: &[u8]) -> Result<Mapping> {
        let label = Format::Toml.label();
        let text =
            std::str::from_utf8(source).map_err(|e| Error::decode(label, e.to_string()))?;
        let table: ::toml::Table =
            ::toml::from_str(text).map_err(|e| Error::decode(label, e.to_string()))?;
        Ok(from_table(table))
    }

    fn environment(&self) -> &dyn Environment {
        environment_or_process(&self.environment)
    }
}

fn from_table(table: ::toml::Table) -> Mapping {
    table
        .into_iter()
        .map(|(key, value)| (key, from_toml(value)))
        .collect()
}

fn from_toml(value: ::toml::Value) -> Value {
    match value {
        ::toml::Value::String(s) => Value::String(s),
        ::toml::Value::Integer(i) => Value::integer(i),
        ::toml::Value::Float(f) => Value::Float(f),
        ::toml::Value::Boolean(b) => Value::Bool(b),
        ::toml::Value::Datetime(d) => Value::String(d.to_string()),
        ::toml::Value::Array(items) => {
            Value::Sequence(items.into_iter().map(from_toml).collect())
        }
        ::toml::Value::Table(table) => Value::Mapping(from_table(table)),
    }
}
