//! YAML format adapter using serde_yaml

use std::sync::Arc;

use serde_yaml::Value as YamlValue;

use super::{environment_or_process, root_mapping};
use crate::adapter::ConfigAdapter;
use crate::env::Environment;
use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::{Mapping, Value};

/// Adapter for YAML configuration files
#[derive(Debug, Clone, Default)]
pub struct YamlAdapter {
    environment: Option<Arc<dyn Environment>>,
}

impl YamlAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve placeholders against `environment` instead of the process
    /// environment.
    pub fn with_environment(environment: impl Environment + 'static) -> Self {
        Self {
            environment: Some(Arc::new(environment)),
        }
    }
}

impl ConfigAdapter for YamlAdapter {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn decode(&self, source: &[u8]) -> Result<Mapping> {
        let label = Format::Yaml.label();
        let mut value: YamlValue =
            serde_yaml::from_slice(source).map_err(|e| Error::decode(label, e.to_string()))?;
        // `<<: *anchor` merge keys stay literal unless applied explicitly.
        value
            .apply_merge()
            .map_err(|e| Error::decode(label, e.to_string()))?;
        root_mapping(from_yaml(value)?, Format::Yaml)
    }

    fn environment(&self) -> &dyn Environment {
        environment_or_process(&self.environment)
    }
}

fn from_yaml(value: YamlValue) -> Result<Value> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::unsigned(u)
            } else {
                n.as_f64().map(Value::Float).unwrap_or(Value::Null)
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(map) => {
            let mut mapping = Mapping::new();
            for (key, value) in map {
                mapping.insert(key_to_string(key)?, from_yaml(value)?);
            }
            Value::Mapping(mapping)
        }
        YamlValue::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn key_to_string(key: YamlValue) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        other => Err(Error::decode(
            Format::Yaml.label(),
            format!("unsupported mapping key: {other:?}"),
        )),
    }
}
