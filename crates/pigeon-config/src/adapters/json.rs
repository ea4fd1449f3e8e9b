//! JSON format adapter

use std::sync::Arc;

use serde_json::Value as JsonValue;

use super::{environment_or_process, root_mapping};
use crate::adapter::ConfigAdapter;
use crate::env::Environment;
use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::{Mapping, Value};

/// Adapter for JSON configuration files
#[derive(Debug, Clone, Default)]
pub struct JsonAdapter {
    environment: Option<Arc<dyn Environment>>,
}

impl JsonAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(environment: impl Environment + 'static) -> Self {
        Self {
            environment: Some(Arc::new(environment)),
        }
    }
}

impl ConfigAdapter for JsonAdapter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn decode(&self, source: &[u8]) -> Result<Mapping> {
        let value: JsonValue = serde_json::from_slice(source)
            .map_err(|e| Error::decode(Format::Json.label(), e.to_string()))?;
        root_mapping(from_json(value), Format::Json)
    }

    fn environment(&self) -> &dyn Environment {
        environment_or_process(&self.environment)
    }
}

fn from_json(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::integer(i)
            } else if let Some(u) = n.as_u64() {
                Value::unsigned(u)
            } else {
                n.as_f64().map(Value::Float).unwrap_or(Value::Null)
            }
        }
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Sequence(items.into_iter().map(from_json).collect()),
        JsonValue::Object(map) => Value::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}
