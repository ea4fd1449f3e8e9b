//! In-memory configuration container

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{Error, Result};
use crate::handler::Handler;
use crate::path::{parse_path, resolve_from};
use crate::value::{Mapping, Value};

/// A loaded document plus a flat override layer.
///
/// The decoded document is never mutated. [`Handler::set`] records overrides
/// in a separate top-level map behind a lock; reads check that map for the
/// first path segment before falling back to the document, so an override
/// shadows the whole subtree stored under the same top-level key.
#[derive(Debug, Default)]
pub struct Container {
    document: Mapping,
    overrides: RwLock<HashMap<String, String>>,
}

impl Container {
    /// Wrap an already decoded and expanded document.
    pub fn new(document: Mapping) -> Self {
        Self {
            document,
            overrides: RwLock::new(HashMap::new()),
        }
    }

    /// The document as loaded, without overrides.
    pub fn document(&self) -> &Mapping {
        &self.document
    }

    /// Number of top-level overrides recorded with `set`.
    pub fn override_count(&self) -> usize {
        self.read_overrides().len()
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        let segments = parse_path(key);
        let (first, rest) = segments.split_first()?;

        if let Some(raw) = self.read_overrides().get(*first) {
            let overridden = Value::String(raw.clone());
            return resolve_from(&overridden, rest).cloned();
        }

        resolve_from(self.document.get(*first)?, rest).cloned()
    }

    // The override map holds plain strings, so a writer panicking mid-insert
    // cannot leave it inconsistent.
    fn read_overrides(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.overrides.read().unwrap_or_else(|poisoned| {
            tracing::warn!("Override lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_overrides(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.overrides.write().unwrap_or_else(|poisoned| {
            tracing::warn!("Override lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl From<Mapping> for Container {
    fn from(document: Mapping) -> Self {
        Self::new(document)
    }
}

impl Handler for Container {
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write_overrides()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Value> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        self.lookup(key).ok_or_else(|| Error::KeyNotFound {
            key: key.to_string(),
        })
    }
}
