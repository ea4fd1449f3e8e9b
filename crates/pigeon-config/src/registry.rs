//! Adapter registry
//!
//! Maps adapter names to [`ConfigAdapter`] implementations. A registry is
//! built once during start-up and then shared read-only with whatever needs
//! to load configuration.

use std::collections::HashMap;
use std::path::Path;

use crate::adapter::ConfigAdapter;
use crate::adapters::{JsonAdapter, TomlAdapter, YamlAdapter};
use crate::error::{Error, Result};
use crate::format::Format;
use crate::handler::Handler;

/// Registry mapping adapter names to adapters.
///
/// # Example
///
/// ```
/// use pigeon_config::{Error, Registry};
///
/// let registry = Registry::with_builtins();
/// assert!(registry.contains("yaml"));
///
/// let err = registry.new_config("ini", "app.ini").unwrap_err();
/// assert!(matches!(err, Error::UnknownAdapter(name) if name == "ini"));
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    adapters: HashMap<String, Box<dyn ConfigAdapter>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            adapters: HashMap::new(),
        }
    }

    /// Create a registry with the built-in adapters registered.
    ///
    /// Currently registers:
    /// - `yaml` -> [`YamlAdapter`]
    /// - `json` -> [`JsonAdapter`]
    /// - `toml` -> [`TomlAdapter`]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Format::Yaml.name(), YamlAdapter::new());
        registry.register(Format::Json.name(), JsonAdapter::new());
        registry.register(Format::Toml.name(), TomlAdapter::new());
        registry
    }

    /// Register an adapter under `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered. Registration belongs to
    /// start-up, so a duplicate is an initialization bug rather than a
    /// runtime condition. Use [`Registry::try_register`] to handle it.
    pub fn register(&mut self, name: impl Into<String>, adapter: impl ConfigAdapter + 'static) {
        if let Err(e) = self.try_register(name, adapter) {
            panic!("{e}");
        }
    }

    /// Register an adapter under `name`, failing on duplicates.
    pub fn try_register(
        &mut self,
        name: impl Into<String>,
        adapter: impl ConfigAdapter + 'static,
    ) -> Result<()> {
        let name = name.into();
        if self.adapters.contains_key(&name) {
            return Err(Error::DuplicateAdapter(name));
        }

        tracing::debug!(
            adapter = %name,
            format = adapter.format().name(),
            "Registered config adapter"
        );
        self.adapters.insert(name, Box::new(adapter));
        Ok(())
    }

    /// Get the adapter registered under `name`.
    pub fn adapter(&self, name: &str) -> Option<&dyn ConfigAdapter> {
        self.adapters.get(name).map(|adapter| &**adapter)
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.adapters.contains_key(name)
    }

    /// List registered adapter names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Load `filename` with the adapter registered under `adapter_name`.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownAdapter`] if no adapter has that name; otherwise
    /// whatever the adapter's reader returns.
    pub fn new_config(
        &self,
        adapter_name: &str,
        filename: impl AsRef<Path>,
    ) -> Result<Box<dyn Handler>> {
        self.lookup(adapter_name)?.reader(filename.as_ref())
    }

    /// Load raw bytes with the adapter registered under `adapter_name`.
    pub fn new_config_from_bytes(
        &self,
        adapter_name: &str,
        data: &[u8],
    ) -> Result<Box<dyn Handler>> {
        self.lookup(adapter_name)?.writer(data)
    }

    /// Load `filename` with the adapter named after its extension.
    ///
    /// `settings.yml` is read by the adapter registered as `yaml`,
    /// `settings.json` by `json` and so on.
    pub fn open(&self, filename: impl AsRef<Path>) -> Result<Box<dyn Handler>> {
        let path = filename.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let format =
            Format::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
                extension: extension.to_string(),
            })?;

        self.new_config(format.name(), path)
    }

    fn lookup(&self, adapter_name: &str) -> Result<&dyn ConfigAdapter> {
        self.adapter(adapter_name)
            .ok_or_else(|| Error::UnknownAdapter(adapter_name.to_string()))
    }
}
