//! Format adapter trait

use std::path::Path;

use crate::container::Container;
use crate::env::{Environment, ProcessEnv};
use crate::error::Result;
use crate::format::Format;
use crate::handler::Handler;
use crate::loader;
use crate::value::Mapping;

/// A pluggable configuration format.
///
/// Implementors only decode bytes into a [`Mapping`]; reading files,
/// environment expansion and temp-file handling are provided.
pub trait ConfigAdapter: Send + Sync + std::fmt::Debug {
    /// Format identifier
    fn format(&self) -> Format;

    /// Decode raw bytes into the root mapping of a document.
    fn decode(&self, source: &[u8]) -> Result<Mapping>;

    /// Environment used to expand placeholders after decoding.
    fn environment(&self) -> &dyn Environment {
        &ProcessEnv
    }

    /// Load a configuration file.
    ///
    /// A missing or effectively empty file yields an empty configuration.
    fn reader(&self, filename: &Path) -> Result<Box<dyn Handler>> {
        let document = loader::read_document(self, filename)?;
        Ok(Box::new(Container::new(document)))
    }

    /// Load a configuration from raw bytes.
    ///
    /// The bytes are persisted to a fresh file under the system temp
    /// directory (see [`loader::temp_path`]) and then read back with
    /// [`ConfigAdapter::reader`]. The file is left in place.
    fn writer(&self, data: &[u8]) -> Result<Box<dyn Handler>> {
        let path = loader::write_temp(data)?;
        self.reader(&path)
    }
}
