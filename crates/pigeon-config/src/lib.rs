//! Pluggable configuration loading
//!
//! Decodes YAML, JSON or TOML files into a common document tree, expands
//! `${NAME}` / `${NAME||default}` environment placeholders once at load time,
//! and exposes typed, default-returning accessors over dot-separated key
//! paths.
//!
//! ```
//! use pigeon_config::{ConfigAdapter, Handler, YamlAdapter};
//! use std::collections::HashMap;
//!
//! let env = HashMap::from([("APP_PORT".to_string(), "9000".to_string())]);
//! let adapter = YamlAdapter::with_environment(env);
//! let config = adapter.writer(b"server:\n  port: ${APP_PORT}\n  workers: 4\n").unwrap();
//!
//! assert_eq!(config.string("server.port", ""), "9000");
//! assert_eq!(config.int("server.workers", 1), 4);
//! assert_eq!(config.int("server.port", 0), 0);
//! ```

pub mod adapter;
pub mod adapters;
pub mod container;
pub mod env;
pub mod error;
pub mod format;
pub mod handler;
pub mod loader;
pub mod logging;
pub mod path;
pub mod registry;
pub mod value;

pub use adapter::ConfigAdapter;
pub use adapters::{JsonAdapter, TomlAdapter, YamlAdapter};
pub use container::Container;
pub use env::{Environment, ProcessEnv};
pub use error::{Error, Result};
pub use format::Format;
pub use handler::Handler;
pub use registry::Registry;
pub use value::{Mapping, Value};
