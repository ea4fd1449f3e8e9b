//! File plumbing shared by all adapters

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::adapter::ConfigAdapter;
use crate::env::expand_mapping;
use crate::error::{Error, Result};
use crate::value::Mapping;

/// Directory under the system temp dir that receives writer files
pub const TEMP_SUBDIR: &str = "pigeon";

/// Read, decode and expand a configuration file.
///
/// A missing file, or one holding only whitespace, produces an empty
/// document without calling the decoder.
pub fn read_document<A>(adapter: &A, path: &Path) -> Result<Mapping>
where
    A: ConfigAdapter + ?Sized,
{
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(?path, "Config file not found, using empty document");
            return Ok(Mapping::new());
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    if is_effectively_empty(&bytes) {
        tracing::debug!(?path, len = bytes.len(), "Config file is empty, skipping decode");
        return Ok(Mapping::new());
    }

    let document = adapter.decode(&bytes)?;
    tracing::debug!(
        ?path,
        format = adapter.format().name(),
        keys = document.len(),
        "Decoded config"
    );

    Ok(expand_mapping(document, adapter.environment()))
}

fn is_effectively_empty(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// Path for the next writer file: `<temp>/pigeon/<nanosecond timestamp>`.
///
/// Two calls within the same nanosecond collide.
pub fn temp_path() -> PathBuf {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    std::env::temp_dir()
        .join(TEMP_SUBDIR)
        .join(nanos.to_string())
}

/// Persist `data` to a fresh [`temp_path`] and return that path.
pub fn write_temp(data: &[u8]) -> Result<PathBuf> {
    let path = temp_path();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }

    let mut file = options.open(&path).map_err(|e| Error::io(&path, e))?;
    file.write_all(data).map_err(|e| Error::io(&path, e))?;

    tracing::debug!(?path, len = data.len(), "Wrote config to temp file");
    Ok(path)
}
