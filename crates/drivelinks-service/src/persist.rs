//! Small JSON files on the local filesystem.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use drivelinks_core::error::{AppError, ErrorKind};

/// Read and parse a JSON file; a missing file reads as `None`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, AppError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read {}", path.display()),
                e,
            ));
        }
    };
    Ok(Some(serde_json::from_str(&data)?))
}

/// Serialize `value` to `path`, creating parent directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create parent directory: {}", parent.display()),
                e,
            )
        })?;
    }

    let data = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    std::fs::write(path, &data).map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to write {}", path.display()),
            e,
        )
    })?;

    debug!(path = %path.display(), bytes = data.len(), "Wrote JSON file");
    Ok(())
}

/// Delete a file; a missing file is not an error.
pub fn remove(path: &Path) -> Result<(), AppError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to delete {}", path.display()),
            e,
        )),
    }
}
