use crate::error::{FetchError, Result};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(FetchError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    std::fs::create_dir_all(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => FetchError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => FetchError::CreateDirectory {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// Best-effort removal of a file left behind by a failed write.
pub fn remove_partial_file(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => log::debug!("Removed partial file {path:?}"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => log::warn!("Could not remove partial file {path:?}: {e}"),
    }
}
