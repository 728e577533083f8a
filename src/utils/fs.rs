use crate::error::{GanfetchError, Result};
use std::path::{Path, PathBuf};

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|e| permission_aware(path, e))?;
    }
    Ok(())
}

pub fn remove_file(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|e| permission_aware(path, e))
}

/// Absolute form of `path`, resolving symlinks when the path exists.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        Ok(path.canonicalize()?)
    } else {
        Ok(std::path::absolute(path)?)
    }
}

fn permission_aware(path: &Path, error: std::io::Error) -> GanfetchError {
    match error.kind() {
        std::io::ErrorKind::PermissionDenied => GanfetchError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => GanfetchError::from(error),
    }
}
