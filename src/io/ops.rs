use crate::error::NavError;
use std::fs;
use std::path::{Path, PathBuf};

/// Renames `path` to `new_name` inside the same parent folder.
///
/// An existing destination is never overwritten. Renaming to the current
/// name succeeds without touching the filesystem.
pub fn rename_entry(path: &Path, new_name: &str) -> Result<PathBuf, NavError> {
    let new_name = new_name.trim();
    if new_name.is_empty()
        || new_name == "."
        || new_name == ".."
        || new_name.contains('/')
        || new_name.contains(std::path::MAIN_SEPARATOR)
    {
        return Err(NavError::InvalidName(new_name.to_string()));
    }

    // symlink_metadata so a dangling link can still be renamed
    if fs::symlink_metadata(path).is_err() {
        return Err(NavError::NotFound(path.to_path_buf()));
    }

    let parent = path
        .parent()
        .ok_or_else(|| NavError::NotFound(path.to_path_buf()))?;
    let new_path = parent.join(new_name);

    if new_path == path {
        return Ok(new_path);
    }
    if fs::symlink_metadata(&new_path).is_ok() {
        return Err(NavError::MoveConflict(new_path));
    }

    fs::rename(path, &new_path).map_err(|source| NavError::RenameFailed {
        from: path.to_path_buf(),
        to: new_path.clone(),
        source,
    })?;
    log::info!("Renamed {} to {}", path.display(), new_path.display());
    Ok(new_path)
}
