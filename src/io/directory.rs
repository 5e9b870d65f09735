use crate::entry::{Entry, EntryKind};
use crate::error::NavError;
use crate::icons::IconResolver;
use std::fs;
use std::path::{Path, PathBuf};

/// One directory item as reported by a [`FileSystemReader`].
#[derive(Clone, Debug, PartialEq)]
pub struct RawEntry {
    pub name: String,
    pub full_path: PathBuf,
    pub is_directory: bool,
}

pub trait FileSystemReader {
    fn list_entries(&self, path: &Path) -> Result<Vec<RawEntry>, NavError>;
}

/// Reads directories straight from the local filesystem.
#[derive(Clone, Copy, Debug)]
pub struct LocalFileSystem {
    pub show_hidden: bool,
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self { show_hidden: true }
    }
}

impl FileSystemReader for LocalFileSystem {
    fn list_entries(&self, path: &Path) -> Result<Vec<RawEntry>, NavError> {
        let unavailable = |source| NavError::DirectoryUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let read_dir = fs::read_dir(path).map_err(unavailable)?;

        let mut entries = Vec::new();
        for entry in read_dir.flatten() {
            let full_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            if !self.show_hidden && name.starts_with('.') {
                continue;
            }
            // Follow symlinks so a link to a folder lists as a folder
            let is_directory = match fs::metadata(&full_path) {
                Ok(metadata) => metadata.is_dir(),
                Err(_) => match entry.file_type() {
                    Ok(file_type) => file_type.is_dir(),
                    Err(e) => {
                        log::debug!("Skipping {}: {}", full_path.display(), e);
                        continue;
                    }
                },
            };
            entries.push(RawEntry {
                name,
                full_path,
                is_directory,
            });
        }
        Ok(entries)
    }
}

/// Turns raw entries into a listing: folders and images only, folders first.
pub fn build_listing(raw: Vec<RawEntry>, icons: &dyn IconResolver) -> Vec<Entry> {
    let mut entries: Vec<Entry> = raw
        .into_iter()
        .filter_map(|raw| {
            let kind = EntryKind::classify(&raw.full_path, raw.is_directory);
            if kind == EntryKind::Other {
                return None;
            }
            Some(Entry {
                name: raw.name,
                path: raw.full_path,
                kind,
                icon: icons.resolve(kind),
            })
        })
        .collect();
    entries.sort_by(Entry::listing_order);
    entries
}
