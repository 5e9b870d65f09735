use crate::icons::IconRef;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Extensions (lowercase, without the dot) listed as images.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Folder,
    Image,
    Other,
}

impl EntryKind {
    pub fn classify(path: &Path, is_directory: bool) -> Self {
        if is_directory {
            return EntryKind::Folder;
        }
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            EntryKind::Image
        } else {
            EntryKind::Other
        }
    }

    /// Position of the kind in a listing; folders come first.
    fn rank(self) -> u8 {
        match self {
            EntryKind::Folder => 0,
            EntryKind::Image => 1,
            EntryKind::Other => 2,
        }
    }
}

/// One item of a listing. Rebuilt on every refresh, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub icon: IconRef,
}

impl Entry {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    pub fn is_image(&self) -> bool {
        self.kind == EntryKind::Image
    }

    /// File name without its extension, as shown in the image viewer.
    pub fn base_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }

    /// Listing order: folders before images, then case-insensitive name,
    /// then the exact name so the order never depends on enumeration.
    pub fn listing_order(a: &Entry, b: &Entry) -> Ordering {
        a.kind
            .rank()
            .cmp(&b.kind.rank())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    }
}

/// Name a renamed file should get when the user typed `typed`.
///
/// The viewer shows names without extension, so a typed name that has none
/// keeps the extension of `original`.
pub fn name_with_original_extension(typed: &str, original: &Path) -> String {
    let typed = typed.trim();
    let Some(original_ext) = original.extension() else {
        return typed.to_string();
    };
    if typed.is_empty() {
        return String::new();
    }
    // A dotted stem like "my.photo" does not count as carrying an extension
    let keeps_own = Path::new(typed).extension().is_some_and(|ext| {
        let ext = ext.to_string_lossy().to_lowercase();
        ext == original_ext.to_string_lossy().to_lowercase()
            || IMAGE_EXTENSIONS.contains(&ext.as_str())
    });
    if keeps_own {
        typed.to_string()
    } else {
        format!("{}.{}", typed, original_ext.to_string_lossy())
    }
}
