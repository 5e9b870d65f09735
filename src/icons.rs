// Icon resolution keyed by entry kind

use crate::config::IconConfig;
use crate::entry::EntryKind;
use std::path::PathBuf;

/// Icon shown next to an entry. Resolved once per listing.
#[derive(Clone, Debug, PartialEq)]
pub enum IconRef {
    /// A glyph rendered with the UI font.
    Glyph(&'static str),
    /// An image file loaded through the egui image loaders.
    File(PathBuf),
}

impl IconRef {
    /// URI for the egui image loaders, if this icon is a file.
    pub fn uri(&self) -> Option<String> {
        match self {
            IconRef::Glyph(_) => None,
            IconRef::File(path) => Some(format!("file://{}", path.display())),
        }
    }
}

pub trait IconResolver {
    fn resolve(&self, kind: EntryKind) -> IconRef;
}

/// Built-in glyphs with optional image-file overrides.
#[derive(Clone, Debug, Default)]
pub struct IconSet {
    folder: Option<PathBuf>,
    image: Option<PathBuf>,
}

impl IconSet {
    pub fn from_config(config: &IconConfig) -> Self {
        let usable = |path: &Option<PathBuf>| {
            path.as_ref().and_then(|p| {
                if p.is_file() {
                    Some(p.clone())
                } else {
                    log::warn!("Icon file {} not found, using built-in glyph", p.display());
                    None
                }
            })
        };
        Self {
            folder: usable(&config.folder),
            image: usable(&config.image),
        }
    }

    fn glyph(kind: EntryKind) -> &'static str {
        match kind {
            EntryKind::Folder => "📁",
            EntryKind::Image => "🖼",
            EntryKind::Other => "📄",
        }
    }
}

impl IconResolver for IconSet {
    fn resolve(&self, kind: EntryKind) -> IconRef {
        let override_path = match kind {
            EntryKind::Folder => self.folder.as_ref(),
            EntryKind::Image => self.image.as_ref(),
            EntryKind::Other => None,
        };
        match override_path {
            Some(path) => IconRef::File(path.clone()),
            None => IconRef::Glyph(Self::glyph(kind)),
        }
    }
}
