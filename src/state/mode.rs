use crate::entry::Entry;
use chrono::{DateTime, Local};
use std::fs;
use std::time::SystemTime;

#[derive(Debug, PartialEq, Clone)]
pub enum AppMode {
    Normal,
    Help,
    Viewer(ViewerState),
}

/// Image popup: the entry on display and the name being edited.
#[derive(Debug, PartialEq, Clone)]
pub struct ViewerState {
    pub entry: Entry,
    pub name_buffer: String,
    pub focus_input: bool,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl ViewerState {
    pub fn new(entry: Entry) -> Self {
        let name_buffer = entry.base_name();
        let metadata = fs::metadata(&entry.path).ok();
        Self {
            name_buffer,
            focus_input: true,
            size: metadata.as_ref().map(|m| m.len()).unwrap_or(0),
            modified: metadata.and_then(|m| m.modified().ok()),
            entry,
        }
    }

    /// Size and modification time, e.g. "12.3 KB | 2024-03-09 07:05".
    pub fn details(&self) -> String {
        let size = bytesize::ByteSize(self.size).to_string();
        match self.modified {
            Some(modified) => {
                let datetime: DateTime<Local> = modified.into();
                format!("{} | {}", size, datetime.format("%Y-%m-%d %H:%M"))
            }
            None => size,
        }
    }

    pub fn image_uri(&self) -> String {
        format!("file://{}", self.entry.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;
    use crate::icons::IconRef;
    use std::path::PathBuf;

    #[test]
    fn test_viewer_starts_with_base_name() {
        let viewer = ViewerState::new(Entry {
            name: "selfie_20240309070501.png".to_string(),
            path: PathBuf::from("/pics/selfie_20240309070501.png"),
            kind: EntryKind::Image,
            icon: IconRef::Glyph("🖼"),
        });
        assert_eq!(viewer.name_buffer, "selfie_20240309070501");
        assert_eq!(viewer.image_uri(), "file:///pics/selfie_20240309070501.png");
        assert!(viewer.focus_input);
        assert_eq!(viewer.size, 0);
        assert!(viewer.modified.is_none());
    }

    #[test]
    fn test_viewer_reads_file_details() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        std::fs::write(&path, [0u8; 2048]).unwrap();

        let viewer = ViewerState::new(Entry {
            name: "shot.png".to_string(),
            path,
            kind: EntryKind::Image,
            icon: IconRef::Glyph("🖼"),
        });
        assert_eq!(viewer.size, 2048);
        assert!(viewer.modified.is_some());
        assert!(viewer.details().contains(" | "));
    }
}
