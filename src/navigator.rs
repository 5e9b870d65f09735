//! Folder navigation: back/forward history plus filtered directory listings.
//!
//! The primitive operations (`navigate_to`, `go_back`, `go_forward`) only touch
//! history. The `open*` operations list the target first and move history
//! only when the listing succeeded, so a folder that cannot be read never
//! becomes the current one.

use crate::entry::Entry;
use crate::error::NavError;
use crate::icons::{IconResolver, IconSet};
use crate::io::{build_listing, rename_entry, FileSystemReader, LocalFileSystem};
use crate::state::FolderHistory;
use std::path::{Path, PathBuf};

pub struct Navigator<R: FileSystemReader = LocalFileSystem> {
    history: FolderHistory,
    reader: R,
    icons: Box<dyn IconResolver>,
}

impl<R: FileSystemReader> Navigator<R> {
    pub fn new(reader: R, icons: Box<dyn IconResolver>) -> Self {
        Self {
            history: FolderHistory::new(),
            reader,
            icons,
        }
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn navigate_to(&mut self, path: impl Into<PathBuf>) -> Result<(), NavError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(NavError::InvalidPath);
        }
        log::debug!("Navigate to {}", path.display());
        self.history.push(path);
        Ok(())
    }

    pub fn go_back(&mut self) -> Result<PathBuf, NavError> {
        self.history
            .go_back()
            .map(Path::to_path_buf)
            .ok_or(NavError::NoHistory)
    }

    pub fn go_forward(&mut self) -> Result<PathBuf, NavError> {
        self.history
            .go_forward()
            .map(Path::to_path_buf)
            .ok_or(NavError::NoHistory)
    }

    pub fn current_folder(&self) -> Option<&Path> {
        self.history.current()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn list(&self, folder: &Path) -> Result<Vec<Entry>, NavError> {
        let raw = self.reader.list_entries(folder).inspect_err(|e| {
            log::warn!("{}", e);
        })?;
        Ok(build_listing(raw, self.icons.as_ref()))
    }

    /// Lists `path` and makes it the current folder.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> Result<Vec<Entry>, NavError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(NavError::InvalidPath);
        }
        let listing = self.list(&path)?;
        self.navigate_to(path)?;
        Ok(listing)
    }

    pub fn open_back(&mut self) -> Result<(PathBuf, Vec<Entry>), NavError> {
        let target = self
            .history
            .peek_back()
            .map(Path::to_path_buf)
            .ok_or(NavError::NoHistory)?;
        let listing = self.list(&target)?;
        let folder = self.go_back()?;
        Ok((folder, listing))
    }

    pub fn open_forward(&mut self) -> Result<(PathBuf, Vec<Entry>), NavError> {
        let target = self
            .history
            .peek_forward()
            .map(Path::to_path_buf)
            .ok_or(NavError::NoHistory)?;
        let listing = self.list(&target)?;
        let folder = self.go_forward()?;
        Ok((folder, listing))
    }

    pub fn refresh(&self) -> Result<Vec<Entry>, NavError> {
        let folder = self.current_folder().ok_or(NavError::NoHistory)?;
        self.list(folder)
    }

    /// Renames `path` in place and relists its parent folder.
    ///
    /// Once the file has moved the rename counts as done. A parent that can
    /// no longer be listed yields `None` for the listing instead of an error.
    pub fn rename(
        &self,
        path: &Path,
        new_name: &str,
    ) -> Result<(PathBuf, Option<Vec<Entry>>), NavError> {
        let new_path = rename_entry(path, new_name)?;
        let listing = new_path.parent().and_then(|parent| self.list(parent).ok());
        Ok((new_path, listing))
    }
}

impl Default for Navigator<LocalFileSystem> {
    fn default() -> Self {
        Self::new(LocalFileSystem::default(), Box::new(IconSet::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryKind;
    use crate::io::RawEntry;
    use std::collections::HashMap;
    use std::fs;
    use std::io;

    /// Directory tree held in memory. A folder maps to its children.
    #[derive(Default)]
    struct MemoryReader {
        folders: HashMap<PathBuf, Vec<(&'static str, bool)>>,
    }

    impl MemoryReader {
        fn with(mut self, folder: &str, children: Vec<(&'static str, bool)>) -> Self {
            self.folders.insert(PathBuf::from(folder), children);
            self
        }
    }

    impl FileSystemReader for MemoryReader {
        fn list_entries(&self, path: &Path) -> Result<Vec<RawEntry>, NavError> {
            let children = self
                .folders
                .get(path)
                .ok_or_else(|| NavError::DirectoryUnavailable {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::NotFound, "no such folder"),
                })?;
            Ok(children
                .iter()
                .map(|(name, is_directory)| RawEntry {
                    name: name.to_string(),
                    full_path: path.join(name),
                    is_directory: *is_directory,
                })
                .collect())
        }
    }

    fn navigator() -> Navigator<MemoryReader> {
        let reader = MemoryReader::default()
            .with("/a", vec![("b.txt", false), ("a.png", false), ("sub", true)])
            .with("/b", vec![("x.JPG", false), ("notes", true), ("Alpha", true)])
            .with("/c", vec![]);
        Navigator::new(reader, Box::new(IconSet::default()))
    }

    #[test]
    fn test_go_back_needs_two_folders() {
        let mut nav = navigator();
        assert!(matches!(nav.go_back(), Err(NavError::NoHistory)));
        assert_eq!(nav.current_folder(), None);

        nav.navigate_to("/a").unwrap();
        assert!(!nav.can_go_back());
        assert!(matches!(nav.go_back(), Err(NavError::NoHistory)));
        assert_eq!(nav.current_folder(), Some(Path::new("/a")));
        assert!(!nav.can_go_forward());
    }

    #[test]
    fn test_back_and_forward_are_inverse() {
        let mut nav = navigator();
        nav.navigate_to("/a").unwrap();
        nav.navigate_to("/b").unwrap();

        assert_eq!(nav.go_back().unwrap(), PathBuf::from("/a"));
        assert_eq!(nav.current_folder(), Some(Path::new("/a")));
        assert!(nav.can_go_forward());

        assert_eq!(nav.go_forward().unwrap(), PathBuf::from("/b"));
        assert_eq!(nav.current_folder(), Some(Path::new("/b")));
        assert!(matches!(nav.go_forward(), Err(NavError::NoHistory)));
    }

    #[test]
    fn test_navigate_to_clears_forward() {
        let mut nav = navigator();
        nav.navigate_to("/a").unwrap();
        nav.navigate_to("/b").unwrap();
        nav.go_back().unwrap();
        assert!(nav.can_go_forward());

        nav.navigate_to("/c").unwrap();
        assert!(!nav.can_go_forward());
        assert!(nav.can_go_back());
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let mut nav = navigator();
        nav.navigate_to("/a").unwrap();
        assert!(matches!(nav.navigate_to(""), Err(NavError::InvalidPath)));
        assert!(matches!(nav.open(""), Err(NavError::InvalidPath)));
        assert_eq!(nav.current_folder(), Some(Path::new("/a")));
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_list_filters_and_orders() {
        let nav = navigator();
        let listing = nav.list(Path::new("/a")).unwrap();
        let summary: Vec<_> = listing.iter().map(|e| (e.name.as_str(), e.kind)).collect();
        assert_eq!(summary, [("sub", EntryKind::Folder), ("a.png", EntryKind::Image)]);

        let listing = nav.list(Path::new("/b")).unwrap();
        let names: Vec<_> = listing.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "notes", "x.JPG"]);
        assert!(listing.iter().all(|e| e.kind != EntryKind::Other));
    }

    #[test]
    fn test_list_unknown_folder() {
        let nav = navigator();
        assert!(matches!(
            nav.list(Path::new("/missing")),
            Err(NavError::DirectoryUnavailable { .. })
        ));
    }

    #[test]
    fn test_failed_open_keeps_history() {
        let mut nav = navigator();
        nav.open("/a").unwrap();
        nav.open("/b").unwrap();
        nav.go_back().unwrap();

        let err = nav.open("/missing").unwrap_err();
        assert!(matches!(err, NavError::DirectoryUnavailable { .. }));
        assert_eq!(nav.current_folder(), Some(Path::new("/a")));
        assert!(nav.can_go_forward());
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_open_back_and_forward() {
        let mut nav = navigator();
        nav.open("/a").unwrap();
        nav.open("/b").unwrap();

        let (folder, listing) = nav.open_back().unwrap();
        assert_eq!(folder, PathBuf::from("/a"));
        assert_eq!(listing.len(), 2);

        let (folder, listing) = nav.open_forward().unwrap();
        assert_eq!(folder, PathBuf::from("/b"));
        assert_eq!(listing.len(), 3);
        assert!(matches!(nav.open_forward(), Err(NavError::NoHistory)));
    }

    #[test]
    fn test_open_back_to_vanished_folder_keeps_history() {
        let mut nav = navigator();
        nav.navigate_to("/vanished").unwrap();
        nav.open("/a").unwrap();

        assert!(matches!(
            nav.open_back(),
            Err(NavError::DirectoryUnavailable { .. })
        ));
        assert_eq!(nav.current_folder(), Some(Path::new("/a")));
        assert!(nav.can_go_back());
        assert!(!nav.can_go_forward());
    }

    #[test]
    fn test_refresh_without_folder() {
        let nav = navigator();
        assert!(matches!(nav.refresh(), Err(NavError::NoHistory)));
    }

    #[test]
    fn test_rename_relists_parent() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("selfie.png");
        fs::write(&photo, "png").unwrap();

        let mut nav: Navigator = Navigator::default();
        nav.open(dir.path()).unwrap();

        let (new_path, listing) = nav.rename(&photo, "holiday.png").unwrap();
        let listing = listing.unwrap();
        assert_eq!(new_path, dir.path().join("holiday.png"));
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "holiday.png");
        assert_eq!(nav.current_folder(), Some(dir.path()));
    }

    #[test]
    fn test_rename_unchanged_dotted_name_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("my.photo.png");
        fs::write(&photo, "png").unwrap();

        let mut nav: Navigator = Navigator::default();
        let listing = nav.open(dir.path()).unwrap();
        let typed = listing[0].base_name();
        let new_name = crate::entry::name_with_original_extension(&typed, &photo);

        let (new_path, listing) = nav.rename(&photo, &new_name).unwrap();
        assert_eq!(new_path, photo);
        assert!(photo.exists());
        assert_eq!(listing.unwrap()[0].kind, EntryKind::Image);
    }

    #[test]
    fn test_rename_succeeds_when_parent_cannot_be_listed() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("selfie.png");
        fs::write(&photo, "png").unwrap();
        // The in-memory reader knows nothing about the temp folder
        let nav = navigator();

        let (new_path, listing) = nav.rename(&photo, "moved.png").unwrap();
        assert_eq!(new_path, dir.path().join("moved.png"));
        assert!(new_path.exists());
        assert!(!photo.exists());
        assert!(listing.is_none());
    }

    #[test]
    fn test_rename_failures_leave_files() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("selfie.png");
        fs::write(&photo, "png").unwrap();
        let nav: Navigator = Navigator::default();

        assert!(matches!(nav.rename(&photo, "  "), Err(NavError::InvalidName(_))));
        assert!(photo.exists());

        fs::remove_file(&photo).unwrap();
        assert!(matches!(
            nav.rename(&photo, "other.png"),
            Err(NavError::NotFound(_))
        ));
        assert!(!dir.path().join("other.png").exists());
    }
}
