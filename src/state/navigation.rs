// Folder history - back and forward stacks of visited folders
use std::path::{Path, PathBuf};

/// Browser-style history. The top of `back` is the folder on screen.
#[derive(Clone, Debug, Default)]
pub struct FolderHistory {
    back: Vec<PathBuf>,
    forward: Vec<PathBuf>,
}

impl FolderHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: PathBuf) {
        // Remove any forward history when navigating to a new path
        self.forward.clear();
        self.back.push(path);
    }

    pub fn go_back(&mut self) -> Option<&Path> {
        if !self.can_go_back() {
            return None;
        }
        if let Some(current) = self.back.pop() {
            self.forward.push(current);
        }
        self.current()
    }

    pub fn go_forward(&mut self) -> Option<&Path> {
        let next = self.forward.pop()?;
        self.back.push(next);
        self.current()
    }

    pub fn current(&self) -> Option<&Path> {
        self.back.last().map(PathBuf::as_path)
    }

    /// Folder `go_back` would land on, without moving.
    pub fn peek_back(&self) -> Option<&Path> {
        if self.can_go_back() {
            self.back.get(self.back.len() - 2).map(PathBuf::as_path)
        } else {
            None
        }
    }

    /// Folder `go_forward` would land on, without moving.
    pub fn peek_forward(&self) -> Option<&Path> {
        self.forward.last().map(PathBuf::as_path)
    }

    pub fn can_go_back(&self) -> bool {
        self.back.len() > 1
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_keeps_last_folder() {
        let mut history = FolderHistory::new();
        assert!(history.go_back().is_none());

        history.push(PathBuf::from("/a"));
        assert!(!history.can_go_back());
        assert!(history.go_back().is_none());
        assert_eq!(history.current(), Some(Path::new("/a")));
    }

    #[test]
    fn test_back_then_forward_are_inverse() {
        let mut history = FolderHistory::new();
        history.push(PathBuf::from("/a"));
        history.push(PathBuf::from("/b"));

        assert_eq!(history.peek_back(), Some(Path::new("/a")));
        assert_eq!(history.go_back(), Some(Path::new("/a")));
        assert!(history.can_go_forward());
        assert_eq!(history.peek_forward(), Some(Path::new("/b")));
        assert_eq!(history.go_forward(), Some(Path::new("/b")));
        assert!(!history.can_go_forward());
        assert!(history.go_forward().is_none());
    }

    #[test]
    fn test_push_clears_forward() {
        let mut history = FolderHistory::new();
        history.push(PathBuf::from("/a"));
        history.push(PathBuf::from("/b"));
        history.push(PathBuf::from("/c"));
        history.go_back();
        history.go_back();
        assert!(history.can_go_forward());

        history.push(PathBuf::from("/d"));
        assert!(!history.can_go_forward());
        assert_eq!(history.current(), Some(Path::new("/d")));
        assert_eq!(history.go_back(), Some(Path::new("/a")));
    }
}
