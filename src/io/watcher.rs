// Watches the folder on screen so the listing stays live

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

pub struct FolderWatcher {
    watcher: Option<RecommendedWatcher>,
    watched: Option<PathBuf>,
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl FolderWatcher {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            watcher: None,
            watched: None,
            tx,
            rx,
        }
    }

    /// Starts watching `path` (non-recursively) instead of the previous folder.
    /// `wake` runs on every filesystem event.
    pub fn watch(&mut self, path: &Path, wake: impl Fn() + Send + 'static) {
        if self.watched.as_deref() == Some(path) {
            return;
        }
        self.watcher = None;
        self.watched = None;

        let tx = self.tx.clone();
        let mut watcher = match notify::recommended_watcher(
            move |res: Result<Event, notify::Error>| {
                if res.is_ok() {
                    let _ = tx.send(());
                    wake();
                }
            },
        ) {
            Ok(w) => w,
            Err(e) => {
                log::warn!("File watcher unavailable: {}", e);
                return;
            }
        };

        if let Err(e) = watcher.watch(path, RecursiveMode::NonRecursive) {
            log::warn!("Cannot watch {}: {}", path.display(), e);
            return;
        }
        log::debug!("Watching {}", path.display());
        self.watcher = Some(watcher);
        self.watched = Some(path.to_path_buf());
    }

    /// True when the watched folder changed since the last call.
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn test_reports_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut watcher = FolderWatcher::new();
        watcher.watch(dir.path(), || {});

        std::fs::write(dir.path().join("new.png"), "png").unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut seen = false;
        while Instant::now() < deadline {
            if watcher.changed() {
                seen = true;
                break;
            }
            std::thread::sleep(Duration::from_millis(20));
        }
        assert!(seen);
    }
}
