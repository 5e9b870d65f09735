use crate::capture::save_snapshot;
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

pub enum IoCommand {
    SaveSnapshot {
        frame: RgbaImage,
        folder: PathBuf,
        prefix: String,
    },
}

#[derive(Debug)]
pub enum IoResult {
    SnapshotSaved { folder: PathBuf, path: PathBuf },
    Error(String),
}

/// Spawns the IO thread. `notify` runs after every reply, typically to wake the UI.
pub fn spawn_worker(
    notify: impl Fn() + Send + 'static,
) -> (Sender<IoCommand>, Receiver<IoResult>) {
    let (cmd_tx, cmd_rx) = channel();
    let (res_tx, res_rx) = channel();

    thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            match cmd {
                IoCommand::SaveSnapshot {
                    frame,
                    folder,
                    prefix,
                } => match save_snapshot(&frame, &folder, &prefix) {
                    Ok(path) => {
                        let _ = res_tx.send(IoResult::SnapshotSaved { folder, path });
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        let _ = res_tx.send(IoResult::Error(e.to_string()));
                    }
                },
            }
            notify();
        }
        log::debug!("IO worker stopped");
    });

    (cmd_tx, res_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_snapshot_round_trip_through_worker() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = spawn_worker(|| {});
        tx.send(IoCommand::SaveSnapshot {
            frame: RgbaImage::new(3, 3),
            folder: dir.path().to_path_buf(),
            prefix: "selfie".to_string(),
        })
        .unwrap();

        match rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            IoResult::SnapshotSaved { folder, path } => {
                assert_eq!(folder, dir.path());
                assert!(path.exists());
                let name = path.file_name().unwrap().to_string_lossy().to_string();
                assert!(name.starts_with("selfie_") && name.ends_with(".png"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_worker_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = spawn_worker(|| {});
        tx.send(IoCommand::SaveSnapshot {
            frame: RgbaImage::new(3, 3),
            folder: dir.path().join("missing"),
            prefix: "selfie".to_string(),
        })
        .unwrap();

        let result = rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(matches!(result, IoResult::Error(_)));
    }
}
