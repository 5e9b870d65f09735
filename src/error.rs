// Error types for navigation, listing, rename and capture

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the navigator and its filesystem operations.
///
/// Every variant ends the operation that produced it. Nothing is retried and
/// history is left as it was before the call.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("Invalid Path")]
    InvalidPath,

    #[error("No more history in that direction")]
    NoHistory,

    #[error("Cannot read {}: {source}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("The file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{} already exists", .0.display())]
    MoveConflict(PathBuf),

    #[error("Error renaming {} to {}: {source}", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while turning a camera frame into a snapshot file.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("No frame captured.")]
    NoFrame,

    #[error("No folder selected to save the snapshot in")]
    NoFolder,

    #[error("Failed to save snapshot: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Snapshot writer is not running")]
    WorkerStopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = NavError::NotFound(PathBuf::from("/tmp/gone.png"));
        assert_eq!(err.to_string(), "The file does not exist: /tmp/gone.png");

        let err = NavError::DirectoryUnavailable {
            path: PathBuf::from("/nope"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("Cannot read /nope"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_capture_messages() {
        assert_eq!(CaptureError::NoFrame.to_string(), "No frame captured.");
    }
}
