mod directory;
mod ops;
pub mod watcher;
pub mod worker;

pub use directory::{build_listing, FileSystemReader, LocalFileSystem, RawEntry};
pub use ops::rename_entry;
