pub mod mode;
pub mod navigation;
pub mod ui;

pub use mode::{AppMode, ViewerState};
pub use navigation::FolderHistory;
pub use ui::UIState;
