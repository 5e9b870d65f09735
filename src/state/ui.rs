// UI state - presentation and layout settings
use crate::style::Theme;
use std::time::Instant;

pub struct UIState {
    pub theme: Theme,
    pub error_message: Option<(String, Instant)>,
    pub info_message: Option<(String, Instant)>,
    pub camera_width: f32,
    pub thumbnail_size: f32,
    pub path_input: String,
    pub show_hidden: bool,
    pub snapshot_pending: bool,
    pub scroll_to_selected: bool,
}

impl UIState {
    pub fn new(theme: Theme, camera_width: f32, thumbnail_size: f32, show_hidden: bool) -> Self {
        Self {
            theme,
            error_message: None,
            info_message: None,
            camera_width,
            thumbnail_size,
            path_input: String::new(),
            show_hidden,
            snapshot_pending: false,
            scroll_to_selected: false,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn set_info(&mut self, message: String) {
        self.info_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
        if let Some((_, time)) = &self.info_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
    }

    pub fn has_messages(&self) -> bool {
        self.error_message.is_some() || self.info_message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_expire() {
        let mut ui = UIState::new(Theme::Dark, 300.0, 32.0, true);
        ui.set_error("boom".into());
        ui.set_info("saved".into());
        ui.clear_expired_messages(60);
        assert!(ui.has_messages());
        ui.clear_expired_messages(0);
        assert!(!ui.has_messages());
    }
}
