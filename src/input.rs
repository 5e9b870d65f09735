// Input handling for Camfolio
// Keyboard shortcuts and dropped files

use crate::app::Camfolio;
use crate::state::AppMode;
use eframe::egui;

impl Camfolio {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // Popups take all keys; Escape closes them
        if self.mode != AppMode::Normal {
            if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
                self.mode = AppMode::Normal;
            }
            return;
        }

        // Dropping a folder onto the window opens it
        let dropped_folder = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .find(|p| p.is_dir())
        });
        if let Some(folder) = dropped_folder {
            self.open_folder(folder);
            return;
        }

        // Global History keys
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            self.navigate_back();
            return;
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            self.navigate_forward();
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.refresh();
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F1)) {
            self.mode = AppMode::Help;
            return;
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::O)) {
            self.browse_for_folder();
            return;
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::Space)) {
            self.capture_snapshot();
            return;
        }

        // Everything below would fight with the path text field
        if ctx.wants_keyboard_input() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.navigate_up();
            return;
        }

        if self.entries.is_empty() {
            return;
        }
        let max_idx = self.entries.len() - 1;
        let current = self.selected_index.unwrap_or(0);
        let before = self.selected_index;

        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.selected_index = Some((current + 1).min(max_idx));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.selected_index = Some(current.saturating_sub(1));
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Home)) {
            self.selected_index = Some(0);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::End)) {
            self.selected_index = Some(max_idx);
        }
        if self.selected_index != before {
            self.ui.scroll_to_selected = true;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            if let Some(idx) = self.selected_index {
                self.activate(idx);
            }
        }
    }
}
