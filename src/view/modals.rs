// Modal rendering functions (Help, Image viewer)

use crate::app::Camfolio;
use crate::state::AppMode;
use crate::style;
use eframe::egui;

const KEY_BINDINGS: [(&str, &str); 10] = [
    ("Alt + Left / Right", "Back / Forward"),
    ("Backspace", "Go to Parent"),
    ("Up / Down", "Move Selection"),
    ("Home / End", "First / Last Item"),
    ("Enter / Double-click", "Open Folder / View Image"),
    ("F5", "Refresh"),
    ("Ctrl+O", "Browse for Folder"),
    ("Ctrl+Space", "Take Picture"),
    ("Escape", "Close Popup"),
    ("F1", "Help"),
];

impl Camfolio {
    pub(crate) fn render_help_modal(&mut self, ctx: &egui::Context) {
        if self.mode != AppMode::Help {
            return;
        }
        let mut close = false;
        egui::Window::new("Help")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx).min(400.0))
            .show(ctx, |ui| {
                ui.heading("Key Bindings");
                ui.separator();
                egui::Grid::new("help_grid").striped(true).show(ui, |ui| {
                    for (keys, action) in KEY_BINDINGS {
                        ui.label(keys);
                        ui.label(action);
                        ui.end_row();
                    }
                });
                ui.add_space(10.0);
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        if close {
            self.mode = AppMode::Normal;
        }
    }

    pub(crate) fn render_viewer(&mut self, ctx: &egui::Context) {
        let AppMode::Viewer(viewer) = &mut self.mode else {
            return;
        };

        let mut open = true;
        let mut close = false;
        let mut submit = false;
        let mut open_external = false;

        egui::Window::new(viewer.entry.name.clone())
            .id(egui::Id::new("image_viewer"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .default_width(style::modal_width(ctx))
            .show(ctx, |ui| {
                let max_height = style::modal_max_height(ctx) - 80.0;
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::new(viewer.image_uri())
                            .max_width(ui.available_width())
                            .max_height(max_height.max(100.0))
                            .maintain_aspect_ratio(true)
                            .shrink_to_fit(),
                    );
                });
                ui.vertical_centered(|ui| {
                    ui.weak(viewer.details());
                });
                ui.separator();

                ui.horizontal(|ui| {
                    ui.label("Name:");
                    let response = ui.text_edit_singleline(&mut viewer.name_buffer);
                    if viewer.focus_input {
                        response.request_focus();
                        viewer.focus_input = false;
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit = true;
                    }
                });

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("✏ Rename").clicked() {
                        submit = true;
                    }
                    if ui.button("↗ Open externally").clicked() {
                        open_external = true;
                    }
                    if ui.button("Close").clicked() {
                        close = true;
                    }
                });
            });

        let path = viewer.entry.path.clone();
        let typed = viewer.name_buffer.clone();

        if open_external {
            if let Err(e) = open::that(&path) {
                self.ui.set_error(format!("Could not open file: {}", e));
            }
        }
        if submit {
            self.submit_rename(&path, &typed);
        } else if close || !open {
            self.mode = AppMode::Normal;
        }
    }
}
