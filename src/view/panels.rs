// Panel rendering for Camfolio
// Toolbar, folder listing, camera pane and status bar

use crate::app::Camfolio;
use crate::entry::Entry;
use crate::icons::IconRef;
use crate::state::AppMode;
use crate::style;
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::cell::RefCell;

impl Camfolio {
    pub(crate) fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let back = ui.add_enabled(self.navigator.can_go_back(), egui::Button::new("⬅ Back"));
            if back.clicked() {
                self.navigate_back();
            }
            let forward =
                ui.add_enabled(self.navigator.can_go_forward(), egui::Button::new("Forward ➡"));
            if forward.clicked() {
                self.navigate_forward();
            }
            let has_parent = self
                .navigator
                .current_folder()
                .is_some_and(|p| p.parent().is_some());
            if ui.add_enabled(has_parent, egui::Button::new("⬆ Up")).clicked() {
                self.navigate_up();
            }
            if ui.button("📂 Browse").on_hover_text("Ctrl+O").clicked() {
                self.browse_for_folder();
            }
            if ui.button("⟳").on_hover_text("Refresh (F5)").clicked() {
                self.refresh();
            }

            let response = ui.add_sized(
                [ui.available_width() - 110.0, 20.0],
                egui::TextEdit::singleline(&mut self.ui.path_input).hint_text("Folder path"),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.submit_path_input();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(self.ui.theme.toggle_label()).clicked() {
                    self.ui.theme = self.ui.theme.toggle();
                    self.ui.theme.apply(ui.ctx());
                }
                if ui.checkbox(&mut self.ui.show_hidden, "Hidden").changed() {
                    self.toggle_hidden();
                }
            });
        });
        ui.add_space(4.0);
    }

    pub(crate) fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!("{} items", self.entries.len()));
            if let Some((info, _)) = &self.ui.info_message {
                ui.label(format!(" | {}", info));
            }
            if let Some((err, _)) = &self.ui.error_message {
                ui.colored_label(egui::Color32::RED, format!(" | {}", err));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("?").on_hover_text("Help (F1)").clicked() {
                    self.mode = AppMode::Help;
                }
            });
        });
    }

    pub(crate) fn render_camera_pane(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            let title = self
                .camera
                .as_ref()
                .map(|feed| feed.device_name().to_string())
                .unwrap_or_else(|| "Camera".to_string());
            ui.heading(title);
        });
        ui.separator();

        match &self.camera_texture {
            Some(texture) => {
                let sized = egui::load::SizedTexture::from_handle(texture);
                ui.add(
                    egui::Image::from_texture(sized)
                        .max_width(ui.available_width())
                        .maintain_aspect_ratio(true)
                        .shrink_to_fit(),
                );
            }
            None if self.camera.is_some() => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Waiting for the first frame...");
                });
            }
            None => {
                ui.label("No camera available.");
            }
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            let can_capture = self.navigator.current_folder().is_some() && !self.ui.snapshot_pending;
            let button = ui
                .add_enabled(can_capture, egui::Button::new("📷 Take picture"))
                .on_hover_text("Ctrl+Space");
            if button.clicked() {
                self.capture_snapshot();
            }
            if self.ui.snapshot_pending {
                ui.spinner();
            }
        });
    }

    pub(crate) fn render_listing(&mut self, ui: &mut egui::Ui, next_activation: &RefCell<Option<usize>>) {
        if self.navigator.current_folder().is_none() {
            ui.centered_and_justified(|ui| {
                ui.label("Browse to a folder to get started");
            });
            return;
        }

        let row_height = style::row_height(self.ui.thumbnail_size);
        let thumbnail_size = self.ui.thumbnail_size;
        let next_selection = RefCell::new(None);

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .auto_shrink([false, false])
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(style::ICON_COL_WIDTH.max(thumbnail_size + 6.0)))
            .column(Column::remainder().clip(true));

        // Only follow the cursor when the keyboard moved it
        if std::mem::take(&mut self.ui.scroll_to_selected) {
            if let Some(idx) = self.selected_index {
                table = table.scroll_to_row(idx, None);
            }
        }

        table
            .header(style::HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.label("");
                });
                header.col(|ui| {
                    ui.label("Name");
                });
            })
            .body(|body| {
                body.rows(row_height, self.entries.len(), |mut row| {
                    let row_index = row.index();
                    let entry = &self.entries[row_index];
                    row.set_selected(self.selected_index == Some(row_index));

                    row.col(|ui| {
                        render_entry_icon(ui, entry, thumbnail_size);
                    });

                    row.col(|ui| {
                        let mut text = egui::RichText::new(&entry.name);
                        if entry.is_folder() {
                            text = text.color(egui::Color32::from_rgb(120, 180, 255));
                        }
                        let response = style::truncated_label_with_sense(
                            ui,
                            text,
                            egui::Sense::click(),
                        );

                        // Single click for selection only
                        if response.clicked() {
                            *next_selection.borrow_mut() = Some(row_index);
                        }
                        // Double click to open folder or view image
                        if response.double_clicked() {
                            *next_activation.borrow_mut() = Some(row_index);
                        }
                        response.context_menu(|ui| {
                            let label = if entry.is_folder() { "📂 Open" } else { "🖼 View / Rename" };
                            if ui.button(label).clicked() {
                                *next_activation.borrow_mut() = Some(row_index);
                                ui.close();
                            }
                            if ui.button("↗ Open externally").clicked() {
                                if let Err(e) = open::that(&entry.path) {
                                    log::warn!("Could not open {}: {}", entry.path.display(), e);
                                }
                                ui.close();
                            }
                        });
                    });
                });
            });

        if let Some(idx) = next_selection.into_inner() {
            self.selected_index = Some(idx);
        }
    }
}

fn render_entry_icon(ui: &mut egui::Ui, entry: &Entry, thumbnail_size: f32) {
    if entry.is_image() && thumbnail_size > 0.0 {
        let uri = format!("file://{}", entry.path.display());
        ui.add(
            egui::Image::new(uri)
                .max_size(egui::vec2(thumbnail_size, thumbnail_size))
                .maintain_aspect_ratio(true),
        );
        return;
    }
    match &entry.icon {
        IconRef::Glyph(glyph) => {
            ui.label(egui::RichText::new(*glyph).size(style::ICON_SIZE));
        }
        icon @ IconRef::File(_) => {
            if let Some(uri) = icon.uri() {
                ui.add(egui::Image::new(uri).fit_to_exact_size(egui::vec2(
                    style::ICON_SIZE + 2.0,
                    style::ICON_SIZE + 2.0,
                )));
            }
        }
    }
}
