use crate::capture::{device_from_config, CameraFeed};
use crate::config::Config;
use crate::entry::{name_with_original_extension, Entry};
use crate::error::CaptureError;
use crate::icons::IconSet;
use crate::io::watcher::FolderWatcher;
use crate::io::worker::{spawn_worker, IoCommand, IoResult};
use crate::io::LocalFileSystem;
use crate::navigator::Navigator;
use crate::state::{AppMode, UIState, ViewerState};
use crate::style::{self, Theme};
use eframe::egui;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

pub struct Camfolio {
    pub ctx: egui::Context,

    // Navigation
    pub navigator: Navigator,
    pub entries: Vec<Entry>,
    pub selected_index: Option<usize>,

    // Mode & UI
    pub mode: AppMode,
    pub ui: UIState,

    // IO
    pub command_tx: Sender<IoCommand>,
    pub result_rx: Receiver<IoResult>,
    pub watcher: FolderWatcher,

    // Camera
    pub camera: Option<CameraFeed>,
    pub camera_texture: Option<egui::TextureHandle>,
    pub camera_generation: u64,
    pub capture_prefix: String,
}

impl Camfolio {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let ctx = cc.egui_ctx.clone();

        let theme = if config.is_light_theme() {
            Theme::Light
        } else {
            Theme::Dark
        };
        theme.apply(&ctx);

        let reader = LocalFileSystem {
            show_hidden: config.ui.show_hidden,
        };
        let navigator = Navigator::new(reader, Box::new(IconSet::from_config(&config.icons)));

        let worker_ctx = ctx.clone();
        let (command_tx, result_rx) = spawn_worker(move || worker_ctx.request_repaint());

        let camera = device_from_config(&config.capture).map(|device| {
            let camera_ctx = ctx.clone();
            CameraFeed::start(
                device,
                Duration::from_millis(config.capture.frame_interval_ms.max(1)),
                move || camera_ctx.request_repaint(),
            )
        });

        let mut app = Self {
            ctx,
            navigator,
            entries: Vec::new(),
            selected_index: None,
            mode: AppMode::Normal,
            ui: UIState::new(
                theme,
                config
                    .panel
                    .camera_width
                    .clamp(style::CAMERA_MIN, style::CAMERA_MAX),
                config.ui.thumbnail_size.max(0.0),
                config.ui.show_hidden,
            ),
            command_tx,
            result_rx,
            watcher: FolderWatcher::new(),
            camera,
            camera_texture: None,
            camera_generation: 0,
            capture_prefix: config.capture.file_prefix.clone(),
        };

        let start = config.ui.start_folder.clone().or_else(|| {
            directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
        });
        if let Some(start) = start {
            app.open_folder(start);
        }
        app
    }

    fn show_listing(&mut self, listing: Vec<Entry>) {
        self.entries = listing;
        self.selected_index = if self.entries.is_empty() { None } else { Some(0) };

        if let Some(current) = self.navigator.current_folder().map(Path::to_path_buf) {
            self.ui.path_input = current.to_string_lossy().to_string();
            let ctx = self.ctx.clone();
            self.watcher.watch(&current, move || ctx.request_repaint());
        }
    }

    pub fn open_folder(&mut self, path: PathBuf) {
        match self.navigator.open(path) {
            Ok(listing) => self.show_listing(listing),
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }

    pub fn navigate_back(&mut self) {
        match self.navigator.open_back() {
            Ok((_, listing)) => self.show_listing(listing),
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }

    pub fn navigate_forward(&mut self) {
        match self.navigator.open_forward() {
            Ok((_, listing)) => self.show_listing(listing),
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }

    pub fn navigate_up(&mut self) {
        let parent = self
            .navigator
            .current_folder()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        if let Some(parent) = parent {
            self.open_folder(parent);
        }
    }

    pub fn refresh(&mut self) {
        if self.navigator.current_folder().is_none() {
            return;
        }
        match self.navigator.refresh() {
            Ok(listing) => {
                // Keep the cursor on the same entry when it survived the refresh
                let selected_path = self
                    .selected_index
                    .and_then(|i| self.entries.get(i))
                    .map(|e| e.path.clone());
                self.show_listing(listing);
                if let Some(path) = selected_path {
                    if let Some(idx) = self.entries.iter().position(|e| e.path == path) {
                        self.selected_index = Some(idx);
                    }
                }
            }
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }

    pub fn submit_path_input(&mut self) {
        let typed = self.ui.path_input.trim().to_string();
        if typed.is_empty() {
            self.ui.path_input = "Invalid Path".to_string();
            self.ui.set_error("Invalid Path".to_string());
            return;
        }
        self.open_folder(PathBuf::from(typed));
    }

    pub fn browse_for_folder(&mut self) {
        let mut dialog = rfd::FileDialog::new();
        if let Some(current) = self.navigator.current_folder() {
            dialog = dialog.set_directory(current);
        }
        if let Some(folder) = dialog.pick_folder() {
            self.open_folder(folder);
        }
    }

    pub fn toggle_hidden(&mut self) {
        self.navigator.reader_mut().show_hidden = self.ui.show_hidden;
        self.refresh();
    }

    /// Opens a folder entry, or shows an image entry in the viewer.
    pub fn activate(&mut self, index: usize) {
        let Some(entry) = self.entries.get(index).cloned() else {
            return;
        };
        self.selected_index = Some(index);
        if entry.is_folder() {
            self.open_folder(entry.path);
        } else if entry.is_image() {
            self.mode = AppMode::Viewer(ViewerState::new(entry));
        }
    }

    pub fn submit_rename(&mut self, path: &Path, typed: &str) {
        let new_name = name_with_original_extension(typed, path);
        match self.navigator.rename(path, &new_name) {
            Ok((new_path, listing)) => {
                self.ctx.forget_image(&format!("file://{}", path.display()));
                if new_path.parent() == self.navigator.current_folder() {
                    match listing {
                        Some(listing) => self.show_listing(listing),
                        None => {
                            log::warn!("Could not relist after renaming {}", new_path.display());
                            self.entries.clear();
                            self.selected_index = None;
                        }
                    }
                    if let Some(idx) = self.entries.iter().position(|e| e.path == new_path) {
                        self.selected_index = Some(idx);
                    }
                }
                self.ui.set_info(format!("Renamed to {}", new_name));
                self.mode = AppMode::Normal;
            }
            Err(e) => self.ui.set_error(e.to_string()),
        }
    }

    pub fn capture_snapshot(&mut self) {
        let Some(folder) = self.navigator.current_folder().map(Path::to_path_buf) else {
            self.ui.set_error(CaptureError::NoFolder.to_string());
            return;
        };
        let Some(frame) = self.camera.as_ref().and_then(CameraFeed::snapshot) else {
            self.ui.set_error(CaptureError::NoFrame.to_string());
            return;
        };
        self.dispatch_snapshot(frame, folder);
    }

    fn dispatch_snapshot(&mut self, frame: RgbaImage, folder: PathBuf) {
        let command = IoCommand::SaveSnapshot {
            frame,
            folder,
            prefix: self.capture_prefix.clone(),
        };
        match self.command_tx.send(command) {
            Ok(()) => self.ui.snapshot_pending = true,
            Err(_) => {
                log::error!("Snapshot worker has stopped");
                self.ui.snapshot_pending = false;
                self.ui.set_error(CaptureError::WorkerStopped.to_string());
            }
        }
    }

    fn process_io_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                IoResult::SnapshotSaved { folder, path } => {
                    self.ui.snapshot_pending = false;
                    self.ui
                        .set_info(format!("Snapshot saved to {}", path.display()));
                    if self.navigator.current_folder() == Some(folder.as_path()) {
                        self.refresh();
                    }
                }
                IoResult::Error(e) => {
                    self.ui.snapshot_pending = false;
                    self.ui.set_error(e);
                }
            }
        }
    }

    fn update_camera_texture(&mut self) {
        let Some(feed) = &self.camera else {
            return;
        };
        let generation = feed.generation();
        if generation == self.camera_generation {
            return;
        }
        self.camera_generation = generation;

        if let Some(frame) = feed.snapshot() {
            let size = [frame.width() as usize, frame.height() as usize];
            let image = egui::ColorImage::from_rgba_unmultiplied(size, frame.as_raw());
            if let Some(texture) = &mut self.camera_texture {
                texture.set(image, egui::TextureOptions::LINEAR);
            } else {
                self.camera_texture = Some(self.ctx.load_texture(
                    "camera_frame",
                    image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
    }
}

impl eframe::App for Camfolio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_io_results();
        if self.watcher.changed() {
            self.refresh();
        }
        self.update_camera_texture();

        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);
        if self.ui.has_messages() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        self.handle_input(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_top_bar(ui);
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::SidePanel::right("camera_panel")
            .resizable(true)
            .default_width(self.ui.camera_width)
            .width_range(style::CAMERA_MIN..=style::CAMERA_MAX)
            .show(ctx, |ui| {
                self.render_camera_pane(ui);
            });

        let next_activation = std::cell::RefCell::new(None);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_listing(ui, &next_activation);
        });
        if let Some(idx) = next_activation.into_inner() {
            self.activate(idx);
        }

        self.render_viewer(ctx);
        self.render_help_modal(ctx);
    }
}
