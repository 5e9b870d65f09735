// Camera frames and snapshot files

use crate::config::CaptureConfig;
use crate::error::CaptureError;
use chrono::{DateTime, Local};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Source of camera frames.
pub trait CaptureDevice: Send {
    fn name(&self) -> &str;

    /// Next frame, or `None` when the device has nothing to deliver.
    fn next_frame(&mut self) -> Option<RgbaImage>;
}

/// Synthetic device drawing a moving gradient, for machines without a camera.
pub struct TestPattern {
    width: u32,
    height: u32,
    started: Instant,
}

impl TestPattern {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            started: Instant::now(),
        }
    }
}

impl CaptureDevice for TestPattern {
    fn name(&self) -> &str {
        "Test pattern"
    }

    fn next_frame(&mut self) -> Option<RgbaImage> {
        let shift = (self.started.elapsed().as_millis() / 20) as u32;
        let (w, h) = (self.width.max(1), self.height.max(1));
        Some(RgbaImage::from_fn(w, h, |x, y| {
            let r = (x.wrapping_add(shift) % w * 255 / w) as u8;
            let g = (y * 255 / h) as u8;
            let b = ((x + y).wrapping_add(shift) % 256) as u8;
            Rgba([r, g, b, 255])
        }))
    }
}

/// Device named by the `capture.source` setting, if any.
pub fn device_from_config(config: &CaptureConfig) -> Option<Box<dyn CaptureDevice>> {
    match config.source.as_str() {
        "test-pattern" => Some(Box::new(TestPattern::new(config.width, config.height))),
        "none" | "" => None,
        other => {
            log::warn!("Unknown capture source {:?}, camera disabled", other);
            None
        }
    }
}

/// Latest frame produced by a [`CameraFeed`].
pub type FrameSlot = Arc<Mutex<Option<RgbaImage>>>;

/// Background thread pulling frames from a device into a shared slot.
pub struct CameraFeed {
    device_name: String,
    frame: FrameSlot,
    generation: Arc<AtomicU64>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CameraFeed {
    /// Starts polling `device` every `interval`. `on_frame` runs after each
    /// new frame is stored, typically to request a repaint.
    pub fn start(
        mut device: Box<dyn CaptureDevice>,
        interval: Duration,
        on_frame: impl Fn() + Send + 'static,
    ) -> Self {
        let device_name = device.name().to_string();
        let frame: FrameSlot = Arc::new(Mutex::new(None));
        let generation = Arc::new(AtomicU64::new(0));
        let stop = Arc::new(AtomicBool::new(false));

        let frame_clone = Arc::clone(&frame);
        let generation_clone = Arc::clone(&generation);
        let stop_clone = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            while !stop_clone.load(Ordering::Relaxed) {
                if let Some(next) = device.next_frame() {
                    if let Ok(mut slot) = frame_clone.lock() {
                        *slot = Some(next);
                    }
                    generation_clone.fetch_add(1, Ordering::Release);
                    on_frame();
                }
                thread::sleep(interval);
            }
        });
        log::info!("Started camera feed from {}", device_name);

        Self {
            device_name,
            frame,
            generation,
            stop,
            handle: Some(handle),
        }
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Copy of the most recent frame.
    pub fn snapshot(&self) -> Option<RgbaImage> {
        self.frame.lock().ok().and_then(|slot| slot.clone())
    }

    /// Number of frames stored so far. Changes whenever a new frame arrives.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

impl Drop for CameraFeed {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        log::info!("Stopped camera feed from {}", self.device_name);
    }
}

pub fn snapshot_file_name(prefix: &str, time: DateTime<Local>) -> String {
    format!("{}_{}.png", prefix, time.format("%Y%m%d%H%M%S"))
}

/// Path for a new snapshot in `folder` that does not clash with an existing file.
pub fn unique_snapshot_path(folder: &Path, prefix: &str, time: DateTime<Local>) -> PathBuf {
    let first = folder.join(snapshot_file_name(prefix, time));
    if !first.exists() {
        return first;
    }
    let stem = format!("{}_{}", prefix, time.format("%Y%m%d%H%M%S"));
    (1..)
        .map(|n| folder.join(format!("{}_{}.png", stem, n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

/// Writes `frame` as a PNG snapshot into `folder` and returns the file path.
pub fn save_snapshot(frame: &RgbaImage, folder: &Path, prefix: &str) -> Result<PathBuf, CaptureError> {
    if !folder.is_dir() {
        return Err(CaptureError::NoFolder);
    }
    let path = unique_snapshot_path(folder, prefix, Local::now());
    frame.save_with_format(&path, ImageFormat::Png)?;
    log::info!("Snapshot saved to {}", path.display());
    Ok(path)
}
