use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub ui: UiConfig,
    pub capture: CaptureConfig,
    pub icons: IconConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the camera pane (in pixels)
    pub camera_width: f32,
}

/// UI behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// List entries whose name starts with a dot
    pub show_hidden: bool,
    /// Folder opened at startup; the home folder when unset
    pub start_folder: Option<PathBuf>,
    /// Edge length of image thumbnails in the list (in pixels), 0 for icons only
    pub thumbnail_size: f32,
}

/// Camera configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CaptureConfig {
    /// "none" or "test-pattern"
    pub source: String,
    /// Delay between two frames (in milliseconds)
    pub frame_interval_ms: u64,
    /// Snapshot files are named `<prefix>_<yyyyMMddHHmmss>.png`
    pub file_prefix: String,
    /// Frame size for the test pattern
    pub width: u32,
    pub height: u32,
}

/// Icon overrides; built-in glyphs are used for unset entries
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct IconConfig {
    pub folder: Option<PathBuf>,
    pub image: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            camera_width: 360.0,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_hidden: true,
            start_folder: None,
            thumbnail_size: 32.0,
        }
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        CaptureConfig {
            source: "test-pattern".to_string(),
            frame_interval_ms: 66,
            file_prefix: "selfie".to_string(),
            width: 640,
            height: 480,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "camfolio")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => return config,
                Err(e) => log::warn!("Failed to parse config file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Failed to read config file {}: {}", path.display(), e),
        }
        log::warn!("Using default configuration");
        Config::default()
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("Could not determine config directory")?;
        if !path.exists() {
            Config::default().save_to(&path)?;
            log::info!("Wrote default configuration to {}", path.display());
        }
        Ok(())
    }

    pub fn is_light_theme(&self) -> bool {
        self.theme.mode.eq_ignore_ascii_case("light")
    }
}
