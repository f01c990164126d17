//! Startup settings, read once from an optional JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::skin::Skin;

pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root that holds the `Graphics/`, `Sound/` and `Font/` folders.
    pub resource_dir: PathBuf,
    pub high_score_path: PathBuf,
    /// Pixel size of one grid cell.
    pub cell_size: f32,
    pub difficulty: Difficulty,
    pub skin: Skin,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            resource_dir: PathBuf::from("./resources"),
            high_score_path: PathBuf::from("highscore.txt"),
            cell_size: 40.0,
            difficulty: Difficulty::Normal,
            skin: Skin::Classic,
        }
    }
}

impl Settings {
    /// Missing file means defaults. A broken file is reported and also
    /// means defaults.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Settings::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {e}", path.display());
                Settings::default()
            }
        }
    }
}
