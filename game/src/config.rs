use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// Defaults are overridden by config.toml if present
const DEFAULT_SCREEN_WIDTH: f32 = 1280.0;
const DEFAULT_SCREEN_HEIGHT: f32 = 720.0;
const DEFAULT_GRAVITY: f32 = 1.2; // pixels/frame^2
const DEFAULT_JUMP_SPEED: f32 = 20.0; // pixels/frame
const DEFAULT_MOVEMENT_SPEED: f32 = 8.0; // pixels/frame

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScreenCfg {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for ScreenCfg {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            height: DEFAULT_SCREEN_HEIGHT,
            title: "Platformer".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PhysicsCfg {
    pub gravity: f32,
    pub jump_speed: f32,
    pub movement_speed: f32,
}

impl Default for PhysicsCfg {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            jump_speed: DEFAULT_JUMP_SPEED,
            movement_speed: DEFAULT_MOVEMENT_SPEED,
        }
    }
}

/// Minimum distance kept between the player and each viewport edge.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CameraCfg {
    pub left_margin: f32,
    pub right_margin: f32,
    pub bottom_margin: f32,
    pub top_margin: f32,
}

impl Default for CameraCfg {
    fn default() -> Self {
        Self { left_margin: 200.0, right_margin: 200.0, bottom_margin: 150.0, top_margin: 100.0 }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlayerCfg {
    pub start_x: f32,
    pub start_y: f32,
    pub character_scaling: f32,
    // Unscaled sprite size in pixels
    pub sprite_width: f32,
    pub sprite_height: f32,
    /// Falling below this y respawns the player.
    pub fall_limit: f32,
}

impl Default for PlayerCfg {
    fn default() -> Self {
        Self {
            start_x: 80.0,
            start_y: 294.0,
            character_scaling: 0.8,
            sprite_width: 96.0,
            sprite_height: 128.0,
            fall_limit: -100.0,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LevelCfg {
    pub max_level: u32,
    pub tile_scaling: f32,
    pub starting_health: i32,
    pub maps_dir: PathBuf,
}

impl Default for LevelCfg {
    fn default() -> Self {
        Self {
            max_level: 10,
            tile_scaling: 0.4,
            starting_health: 5,
            maps_dir: PathBuf::from("levels"),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenCfg,
    pub physics: PhysicsCfg,
    pub camera: CameraCfg,
    pub player: PlayerCfg,
    pub level: LevelCfg,
}

impl GameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<GameConfig>(s)
    }
}

/// Read the config file at `path`. A missing file silently yields the
/// defaults; a file that cannot be read or parsed is reported and ignored.
pub fn load_config(path: impl AsRef<Path>) -> GameConfig {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => GameConfig::from_toml_str(&content).unwrap_or_else(|e| {
            tracing::warn!("ignoring {}: {}", path.display(), e);
            GameConfig::default()
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => GameConfig::default(),
        Err(e) => {
            tracing::warn!("could not read {}: {}", path.display(), e);
            GameConfig::default()
        }
    }
}
