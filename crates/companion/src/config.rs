//! Companion tuning values and their loaders.
use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Timings are in seconds, distances in world units.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    /// How long a deployed turret stays active.
    pub turret_duration: f32,
    /// Time between the end of one turret and the next.
    pub turret_cooldown: f32,
    pub shoot_cooldown: f32,
    pub heal_cooldown: f32,
    /// Time between idle voice lines.
    pub conversation_interval: f32,
    pub pickup_distance: f32,
    pub drop_distance: f32,
    /// Height the companion rises to when it wakes up.
    pub intro_height_offset: f32,
    pub intro_completion_distance: f32,
    /// Hover height above the player, healing station and turret anchor.
    pub ray_length: f32,
    pub move_speed: f32,

    // ===== simulation driver =====
    pub frame_delta: f32,
    pub frames: u32,
}

impl CompanionConfig {
    pub const DEFAULT_FRAME_DELTA: f32 = 1.0 / 60.0;
    pub const DEFAULT_FRAMES: u32 = 60 * 60;

    /// Parses a RON document. Missing fields keep their defaults.
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str::<Self>(source).map(Self::clamped)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `COMPANION_CONFIG` - RON file loaded before the overrides below (default: none)
    /// - `COMPANION_FRAMES` - Number of simulated frames (default: 3600)
    /// - `COMPANION_FRAME_DELTA` - Seconds per frame (default: 1/60)
    /// - `COMPANION_MOVE_SPEED` - Units per second (default: 400)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match env::var_os("COMPANION_CONFIG") {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(frames) = read_env::<u32>("COMPANION_FRAMES") {
            config.frames = frames;
        }

        if let Some(delta) = read_env::<f32>("COMPANION_FRAME_DELTA") {
            config.frame_delta = delta;
        }

        if let Some(speed) = read_env::<f32>("COMPANION_MOVE_SPEED") {
            config.move_speed = speed;
        }

        Ok(config.clamped())
    }

    /// Frames must advance time and the companion cannot move backwards.
    fn clamped(mut self) -> Self {
        self.frame_delta = self.frame_delta.max(f32::EPSILON);
        self.move_speed = self.move_speed.max(0.0);
        self
    }
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            turret_duration: 10.0,
            turret_cooldown: 20.0,
            shoot_cooldown: 1.0,
            heal_cooldown: 15.0,
            conversation_interval: 50.0,
            pickup_distance: 100.0,
            drop_distance: 100.0,
            intro_height_offset: 130.0,
            intro_completion_distance: 25.0,
            ray_length: 200.0,
            move_speed: 400.0,
            frame_delta: Self::DEFAULT_FRAME_DELTA,
            frames: Self::DEFAULT_FRAMES,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
