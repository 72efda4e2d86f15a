use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.toml";

pub const DEFAULT_SCALE: i64 = 3;
pub const MIN_SCALE: i64 = 1;
pub const MAX_SCALE: i64 = 4;

/// Gamepad indices for A, B, Select, Start, Up, Down, Left, Right.
pub const DEFAULT_BIND: [i32; 8] = [0, 1, 4, 6, 11, 12, 13, 14];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub scale: i64,
    pub show_debug: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            show_debug: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GamepadConfig {
    pub enabled: bool,
    pub bind: Vec<i32>,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind: DEFAULT_BIND.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub video: VideoConfig,
    pub gamepad: GamepadConfig,
}

impl Config {
    /// Window scale factor, clamped to the supported range.
    pub fn scale(&self) -> u32 {
        self.video.scale.clamp(MIN_SCALE, MAX_SCALE) as u32
    }

    /// The eight-entry button binding, or the default when the configured
    /// array has the wrong length.
    pub fn bind(&self) -> [i32; 8] {
        <[i32; 8]>::try_from(self.gamepad.bind.as_slice()).unwrap_or(DEFAULT_BIND)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(text)?;
        if !(MIN_SCALE..=MAX_SCALE).contains(&config.video.scale) {
            warn!(
                "video.scale {} out of range, using {}",
                config.video.scale,
                config.scale()
            );
        }
        if config.gamepad.bind.len() != DEFAULT_BIND.len() {
            warn!(
                "gamepad.bind has {} entries instead of 8, using the default binding",
                config.gamepad.bind.len()
            );
        }
        Ok(config)
    }
}

/// Read the configuration, falling back to defaults when the file is absent
/// or malformed.
pub fn load_from_file(path: &Path) -> Config {
    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => return Config::default(),
    };

    match Config::parse(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(
                "Failed to parse config {}: {e}; using defaults",
                path.display()
            );
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.scale(), 3);
        assert!(!config.video.show_debug);
        assert!(config.gamepad.enabled);
        assert_eq!(config.bind(), DEFAULT_BIND);
    }

    #[test]
    fn full_document() {
        let config = Config::parse(
            r#"
            [video]
            scale = 2
            show_debug = true

            [gamepad]
            enabled = false
            bind = [7, 6, 5, 4, 3, 2, 1, 0]
            "#,
        )
        .unwrap();
        assert_eq!(config.scale(), 2);
        assert!(config.video.show_debug);
        assert!(!config.gamepad.enabled);
        assert_eq!(config.bind(), [7, 6, 5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = Config::parse("[video]\nshow_debug = true\n").unwrap();
        assert_eq!(config.scale(), 3);
        assert!(config.gamepad.enabled);
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn scale_is_clamped() {
        assert_eq!(Config::parse("[video]\nscale = 9").unwrap().scale(), 4);
        assert_eq!(Config::parse("[video]\nscale = 0").unwrap().scale(), 1);
        assert_eq!(Config::parse("[video]\nscale = -5").unwrap().scale(), 1);
    }

    #[test]
    fn short_binding_falls_back() {
        let config = Config::parse("[gamepad]\nbind = [1, 2, 3]").unwrap();
        assert_eq!(config.bind(), DEFAULT_BIND);
        assert!(config.gamepad.enabled);
    }

    #[test]
    fn file_loading_tolerates_missing_and_broken_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        let missing = dir.join("absent.toml");
        assert_eq!(load_from_file(&missing), Config::default());

        let broken = dir.join("broken.toml");
        std::fs::write(&broken, "[video\nscale = ").unwrap();
        assert_eq!(load_from_file(&broken), Config::default());

        let good = dir.join("good.toml");
        std::fs::write(&good, "[video]\nscale = 1\n").unwrap();
        assert_eq!(load_from_file(&good).scale(), 1);
    }
}
