use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::content::Difficulty;
use crate::content::texts::{DEFAULT_TEST_DURATION, TEST_DURATIONS};

pub const MIN_GAME_DURATION: u64 = 10;
pub const MAX_GAME_DURATION: u64 = 600;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default = "default_test_duration_secs")]
    pub test_duration_secs: u64,
    #[serde(default = "default_game_duration_secs")]
    pub game_duration_secs: u64,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}
fn default_test_duration_secs() -> u64 {
    DEFAULT_TEST_DURATION
}
fn default_game_duration_secs() -> u64 {
    60
}
fn default_data_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("typeshala")
        .to_string_lossy()
        .to_string()
}
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            difficulty: Difficulty::default(),
            test_duration_secs: default_test_duration_secs(),
            game_duration_secs: default_game_duration_secs(),
            data_dir: default_data_dir(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("typeshala")
            .join("config.toml")
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }

    /// Bring hand-edited values back into range. Call once after loading and
    /// applying command-line overrides. Returns a note per value replaced, for
    /// the caller to log once logging is up.
    pub fn validate(&mut self) -> Vec<String> {
        let mut adjustments = Vec::new();
        if !TEST_DURATIONS.contains(&self.test_duration_secs) {
            adjustments.push(format!(
                "test_duration_secs {} unsupported, using {DEFAULT_TEST_DURATION}",
                self.test_duration_secs
            ));
            self.test_duration_secs = DEFAULT_TEST_DURATION;
        }
        let clamped = self
            .game_duration_secs
            .clamp(MIN_GAME_DURATION, MAX_GAME_DURATION);
        if clamped != self.game_duration_secs {
            adjustments.push(format!(
                "game_duration_secs {} out of range, using {clamped}",
                self.game_duration_secs
            ));
            self.game_duration_secs = clamped;
        }
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir();
            adjustments.push(format!("data_dir blank, using {}", self.data_dir));
        }
        if self.log_filter.trim().is_empty() {
            self.log_filter = default_log_filter();
            adjustments.push(format!("log_filter blank, using {}", self.log_filter));
        }
        adjustments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serde_defaults_from_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "terminal-default");
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.test_duration_secs, 60);
        assert_eq!(config.game_duration_secs, 60);
        assert_eq!(config.log_filter, "info");
        assert!(config.data_dir.contains("typeshala"));
    }

    #[test]
    fn test_config_serde_partial_fields() {
        let toml_str = r#"
theme = "gruvbox-dark"
difficulty = "hard"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme, "gruvbox-dark");
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.test_duration_secs, 60);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let mut config = Config::default();
        config.difficulty = Difficulty::Advanced;
        config.test_duration_secs = 120;
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.difficulty, Difficulty::Advanced);
        assert_eq!(deserialized.test_duration_secs, 120);
        assert_eq!(deserialized.data_dir, config.data_dir);
    }

    #[test]
    fn test_validate_resets_unknown_test_duration() {
        let mut config = Config::default();
        config.test_duration_secs = 45;
        let adjustments = config.validate();
        assert_eq!(config.test_duration_secs, 60);
        assert_eq!(adjustments.len(), 1);
        assert!(adjustments[0].contains("test_duration_secs 45"));

        config.test_duration_secs = 300;
        assert!(config.validate().is_empty());
        assert_eq!(config.test_duration_secs, 300);
    }

    #[test]
    fn test_validate_defaults_need_no_adjustment() {
        let mut config = Config::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_adjustment() {
        let mut config: Config = toml::from_str(
            r#"
test_duration_secs = 7
game_duration_secs = 5
log_filter = ""
"#,
        )
        .unwrap();
        let adjustments = config.validate();
        assert_eq!(adjustments.len(), 3);
        assert!(adjustments[1].contains("game_duration_secs 5"));
        assert!(adjustments[2].starts_with("log_filter"));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_clamps_game_duration() {
        let mut config = Config::default();
        config.game_duration_secs = 0;
        config.validate();
        assert_eq!(config.game_duration_secs, MIN_GAME_DURATION);

        config.game_duration_secs = 10_000;
        config.validate();
        assert_eq!(config.game_duration_secs, MAX_GAME_DURATION);
    }

    #[test]
    fn test_validate_fills_blank_strings() {
        let mut config = Config::default();
        config.data_dir = "  ".to_string();
        config.log_filter = String::new();
        config.validate();
        assert!(config.data_dir.contains("typeshala"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_log_dir_under_data_dir() {
        let mut config = Config::default();
        config.data_dir = "/tmp/typeshala-test".to_string();
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/typeshala-test/logs"));
    }
}
