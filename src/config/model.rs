//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so a partial (or absent) config file works.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding `adjectives.txt` / `animals.txt`. `None` uses the
    /// packaged lists.
    #[serde(default)]
    pub resources: Option<PathBuf>,
    #[serde(default)]
    pub watch: WatchConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Hot-reload polling settings for file-backed word lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_watch_interval")]
    pub interval_secs: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: default_watch_interval(),
        }
    }
}

/// Settings for a single generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// How many adjectives to draw (concatenated without a separator).
    #[serde(default = "default_word_count")]
    pub adjective_count: usize,
    /// How many animals to draw.
    #[serde(default = "default_word_count")]
    pub animal_count: usize,
    /// Literal placed between the adjective block and the animal block.
    #[serde(default)]
    pub separator: String,
    /// Fold the result to lowercase (after the leetspeak transform).
    #[serde(default)]
    pub to_lower: bool,
    /// Apply the leetspeak transform.
    #[serde(default)]
    pub fancy: bool,
    /// Truncate the assembled name to this many characters, before any
    /// numeric suffix. Must be greater than zero when set.
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Append a random number to the name.
    #[serde(default)]
    pub add_numbers: bool,
    /// Inclusive lower bound of the numeric suffix.
    #[serde(default = "default_min_numbers")]
    pub min_numbers_value: u32,
    /// Exclusive upper bound of the numeric suffix.
    #[serde(default = "default_max_numbers")]
    pub max_numbers_value: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            adjective_count: default_word_count(),
            animal_count: default_word_count(),
            separator: String::new(),
            to_lower: false,
            fancy: false,
            max_length: None,
            add_numbers: false,
            min_numbers_value: default_min_numbers(),
            max_numbers_value: default_max_numbers(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_watch_interval() -> u64 {
    2
}
fn default_word_count() -> usize {
    1
}
fn default_min_numbers() -> u32 {
    1
}
fn default_max_numbers() -> u32 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.resources.is_none());
        assert!(config.watch.enabled);
        assert_eq!(config.watch.interval_secs, 2);
        assert_eq!(config.generation.adjective_count, 1);
        assert_eq!(config.generation.animal_count, 1);
        assert_eq!(config.generation.separator, "");
        assert_eq!(config.generation.min_numbers_value, 1);
        assert_eq!(config.generation.max_numbers_value, 1000);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            resources = "/tmp/words"

            [generation]
            separator = "-"
            to_lower = true
            "#,
        )
        .unwrap();
        assert_eq!(config.resources, Some(PathBuf::from("/tmp/words")));
        assert_eq!(config.generation.separator, "-");
        assert!(config.generation.to_lower);
        assert_eq!(config.generation.adjective_count, 1);
        assert!(config.watch.enabled);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = AppConfig::default();
        config.generation.max_length = Some(16);
        config.generation.add_numbers = true;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.generation.max_length, Some(16));
        assert!(parsed.generation.add_numbers);
    }
}
