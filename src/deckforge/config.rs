use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_BASE_URL: &str = "https://soul-forger.com/";
pub const DEFAULT_CARD_BACK: &str = "firecards/cardback.png";
pub const DEFAULT_CATALOG: &str = "SFD.json";

/// Configuration for deckforge, stored as config.json in the user config
/// directory. Every field has a working default; CLI flags override.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckforgeConfig {
    /// Prefix for every card image URL (Lua export, sheet export).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Card-back image path appended to `base_url` in the Lua export.
    #[serde(default = "default_card_back")]
    pub card_back_path: String,

    /// Catalog file to load when `--catalog` is not given.
    #[serde(default = "default_catalog")]
    pub catalog_path: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_card_back() -> String {
    DEFAULT_CARD_BACK.to_string()
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

impl Default for DeckforgeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            card_back_path: default_card_back(),
            catalog_path: default_catalog(),
        }
    }
}

impl DeckforgeConfig {
    /// Load from the given directory, or return defaults if absent.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        let config: DeckforgeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Keyed read access for the `config` command.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "base-url" => Some(self.base_url.clone()),
            "card-back" => Some(self.card_back_path.clone()),
            "catalog" => Some(self.catalog_path.clone()),
            _ => None,
        }
    }

    /// Keyed write access for the `config` command. The base URL is
    /// normalized to end with a slash, since exports build image URLs by
    /// plain concatenation.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "base-url" => {
                self.base_url = if value.ends_with('/') {
                    value.to_string()
                } else {
                    format!("{}/", value)
                };
                Ok(())
            }
            "card-back" => {
                self.card_back_path = value.to_string();
                Ok(())
            }
            "catalog" => {
                self.catalog_path = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_soul_forger() {
        let config = DeckforgeConfig::default();
        assert_eq!(config.base_url, "https://soul-forger.com/");
        assert_eq!(config.card_back_path, "firecards/cardback.png");
        assert_eq!(config.catalog_path, "SFD.json");
    }

    #[test]
    fn load_missing_dir_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckforgeConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, DeckforgeConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeckforgeConfig {
            base_url: "https://example.test/".into(),
            ..DeckforgeConfig::default()
        };
        config.save(dir.path()).unwrap();

        let loaded = DeckforgeConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn set_base_url_normalizes_trailing_slash() {
        let mut config = DeckforgeConfig::default();
        config.set("base-url", "https://cards.test").unwrap();
        assert_eq!(config.base_url, "https://cards.test/");
        assert_eq!(config.get("base-url").as_deref(), Some("https://cards.test/"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = DeckforgeConfig::default();
        assert!(config.set("font", "comic-sans").is_err());
        assert!(config.get("font").is_none());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: DeckforgeConfig =
            serde_json::from_str(r#"{"base_url": "https://example.test/"}"#).unwrap();
        assert_eq!(config.base_url, "https://example.test/");
        assert_eq!(config.card_back_path, DEFAULT_CARD_BACK);
    }
}
