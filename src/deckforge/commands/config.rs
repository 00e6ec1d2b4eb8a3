use crate::commands::{CmdMessage, CmdResult};
use crate::config::DeckforgeConfig;
use crate::error::Result;
use std::path::Path;

const CONFIG_KEYS: [&str; 3] = ["base-url", "card-back", "catalog"];

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Show or edit the persisted configuration. `Set` writes config.json
/// back to the config directory; bad keys report, they don't fail.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {
            let config = DeckforgeConfig::load(config_dir)?;
            for key in CONFIG_KEYS {
                if let Some(value) = config.get(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
                }
            }
            Ok(result)
        }
        ConfigAction::ShowKey(key) => {
            let config = DeckforgeConfig::load(config_dir)?;
            match config.get(&key) {
                Some(value) => result.add_message(CmdMessage::info(value)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = DeckforgeConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            // Echo the stored form, which may be normalized.
            let display = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_to_the_config_file() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("base-url".into(), "https://cards.test".into()),
        )
        .unwrap();

        let loaded = DeckforgeConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.base_url, "https://cards.test/");
    }

    #[test]
    fn unknown_key_reports_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::Set("font".into(), "x".into())).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Unknown config key")));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_all_lists_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), CONFIG_KEYS.len());
    }

    #[test]
    fn show_key_reads_the_saved_value() {
        let dir = tempfile::tempdir().unwrap();
        run(
            dir.path(),
            ConfigAction::Set("card-back".into(), "firecards/alt-back.png".into()),
        )
        .unwrap();

        let result = run(dir.path(), ConfigAction::ShowKey("card-back".into())).unwrap();
        assert_eq!(result.messages[0].content, "firecards/alt-back.png");
    }
}
