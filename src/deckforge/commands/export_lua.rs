use crate::api::Session;
use crate::commands::{CmdResult, ExportPayload};
use crate::config::DeckforgeConfig;
use crate::error::{DeckError, Result};
use crate::export::lua;
use chrono::Utc;

/// Render the Lua image-database table for the current deck.
pub fn run(session: &Session, config: &DeckforgeConfig) -> Result<CmdResult> {
    if session.ledger.is_empty() {
        return Err(DeckError::EmptyExport);
    }

    let content = lua::render(
        &session.ledger.snapshot(),
        &session.catalog,
        &config.base_url,
        &config.card_back_path,
    );

    Ok(CmdResult::default().with_export(ExportPayload {
        label: "Lua database".to_string(),
        content,
        suggested_name: format!("deck-{}.lua", Utc::now().format("%Y-%m-%d")),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::CardRecord;

    #[test]
    fn empty_deck_errors_before_rendering() {
        let session = Session::new(Catalog::from_cards(vec![]));
        assert!(matches!(
            run(&session, &DeckforgeConfig::default()),
            Err(DeckError::EmptyExport)
        ));
    }

    #[test]
    fn renders_with_configured_base_url() {
        let catalog = Catalog::from_cards(vec![CardRecord {
            name: "Fire Bolt".into(),
            cost: "2".into(),
            card_type: "Action".into(),
            image: "(firecards/firebolt.png)".into(),
            ..CardRecord::default()
        }]);
        let mut session = Session::new(catalog);
        let card = session.catalog.get("Fire Bolt").unwrap().clone();
        session.ledger.add_card(&card).unwrap();

        let config = DeckforgeConfig {
            base_url: "https://example.test/".into(),
            ..DeckforgeConfig::default()
        };
        let payload = run(&session, &config).unwrap().export.unwrap();
        assert!(payload
            .content
            .contains("[\"Fire Bolt\"] = \"https://example.test/firecards/firebolt.png\""));
        assert!(payload.suggested_name.ends_with(".lua"));
    }
}
