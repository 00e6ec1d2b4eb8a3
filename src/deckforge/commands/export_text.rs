use crate::api::Session;
use crate::commands::{CmdResult, ExportPayload};
use crate::error::{DeckError, Result};
use crate::export::text::{self, TextOptions};
use chrono::Utc;

/// Render the plain-text decklist. Fails with `EmptyExport` before any
/// sink is touched when the selected scope has nothing in it.
pub fn run(session: &Session, options: &TextOptions) -> Result<CmdResult> {
    let content = text::render(&session.ledger.snapshot(), options);
    if content.is_empty() {
        return Err(DeckError::EmptyExport);
    }

    Ok(CmdResult::default().with_export(ExportPayload {
        label: "decklist".to_string(),
        content,
        suggested_name: format!("deck-{}.txt", Utc::now().format("%Y-%m-%d")),
    }))
}
