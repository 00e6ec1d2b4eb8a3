use crate::api::Session;
use crate::commands::{CmdMessage, CmdResult, ExportPayload};
use crate::error::{DeckError, Result};
use crate::export::html;
use crate::export::sheet::{self, ImageSource, SheetSpec};
use chrono::Utc;

/// Lay out the printable sheet and render it to an HTML document. Tokens
/// never print, so a deck holding only tokens counts as empty here.
pub fn run(session: &Session, spec: SheetSpec, source: &dyn ImageSource) -> Result<CmdResult> {
    let snapshot = session.ledger.snapshot();
    let layout = sheet::layout(&snapshot, &session.catalog, spec, source);
    if layout.pages.is_empty() {
        return Err(DeckError::EmptyExport);
    }

    let mut result = CmdResult::default();
    for name in &layout.unresolved {
        result.add_message(CmdMessage::warning(format!(
            "No image for {}; using a placeholder",
            name
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "Laid out {} page(s)",
        layout.pages.len()
    )));

    let content = html::render(&layout, "Soul Forger deck sheet");
    Ok(result.with_export(ExportPayload {
        label: "print sheet".to_string(),
        content,
        suggested_name: format!("deck-sheet-{}.html", Utc::now().format("%Y-%m-%d")),
    }))
}
