use crate::api::Session;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DeckError, Result};
use crate::tally;

/// Add one copy of a named card. The classifier picks the category; a
/// ceiling rejection is an expected outcome and comes back as a warning
/// message, not an error.
pub fn run(session: &mut Session, name: &str) -> Result<CmdResult> {
    let card = session.catalog.find(name)?.clone();
    let mut result = CmdResult::default();

    match session.ledger.add_card(&card) {
        Ok(entry) => {
            let ceiling = entry.category.policy().copy_ceiling;
            result.add_message(CmdMessage::success(format!(
                "Added {} to the {} ({}/{})",
                entry.card_name, entry.category, entry.quantity, ceiling
            )));
        }
        Err(err @ DeckError::LimitExceeded { .. }) => {
            result.add_message(CmdMessage::warning(err.to_string()));
        }
        Err(other) => return Err(other),
    }

    result.tallies = tally::recompute(&session.ledger);
    Ok(result)
}
