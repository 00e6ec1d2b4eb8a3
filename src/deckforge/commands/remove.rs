use crate::api::Session;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::DeckCategory;
use crate::tally;

/// Delete an entry outright. Idempotent: removing an absent card just
/// reports that nothing happened.
pub fn run(session: &mut Session, category: DeckCategory, name: &str) -> Result<CmdResult> {
    let removed = session.ledger.remove_card(category, name);
    let mut result = CmdResult::default();

    if removed {
        result.add_message(CmdMessage::success(format!(
            "{} removed from the {}",
            name, category
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} was not in the {}",
            name, category
        )));
    }

    result.tallies = tally::recompute(&session.ledger);
    Ok(result)
}
