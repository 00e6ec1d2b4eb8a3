use crate::api::Session;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::ledger::SetOutcome;
use crate::model::DeckCategory;
use crate::tally;

/// Set an entry's quantity directly (the numeric edit control). Overflow
/// clamps to the ceiling with a warning; zero removes the entry.
pub fn run(
    session: &mut Session,
    category: DeckCategory,
    name: &str,
    quantity: u32,
) -> Result<CmdResult> {
    let outcome = session.ledger.set_quantity(category, name, quantity)?;
    let mut result = CmdResult::default();

    match outcome {
        SetOutcome::Set(q) => {
            result.add_message(CmdMessage::success(format!(
                "{} set to {} in the {}",
                name, q, category
            )));
        }
        SetOutcome::Clamped(cap) => {
            result.add_message(CmdMessage::warning(format!(
                "{} is capped at {} in the {}; quantity clamped",
                name, cap, category
            )));
        }
        SetOutcome::Removed => {
            result.add_message(CmdMessage::info(format!(
                "{} removed from the {}",
                name, category
            )));
        }
    }

    result.tallies = tally::recompute(&session.ledger);
    Ok(result)
}
