use crate::api::Session;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DeckError, Result};
use crate::export::text::parse_decklist;
use crate::ledger::AddOutcome;
use crate::tally;

/// Import a text decklist. Each line's copies are added in one bulk
/// step, so classification and copy ceilings apply at the same cost for
/// a playset as for a two-billion-token line; unknown names and ceiling
/// overflows become warnings rather than failing the batch.
pub fn run(session: &mut Session, content: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut added = 0u64;

    for (quantity, name) in parse_decklist(content) {
        let card = match session.catalog.find(&name) {
            Ok(card) => card.clone(),
            Err(err) => {
                result.add_message(CmdMessage::warning(format!("Skipped: {}", err)));
                continue;
            }
        };

        match session.ledger.add_copies(&card, quantity) {
            Ok(AddOutcome::Added(n)) => added += u64::from(n),
            Ok(AddOutcome::Clamped {
                added: n,
                category,
                limit,
            }) => {
                added += u64::from(n);
                let err = DeckError::LimitExceeded {
                    name: card.name.clone(),
                    category,
                    limit,
                };
                result.add_message(CmdMessage::warning(err.to_string()));
            }
            Err(err @ DeckError::LimitExceeded { .. }) => {
                result.add_message(CmdMessage::warning(err.to_string()));
            }
            Err(other) => return Err(other),
        }
    }

    result.add_message(CmdMessage::success(format!("Imported {} cards", added)));
    result.tallies = tally::recompute(&session.ledger);
    Ok(result)
}
