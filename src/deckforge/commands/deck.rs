use crate::api::Session;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::tally;

/// The current deck: a snapshot plus fresh per-category tallies.
pub fn run(session: &Session) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_deck(session.ledger.snapshot())
        .with_tallies(tally::recompute(&session.ledger)))
}
