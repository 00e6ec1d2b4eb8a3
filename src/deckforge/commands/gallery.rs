use crate::api::Session;
use crate::catalog::CardFilter;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Search and filter the catalog with the combined gallery controls.
pub fn run(session: &Session, filter: &CardFilter) -> Result<CmdResult> {
    let hits: Vec<_> = session.catalog.filter(filter).into_iter().cloned().collect();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} of {} cards match",
        hits.len(),
        session.catalog.len()
    )));
    Ok(result.with_gallery(hits))
}
