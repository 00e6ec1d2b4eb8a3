//! Terminal client for the deck-building library: output formatting, the
//! interactive shell, and the export sinks with their fallbacks. Nothing
//! below `api.rs` knows any of this exists.

pub mod print;
pub mod shell;
pub mod sink;
