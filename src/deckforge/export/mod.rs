//! # Export Serializers
//!
//! Three independent encoders over a [`DeckSnapshot`](crate::ledger::DeckSnapshot):
//!
//! - [`text`]: the line-oriented `"<quantity> <name>"` decklist (and its
//!   parser, used by deck import)
//! - [`lua`]: the Lua image-database table consumed by the tabletop client
//! - [`sheet`]: the paginated print layout, rendered to a printable HTML
//!   document by [`html`]
//!
//! All are pure over a snapshot plus the catalog; sinks (clipboard, file)
//! live with the CLI.

pub mod html;
pub mod lua;
pub mod sheet;
pub mod text;
