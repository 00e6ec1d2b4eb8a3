//! Business logic for each user-facing operation. Command modules operate
//! on the [`Session`](crate::api::Session) and return structured
//! [`CmdResult`] values; no terminal or file I/O happens here, so every
//! command is unit-testable against an in-memory session.

use crate::ledger::DeckSnapshot;
use crate::model::{CardRecord, DeckCategory};
use crate::tally::CategoryTally;
use std::collections::BTreeMap;

pub mod add;
pub mod config;
pub mod deck;
pub mod export_lua;
pub mod export_sheet;
pub mod export_text;
pub mod gallery;
pub mod import;
pub mod quantity;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Generated export content plus enough context for the CLI to pick a
/// sink and a fallback.
#[derive(Debug, Clone)]
pub struct ExportPayload {
    /// Human label for messages ("decklist", "Lua database", ...).
    pub label: String,
    pub content: String,
    /// Default file name when the user gives no --out path.
    pub suggested_name: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub deck: Option<DeckSnapshot>,
    pub tallies: BTreeMap<DeckCategory, CategoryTally>,
    pub gallery: Vec<CardRecord>,
    pub export: Option<ExportPayload>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_deck(mut self, deck: DeckSnapshot) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn with_tallies(mut self, tallies: BTreeMap<DeckCategory, CategoryTally>) -> Self {
        self.tallies = tallies;
        self
    }

    pub fn with_gallery(mut self, cards: Vec<CardRecord>) -> Self {
        self.gallery = cards;
        self
    }

    pub fn with_export(mut self, export: ExportPayload) -> Self {
        self.export = Some(export);
        self
    }
}
