//! # API Facade
//!
//! [`DeckApi`] is the single entry point for every deck-building
//! operation, whatever UI sits on top. It owns the [`Session`] (catalog +
//! ledger) and the effective configuration, normalizes inputs, dispatches
//! to the command modules, and hands back structured
//! [`CmdResult`](crate::commands::CmdResult) values.
//!
//! No business logic lives here (that belongs in `commands/*.rs`) and no
//! I/O happens here (that belongs to the CLI); this layer only wires the
//! two together.

use crate::catalog::{Catalog, CardFilter};
use crate::commands;
use crate::config::DeckforgeConfig;
use crate::error::Result;
use crate::export::sheet::{ImageSource, SheetSpec, UrlImageSource};
use crate::export::text::TextOptions;
use crate::ledger::Ledger;
use crate::model::DeckCategory;

/// One deck-building session: the loaded catalog plus the mutable ledger.
/// Constructed once after the catalog loads; the ledger starts empty and
/// lives only as long as the session.
#[derive(Debug)]
pub struct Session {
    pub catalog: Catalog,
    pub ledger: Ledger,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ledger: Ledger::new(),
        }
    }
}

pub struct DeckApi {
    session: Session,
    config: DeckforgeConfig,
}

impl DeckApi {
    pub fn new(catalog: Catalog, config: DeckforgeConfig) -> Self {
        Self {
            session: Session::new(catalog),
            config,
        }
    }

    pub fn add_card(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.session, name)
    }

    pub fn set_quantity(
        &mut self,
        category: DeckCategory,
        name: &str,
        quantity: u32,
    ) -> Result<commands::CmdResult> {
        commands::quantity::run(&mut self.session, category, name, quantity)
    }

    pub fn remove_card(&mut self, category: DeckCategory, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.session, category, name)
    }

    pub fn deck(&self) -> Result<commands::CmdResult> {
        commands::deck::run(&self.session)
    }

    pub fn gallery(&self, filter: &CardFilter) -> Result<commands::CmdResult> {
        commands::gallery::run(&self.session, filter)
    }

    pub fn import_deck(&mut self, decklist: &str) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.session, decklist)
    }

    pub fn export_text(&self, options: &TextOptions) -> Result<commands::CmdResult> {
        commands::export_text::run(&self.session, options)
    }

    pub fn export_lua(&self) -> Result<commands::CmdResult> {
        commands::export_lua::run(&self.session, &self.config)
    }

    pub fn export_sheet(&self, spec: SheetSpec) -> Result<commands::CmdResult> {
        let source = UrlImageSource::new(self.config.base_url.clone());
        commands::export_sheet::run(&self.session, spec, &source)
    }

    /// Sheet export with a caller-supplied image source (tests, local
    /// asset directories).
    pub fn export_sheet_with(
        &self,
        spec: SheetSpec,
        source: &dyn ImageSource,
    ) -> Result<commands::CmdResult> {
        commands::export_sheet::run(&self.session, spec, source)
    }

    /// Start over with an empty deck. The catalog stays loaded.
    pub fn clear_deck(&mut self) -> Result<commands::CmdResult> {
        self.session.ledger.clear();
        let mut result = commands::CmdResult::default();
        result.add_message(commands::CmdMessage::success("Deck cleared"));
        Ok(result)
    }

    pub fn config(&self) -> &DeckforgeConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
