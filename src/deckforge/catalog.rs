//! The immutable card catalog.
//!
//! Loaded once from a JSON array at session start; a load failure is fatal
//! to initialization (there is nothing useful to do without cards). After
//! load the catalog only answers lookups and filter queries.

use crate::error::{DeckError, Result};
use crate::model::CardRecord;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<CardRecord>,
}

impl Catalog {
    /// Load the catalog from a JSON file holding an array of card records.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DeckError::CatalogLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let cards: Vec<CardRecord> =
            serde_json::from_str(&content).map_err(|e| DeckError::CatalogLoad {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { cards })
    }

    pub fn from_cards(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }

    /// Exact lookup by name, case-insensitive.
    pub fn get(&self, name: &str) -> Option<&CardRecord> {
        self.cards
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Resolve a user-typed name: exact match first, then a unique
    /// case-insensitive substring match as a convenience for the shell.
    pub fn find(&self, name: &str) -> Result<&CardRecord> {
        if let Some(card) = self.get(name) {
            return Ok(card);
        }

        let needle = name.trim().to_lowercase();
        if needle.is_empty() {
            return Err(DeckError::CardNotFound(name.to_string()));
        }

        let matches: Vec<&CardRecord> = self
            .cards
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect();

        match matches.as_slice() {
            [] => Err(DeckError::CardNotFound(name.to_string())),
            [card] => Ok(*card),
            many => Err(DeckError::Api(format!(
                "Ambiguous card name \"{}\" ({} matches, e.g. {})",
                name,
                many.len(),
                many[0].name
            ))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards passing the filter, in catalog order.
    pub fn filter(&self, filter: &CardFilter) -> Vec<&CardRecord> {
        self.cards.iter().filter(|c| filter.matches(c)).collect()
    }
}

/// Combined search-and-filter controls over the catalog, mirroring the
/// gallery: text fields match as case-insensitive substrings, the type and
/// faction dropdowns match exactly, and the starting-gear/tokens toggles
/// restrict to cards whose cost carries the matching marker. Unset fields
/// are wildcards.
#[derive(Debug, Clone, Default)]
pub struct CardFilter {
    pub name: Option<String>,
    pub effect: Option<String>,
    pub ronum: Option<String>,
    pub sub_type: Option<String>,
    pub power: Option<String>,
    pub off_guard_power: Option<String>,
    pub endurance: Option<String>,
    pub experience: Option<String>,
    pub hands: Option<String>,
    pub action_speed: Option<String>,
    pub card_type: Option<String>,
    pub faction: Option<String>,
    pub starting_gear: bool,
    pub tokens: bool,
}

impl CardFilter {
    pub fn matches(&self, card: &CardRecord) -> bool {
        if self.starting_gear || self.tokens {
            let cost = card.cost.to_lowercase();
            let gear_hit = self.starting_gear && cost.contains("starting gear");
            let token_hit = self.tokens && cost.contains("token");
            if !gear_hit && !token_hit {
                return false;
            }
        }

        let substring = [
            (&self.name, &card.name),
            (&self.effect, &card.effect),
            (&self.ronum, &card.ronum),
            (&self.sub_type, &card.sub_type),
            (&self.power, &card.power),
            (&self.off_guard_power, &card.off_guard_power),
            (&self.endurance, &card.endurance),
            (&self.experience, &card.experience),
            (&self.hands, &card.hands),
            (&self.action_speed, &card.action_speed),
        ];
        for (query, value) in substring {
            if let Some(q) = active(query) {
                if !value.to_lowercase().contains(&q) {
                    return false;
                }
            }
        }

        // Dropdown-style controls: whole-value match.
        let exact = [(&self.card_type, &card.card_type), (&self.faction, &card.faction)];
        for (query, value) in exact {
            if let Some(q) = active(query) {
                if value.to_lowercase() != q {
                    return false;
                }
            }
        }

        true
    }
}

/// Normalizes a control value; empty and "all" mean "no constraint".
fn active(query: &Option<String>) -> Option<String> {
    let q = query.as_deref()?.trim().to_lowercase();
    if q.is_empty() || q == "all" {
        None
    } else {
        Some(q)
    }
}
