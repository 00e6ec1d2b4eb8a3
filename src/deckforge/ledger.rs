//! # Deck Ledger
//!
//! The one piece of mutable session state: which cards, at what
//! quantities, sit in which deck bucket. The ledger enforces the per-card
//! copy ceilings on every mutation; category size limits are a reporting
//! concern and live in [`crate::tally`].
//!
//! Invariants held here:
//! - at most one entry per (category, card name) pair
//! - `1 <= quantity <= copy ceiling` for every entry
//! - insertion order within a category is preserved, so displays and
//!   exports are deterministic
//!
//! All mutations run synchronously to completion; there is exactly one
//! actor per session and no interior locking.

use crate::classify::classify;
use crate::error::{DeckError, Result};
use crate::model::{CardRecord, DeckCategory, DeckEntry};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    categories: BTreeMap<DeckCategory, Vec<DeckEntry>>,
}

/// What a bulk add ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Every requested copy fit under the ceiling.
    Added(u32),
    /// The ceiling admitted only part of the request.
    Clamped {
        added: u32,
        category: DeckCategory,
        limit: u32,
    },
}

/// What a quantity edit ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Quantity applied as requested.
    Set(u32),
    /// Requested quantity exceeded the ceiling; capped there instead.
    Clamped(u32),
    /// Requested quantity was below one; the entry was removed.
    Removed,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one copy of a card. The target category is computed fresh from
    /// the card's classification; an existing entry is incremented, a new
    /// one appended at quantity 1. Fails with `LimitExceeded` (and no
    /// mutation) when the entry already sits at its copy ceiling.
    pub fn add_card(&mut self, card: &CardRecord) -> Result<&DeckEntry> {
        let classification = classify(card);
        let category = classification.category;
        let ceiling = classification.copy_ceiling;
        let entries = self.categories.entry(category).or_default();

        if let Some(pos) = entries.iter().position(|e| e.card_name == card.name) {
            let quantity = entries[pos].quantity;
            if !ceiling.allows(quantity + 1) {
                return Err(DeckError::LimitExceeded {
                    name: card.name.clone(),
                    category,
                    // Unlimited ceilings never reject, so a bound exists here.
                    limit: ceiling.bound().unwrap_or(u32::MAX),
                });
            }
            entries[pos].quantity += 1;
            Ok(&entries[pos])
        } else {
            // Quantity 1 is always legal: every ceiling is at least 1.
            entries.push(DeckEntry {
                card_name: card.name.clone(),
                category,
                quantity: 1,
            });
            Ok(entries.last().expect("just pushed"))
        }
    }

    /// Add several copies in one step. The admissible target quantity is
    /// computed once, so the cost does not grow with the copy count; a
    /// decklist line of two billion tokens lands as one entry update.
    /// Fails with `LimitExceeded` (and no mutation) when the entry is
    /// already at its ceiling.
    pub fn add_copies(&mut self, card: &CardRecord, copies: u32) -> Result<AddOutcome> {
        if copies == 0 {
            return Ok(AddOutcome::Added(0));
        }

        let classification = classify(card);
        let category = classification.category;
        let ceiling = classification.copy_ceiling;
        let entries = self.categories.entry(category).or_default();
        let pos = entries.iter().position(|e| e.card_name == card.name);
        let current = pos.map(|p| entries[p].quantity).unwrap_or(0);

        let target = match ceiling.bound() {
            Some(cap) => current.saturating_add(copies).min(cap),
            None => current.saturating_add(copies),
        };
        if target == current {
            return Err(DeckError::LimitExceeded {
                name: card.name.clone(),
                category,
                limit: ceiling.bound().unwrap_or(u32::MAX),
            });
        }

        match pos {
            Some(p) => entries[p].quantity = target,
            None => entries.push(DeckEntry {
                card_name: card.name.clone(),
                category,
                quantity: target,
            }),
        }

        let added = target - current;
        if added < copies {
            Ok(AddOutcome::Clamped {
                added,
                category,
                // Only a bounded ceiling can shrink the request.
                limit: ceiling.bound().unwrap_or(u32::MAX),
            })
        } else {
            Ok(AddOutcome::Added(added))
        }
    }

    /// Set an entry's quantity outright (the numeric edit control).
    /// Quantities above the ceiling clamp to it; zero removes the entry.
    pub fn set_quantity(
        &mut self,
        category: DeckCategory,
        name: &str,
        quantity: u32,
    ) -> Result<SetOutcome> {
        if quantity < 1 {
            self.remove_card(category, name);
            return Ok(SetOutcome::Removed);
        }

        let entries = self.categories.entry(category).or_default();
        let pos = entries
            .iter()
            .position(|e| e.card_name == name)
            .ok_or_else(|| DeckError::NotInDeck {
                name: name.to_string(),
                category,
            })?;

        let ceiling = category.policy().copy_ceiling;
        if ceiling.allows(quantity) {
            entries[pos].quantity = quantity;
            Ok(SetOutcome::Set(quantity))
        } else {
            let cap = ceiling.bound().expect("bounded ceiling rejected a quantity");
            entries[pos].quantity = cap;
            Ok(SetOutcome::Clamped(cap))
        }
    }

    /// Delete an entry outright, whatever its quantity. Removing an
    /// absent entry is a no-op, not an error.
    pub fn remove_card(&mut self, category: DeckCategory, name: &str) -> bool {
        match self.categories.get_mut(&category) {
            Some(entries) => {
                let before = entries.len();
                entries.retain(|e| e.card_name != name);
                entries.len() != before
            }
            None => false,
        }
    }

    pub fn entry(&self, category: DeckCategory, name: &str) -> Option<&DeckEntry> {
        self.categories
            .get(&category)?
            .iter()
            .find(|e| e.card_name == name)
    }

    /// Entries of one category in insertion order.
    pub fn entries(&self, category: DeckCategory) -> &[DeckEntry] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// A read-only copy of the current state, the input to the tally and
    /// every exporter.
    pub fn snapshot(&self) -> DeckSnapshot {
        DeckSnapshot {
            categories: self.categories.clone(),
        }
    }
}

/// Point-in-time view of the ledger. Owns its data, so exports stay
/// consistent even if the ledger mutates afterwards.
#[derive(Debug, Clone, Default)]
pub struct DeckSnapshot {
    categories: BTreeMap<DeckCategory, Vec<DeckEntry>>,
}

impl DeckSnapshot {
    pub fn category(&self, category: DeckCategory) -> &[DeckEntry] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    pub fn entries(&self) -> impl Iterator<Item = &DeckEntry> {
        DeckCategory::ALL
            .into_iter()
            .flat_map(|c| self.category(c).iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gear(name: &str) -> CardRecord {
        CardRecord {
            name: name.into(),
            cost: "Starting Gear".into(),
            card_type: "Equipment".into(),
            ..CardRecord::default()
        }
    }

    fn creature(name: &str) -> CardRecord {
        CardRecord {
            name: name.into(),
            cost: "3".into(),
            card_type: "Creature".into(),
            ..CardRecord::default()
        }
    }

    fn token(name: &str) -> CardRecord {
        CardRecord {
            name: name.into(),
            cost: "Token".into(),
            card_type: "Creature".into(),
            ..CardRecord::default()
        }
    }

    #[test]
    fn first_add_creates_entry_at_one() {
        let mut ledger = Ledger::new();
        let entry = ledger.add_card(&creature("Ash Walker")).unwrap();
        assert_eq!(entry.category, DeckCategory::MainDeck);
        assert_eq!(entry.quantity, 1);
    }

    #[test]
    fn starting_gear_rejects_second_copy() {
        let mut ledger = Ledger::new();
        let card = gear("Traveler's Pack");
        ledger.add_card(&card).unwrap();

        let err = ledger.add_card(&card).unwrap_err();
        assert!(matches!(
            err,
            DeckError::LimitExceeded { limit: 1, .. }
        ));
        // No mutation on rejection.
        assert_eq!(
            ledger
                .entry(DeckCategory::StartingGear, "Traveler's Pack")
                .unwrap()
                .quantity,
            1
        );
    }

    #[test]
    fn main_deck_caps_at_four_copies() {
        let mut ledger = Ledger::new();
        let card = creature("Ash Walker");
        for expected in 1..=4u32 {
            let entry = ledger.add_card(&card).unwrap();
            assert_eq!(entry.quantity, expected);
        }
        assert!(ledger.add_card(&card).is_err());
        assert_eq!(
            ledger.entry(DeckCategory::MainDeck, "Ash Walker").unwrap().quantity,
            4
        );
    }

    #[test]
    fn tokens_have_no_ceiling() {
        let mut ledger = Ledger::new();
        let card = token("Ember Sprite");
        for _ in 0..12 {
            ledger.add_card(&card).unwrap();
        }
        assert_eq!(
            ledger.entry(DeckCategory::Tokens, "Ember Sprite").unwrap().quantity,
            12
        );
    }

    #[test]
    fn one_entry_per_name_per_category() {
        let mut ledger = Ledger::new();
        let card = creature("Ash Walker");
        ledger.add_card(&card).unwrap();
        ledger.add_card(&card).unwrap();
        assert_eq!(ledger.entries(DeckCategory::MainDeck).len(), 1);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut ledger = Ledger::new();
        ledger.add_card(&creature("Zeta")).unwrap();
        ledger.add_card(&creature("Alpha")).unwrap();
        ledger.add_card(&creature("Zeta")).unwrap();

        let names: Vec<_> = ledger
            .entries(DeckCategory::MainDeck)
            .iter()
            .map(|e| e.card_name.as_str())
            .collect();
        assert_eq!(names, ["Zeta", "Alpha"]);
    }

    #[test]
    fn add_copies_clamps_to_the_ceiling() {
        let mut ledger = Ledger::new();
        let card = creature("Ash Walker");
        ledger.add_card(&card).unwrap();

        let outcome = ledger.add_copies(&card, 6).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::Clamped {
                added: 3,
                category: DeckCategory::MainDeck,
                limit: 4,
            }
        );
        assert_eq!(
            ledger.entry(DeckCategory::MainDeck, "Ash Walker").unwrap().quantity,
            4
        );
    }

    #[test]
    fn add_copies_at_the_ceiling_rejects_without_mutation() {
        let mut ledger = Ledger::new();
        let card = gear("Traveler's Pack");
        ledger.add_card(&card).unwrap();

        let err = ledger.add_copies(&card, 3).unwrap_err();
        assert!(matches!(err, DeckError::LimitExceeded { limit: 1, .. }));
        assert_eq!(
            ledger
                .entry(DeckCategory::StartingGear, "Traveler's Pack")
                .unwrap()
                .quantity,
            1
        );
    }

    #[test]
    fn huge_token_batches_land_as_one_entry_update() {
        let mut ledger = Ledger::new();
        let card = token("Ember Sprite");

        let outcome = ledger.add_copies(&card, 2_000_000_000).unwrap();
        assert_eq!(outcome, AddOutcome::Added(2_000_000_000));
        assert_eq!(
            ledger.entry(DeckCategory::Tokens, "Ember Sprite").unwrap().quantity,
            2_000_000_000
        );
    }

    #[test]
    fn set_quantity_clamps_to_ceiling() {
        let mut ledger = Ledger::new();
        ledger.add_card(&creature("Ash Walker")).unwrap();

        let outcome = ledger
            .set_quantity(DeckCategory::MainDeck, "Ash Walker", 9)
            .unwrap();
        assert_eq!(outcome, SetOutcome::Clamped(4));
        assert_eq!(
            ledger.entry(DeckCategory::MainDeck, "Ash Walker").unwrap().quantity,
            4
        );
    }

    #[test]
    fn set_quantity_zero_removes() {
        let mut ledger = Ledger::new();
        ledger.add_card(&creature("Ash Walker")).unwrap();

        let outcome = ledger
            .set_quantity(DeckCategory::MainDeck, "Ash Walker", 0)
            .unwrap();
        assert_eq!(outcome, SetOutcome::Removed);
        assert!(ledger.is_empty());
    }

    #[test]
    fn set_quantity_on_absent_entry_errors() {
        let mut ledger = Ledger::new();
        let err = ledger
            .set_quantity(DeckCategory::MainDeck, "Ghost", 2)
            .unwrap_err();
        assert!(matches!(err, DeckError::NotInDeck { .. }));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut ledger = Ledger::new();
        ledger.add_card(&creature("Ash Walker")).unwrap();

        assert!(ledger.remove_card(DeckCategory::MainDeck, "Ash Walker"));
        assert!(!ledger.remove_card(DeckCategory::MainDeck, "Ash Walker"));
        assert!(!ledger.remove_card(DeckCategory::MainDeck, "Ash Walker"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn remove_deletes_whole_entry_regardless_of_quantity() {
        let mut ledger = Ledger::new();
        let card = creature("Ash Walker");
        for _ in 0..3 {
            ledger.add_card(&card).unwrap();
        }
        ledger.remove_card(DeckCategory::MainDeck, "Ash Walker");
        assert!(ledger.entry(DeckCategory::MainDeck, "Ash Walker").is_none());
    }

    #[test]
    fn snapshot_is_detached_from_later_mutations() {
        let mut ledger = Ledger::new();
        ledger.add_card(&creature("Ash Walker")).unwrap();
        let snap = ledger.snapshot();

        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(snap.category(DeckCategory::MainDeck).len(), 1);
    }

    #[test]
    fn same_name_may_sit_in_two_categories() {
        // A reprint scenario: the ledger keys on (category, name).
        let mut ledger = Ledger::new();
        ledger.add_card(&creature("Ember Sprite")).unwrap();
        ledger.add_card(&token("Ember Sprite")).unwrap();
        assert!(ledger.entry(DeckCategory::MainDeck, "Ember Sprite").is_some());
        assert!(ledger.entry(DeckCategory::Tokens, "Ember Sprite").is_some());
    }
}
