//! Per-category totals and threshold status, fully recomputed from a
//! ledger snapshot on every call. No incremental bookkeeping: at tens to
//! low hundreds of entries a full pass is cheap and cannot drift.

use crate::ledger::Ledger;
use crate::model::DeckCategory;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckStatus {
    Under,
    Ok,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTally {
    pub total: u32,
    pub status: DeckStatus,
}

/// Totals for every category, including empty ones. Min and max bounds
/// are inclusive: a Forge Deck at exactly 15 is Ok.
pub fn recompute(ledger: &Ledger) -> BTreeMap<DeckCategory, CategoryTally> {
    DeckCategory::ALL
        .into_iter()
        .map(|category| {
            let total: u32 = ledger.entries(category).iter().map(|e| e.quantity).sum();
            let policy = category.policy();
            let status = if total < policy.min_count {
                DeckStatus::Under
            } else if policy.max_count.is_some_and(|max| total > max) {
                DeckStatus::Over
            } else {
                DeckStatus::Ok
            };
            (category, CategoryTally { total, status })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardRecord;

    fn creature(name: &str) -> CardRecord {
        CardRecord {
            name: name.into(),
            cost: "2".into(),
            card_type: "Creature".into(),
            ..CardRecord::default()
        }
    }

    fn equipment(name: &str) -> CardRecord {
        CardRecord {
            name: name.into(),
            cost: "2".into(),
            card_type: "Equipment".into(),
            ..CardRecord::default()
        }
    }

    fn add_copies(ledger: &mut Ledger, card: &CardRecord, copies: u32) {
        for _ in 0..copies {
            ledger.add_card(card).unwrap();
        }
    }

    #[test]
    fn short_main_deck_is_under() {
        let mut ledger = Ledger::new();
        add_copies(&mut ledger, &creature("Fire Bolt"), 4);
        add_copies(&mut ledger, &creature("Shield Wall"), 3);

        let tallies = recompute(&ledger);
        let main = &tallies[&DeckCategory::MainDeck];
        assert_eq!(main.total, 7);
        assert_eq!(main.status, DeckStatus::Under);
    }

    #[test]
    fn forge_deck_at_fifteen_is_ok() {
        let mut ledger = Ledger::new();
        for i in 0..4 {
            let copies = if i == 3 { 3 } else { 4 };
            add_copies(&mut ledger, &equipment(&format!("Forge Piece {}", i)), copies);
        }

        let tallies = recompute(&ledger);
        let forge = &tallies[&DeckCategory::ForgeDeck];
        assert_eq!(forge.total, 15);
        assert_eq!(forge.status, DeckStatus::Ok);
    }

    #[test]
    fn forge_deck_over_fifteen_is_over() {
        let mut ledger = Ledger::new();
        for i in 0..4 {
            add_copies(&mut ledger, &equipment(&format!("Forge Piece {}", i)), 4);
        }

        let tallies = recompute(&ledger);
        assert_eq!(tallies[&DeckCategory::ForgeDeck].total, 16);
        assert_eq!(tallies[&DeckCategory::ForgeDeck].status, DeckStatus::Over);
    }

    #[test]
    fn unbounded_tokens_are_never_over() {
        let mut ledger = Ledger::new();
        let token = CardRecord {
            name: "Ember Sprite".into(),
            cost: "Token".into(),
            ..CardRecord::default()
        };
        add_copies(&mut ledger, &token, 50);

        let tallies = recompute(&ledger);
        assert_eq!(tallies[&DeckCategory::Tokens].total, 50);
        assert_eq!(tallies[&DeckCategory::Tokens].status, DeckStatus::Ok);
    }

    #[test]
    fn empty_ledger_reports_every_category() {
        let tallies = recompute(&Ledger::new());
        assert_eq!(tallies.len(), 4);
        assert_eq!(tallies[&DeckCategory::StartingGear].status, DeckStatus::Ok);
        assert_eq!(tallies[&DeckCategory::MainDeck].status, DeckStatus::Under);
        assert_eq!(tallies[&DeckCategory::ForgeDeck].status, DeckStatus::Under);
    }
}
