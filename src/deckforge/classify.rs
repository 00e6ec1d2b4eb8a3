//! The rule set that sends a card to its deck bucket.
//!
//! Classification is a pure, total function of the immutable card record:
//! cost text is checked before type so that a "Starting Gear" or "Token"
//! cost always wins, whatever the printed type says. Unrecognized cards
//! fall through to the main deck.

use crate::model::{CardRecord, CopyLimit, DeckCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: DeckCategory,
    pub copy_ceiling: CopyLimit,
}

/// Ordered rules, first match wins:
/// 1. cost contains "starting gear" -> Starting Gear, 1 copy
/// 2. cost contains "token"         -> Tokens, unlimited
/// 3. type is Equipment             -> Forge Deck, 4 copies
/// 4. type is Creature or Action    -> Main Deck, 4 copies
/// 5. anything else                 -> Main Deck, 4 copies
pub fn classify(card: &CardRecord) -> Classification {
    let cost = card.cost.to_lowercase();

    let category = if cost.contains("starting gear") {
        DeckCategory::StartingGear
    } else if cost.contains("token") {
        DeckCategory::Tokens
    } else {
        match card.card_type.trim() {
            "Equipment" => DeckCategory::ForgeDeck,
            "Creature" | "Action" => DeckCategory::MainDeck,
            _ => DeckCategory::MainDeck,
        }
    };

    Classification {
        category,
        copy_ceiling: category.policy().copy_ceiling,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(cost: &str, card_type: &str) -> CardRecord {
        CardRecord {
            name: "Test Card".into(),
            cost: cost.into(),
            card_type: card_type.into(),
            ..CardRecord::default()
        }
    }

    #[test]
    fn starting_gear_cost_wins_over_any_type() {
        let c = classify(&card("Starting Gear", "Equipment"));
        assert_eq!(c.category, DeckCategory::StartingGear);
        assert_eq!(c.copy_ceiling, CopyLimit::Bounded(1));

        let c = classify(&card("STARTING GEAR", "Creature"));
        assert_eq!(c.category, DeckCategory::StartingGear);
    }

    #[test]
    fn token_cost_wins_over_type() {
        let c = classify(&card("2 (Token)", "Creature"));
        assert_eq!(c.category, DeckCategory::Tokens);
        assert_eq!(c.copy_ceiling, CopyLimit::Unlimited);
    }

    #[test]
    fn equipment_goes_to_forge_deck() {
        let c = classify(&card("3", "Equipment"));
        assert_eq!(c.category, DeckCategory::ForgeDeck);
        assert_eq!(c.copy_ceiling, CopyLimit::Bounded(4));
    }

    #[test]
    fn creatures_and_actions_go_to_main_deck() {
        assert_eq!(classify(&card("1", "Creature")).category, DeckCategory::MainDeck);
        assert_eq!(classify(&card("1", "Action")).category, DeckCategory::MainDeck);
    }

    #[test]
    fn unknown_type_falls_back_to_main_deck() {
        let c = classify(&card("5", "Artifact"));
        assert_eq!(c.category, DeckCategory::MainDeck);
        assert_eq!(c.copy_ceiling, CopyLimit::Bounded(4));
    }

    #[test]
    fn missing_cost_defaults_by_type() {
        let c = classify(&card("", "Creature"));
        assert_eq!(c.category, DeckCategory::MainDeck);
    }
}
