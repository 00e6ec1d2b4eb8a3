use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single card as it appears in the catalog. Identity is the name,
/// assumed unique within a catalog. Never mutated after load.
///
/// Field names mirror the column headers of the catalog JSON, so most
/// carry a serde rename. Every attribute is kept as the raw string the
/// catalog provides; interpretation (classification, image cleaning)
/// happens elsewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(rename = "Card Name", default)]
    pub name: String,
    #[serde(rename = "Cost", default)]
    pub cost: String,
    #[serde(rename = "Type", default)]
    pub card_type: String,
    #[serde(rename = "Action Type", default)]
    pub action_type: String,
    #[serde(rename = "Sub Type", default)]
    pub sub_type: String,
    #[serde(rename = "Action Speed", default)]
    pub action_speed: String,
    #[serde(rename = "Faction", default)]
    pub faction: String,
    #[serde(rename = "Power", default)]
    pub power: String,
    #[serde(rename = "Off-guard Power", default)]
    pub off_guard_power: String,
    #[serde(rename = "Endurance", default)]
    pub endurance: String,
    #[serde(rename = "Experience", default)]
    pub experience: String,
    #[serde(rename = "Hands", default)]
    pub hands: String,
    #[serde(rename = "Effect", default)]
    pub effect: String,
    #[serde(rename = "Image", default)]
    pub image: String,
    #[serde(rename = "Ronum", default)]
    pub ronum: String,
}

impl CardRecord {
    /// The image path with source-data noise removed. Empty when the card
    /// has no usable image.
    pub fn clean_image_path(&self) -> String {
        clean_image_path(&self.image)
    }
}

/// Catalog image paths are sometimes wrapped in literal parentheses, e.g.
/// `"(firecards/card.png)"`. Strip those and surrounding whitespace.
pub fn clean_image_path(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != '(' && *c != ')')
        .collect()
}

/// The four deck buckets. Ordering is the canonical display and export
/// order (tokens always last).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DeckCategory {
    StartingGear,
    MainDeck,
    ForgeDeck,
    Tokens,
}

impl DeckCategory {
    pub const ALL: [DeckCategory; 4] = [
        DeckCategory::StartingGear,
        DeckCategory::MainDeck,
        DeckCategory::ForgeDeck,
        DeckCategory::Tokens,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeckCategory::StartingGear => "Starting Gear",
            DeckCategory::MainDeck => "Main Deck",
            DeckCategory::ForgeDeck => "Forge Deck",
            DeckCategory::Tokens => "Tokens",
        }
    }

    /// Per-category size and copy rules. Static: the rules are part of
    /// the game, not of any one session.
    pub fn policy(self) -> CategoryPolicy {
        match self {
            DeckCategory::StartingGear => CategoryPolicy {
                min_count: 0,
                max_count: Some(3),
                copy_ceiling: CopyLimit::Bounded(1),
            },
            DeckCategory::MainDeck => CategoryPolicy {
                min_count: 60,
                max_count: Some(75),
                copy_ceiling: CopyLimit::Bounded(4),
            },
            DeckCategory::ForgeDeck => CategoryPolicy {
                min_count: 15,
                max_count: Some(15),
                copy_ceiling: CopyLimit::Bounded(4),
            },
            DeckCategory::Tokens => CategoryPolicy {
                min_count: 0,
                max_count: None,
                copy_ceiling: CopyLimit::Unlimited,
            },
        }
    }
}

impl fmt::Display for DeckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeckCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_'], "-").as_str() {
            "starting-gear" | "gear" | "sg" => Ok(DeckCategory::StartingGear),
            "main-deck" | "main" | "md" => Ok(DeckCategory::MainDeck),
            "forge-deck" | "forge" | "fd" => Ok(DeckCategory::ForgeDeck),
            "tokens" | "token" => Ok(DeckCategory::Tokens),
            other => Err(format!("Unknown deck category: {}", other)),
        }
    }
}

/// Maximum copies of one distinct card within a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyLimit {
    Bounded(u32),
    Unlimited,
}

impl CopyLimit {
    pub fn allows(self, quantity: u32) -> bool {
        match self {
            CopyLimit::Bounded(max) => quantity <= max,
            CopyLimit::Unlimited => true,
        }
    }

    /// The ceiling as a number, where one exists.
    pub fn bound(self) -> Option<u32> {
        match self {
            CopyLimit::Bounded(max) => Some(max),
            CopyLimit::Unlimited => None,
        }
    }
}

impl fmt::Display for CopyLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyLimit::Bounded(max) => write!(f, "{}", max),
            CopyLimit::Unlimited => f.write_str("unlimited"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    pub min_count: u32,
    pub max_count: Option<u32>,
    pub copy_ceiling: CopyLimit,
}

/// One line of the deck: a card (by name, looked up in the catalog when
/// needed) sitting in one category at some quantity. The category never
/// changes after creation; re-adding a card classifies it fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub card_name: String,
    pub category: DeckCategory,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_parenthesized_image_path() {
        assert_eq!(
            clean_image_path("(firecards/card.png)"),
            "firecards/card.png"
        );
        assert_eq!(
            clean_image_path("  firecards/card.png  "),
            "firecards/card.png"
        );
        assert_eq!(clean_image_path(""), "");
    }

    #[test]
    fn copy_limit_allows() {
        assert!(CopyLimit::Bounded(4).allows(4));
        assert!(!CopyLimit::Bounded(4).allows(5));
        assert!(CopyLimit::Unlimited.allows(10_000));
    }

    #[test]
    fn forge_deck_policy_is_exactly_fifteen() {
        let policy = DeckCategory::ForgeDeck.policy();
        assert_eq!(policy.min_count, 15);
        assert_eq!(policy.max_count, Some(15));
    }

    #[test]
    fn parses_category_aliases() {
        assert_eq!(
            "starting gear".parse::<DeckCategory>().unwrap(),
            DeckCategory::StartingGear
        );
        assert_eq!("main".parse::<DeckCategory>().unwrap(), DeckCategory::MainDeck);
        assert_eq!("forge".parse::<DeckCategory>().unwrap(), DeckCategory::ForgeDeck);
        assert!("sideboard".parse::<DeckCategory>().is_err());
    }

    #[test]
    fn deserializes_catalog_column_headers() {
        let json = r#"{
            "Card Name": "Fire Bolt",
            "Cost": "2",
            "Type": "Action",
            "Off-guard Power": "1",
            "Image": "(firecards/firebolt.png)"
        }"#;
        let card: CardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Fire Bolt");
        assert_eq!(card.off_guard_power, "1");
        assert_eq!(card.faction, "");
        assert_eq!(card.clean_image_path(), "firecards/firebolt.png");
    }
}
