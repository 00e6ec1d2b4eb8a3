//! The plain-text decklist: one `"<quantity> <name>"` line per entry, in
//! insertion order, Starting Gear first, then Main Deck, then Forge Deck.
//! The same format is parsed back in by deck import, so the grammar here
//! is deliberately lenient.

use crate::ledger::DeckSnapshot;
use crate::model::DeckCategory;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    /// Include the Tokens category at the end.
    pub include_tokens: bool,
    /// Emit a `--- <Category> ---` header before each non-empty category.
    pub group_headers: bool,
}

/// Render the decklist. Empty categories contribute nothing; an entirely
/// empty scope renders to an empty string (callers gate on that before
/// touching any sink).
pub fn render(snapshot: &DeckSnapshot, options: &TextOptions) -> String {
    let mut categories = vec![
        DeckCategory::StartingGear,
        DeckCategory::MainDeck,
        DeckCategory::ForgeDeck,
    ];
    if options.include_tokens {
        categories.push(DeckCategory::Tokens);
    }

    let mut out = String::new();
    for category in categories {
        let entries = snapshot.category(category);
        if entries.is_empty() {
            continue;
        }
        if options.group_headers {
            out.push_str(&format!("--- {} ---\n", category.label()));
        }
        for entry in entries {
            out.push_str(&format!("{} {}\n", entry.quantity, entry.card_name));
        }
    }
    out
}

/// Parse a decklist back into `(quantity, name)` pairs. Blank lines and
/// `---` header lines are skipped; a line without a leading count means a
/// single copy.
pub fn parse_decklist(input: &str) -> Vec<(u32, String)> {
    input
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with("---") {
                return None;
            }
            match line.split_once(' ') {
                Some((count, rest)) => match count.parse::<u32>() {
                    Ok(n) => Some((n, rest.trim().to_string())),
                    Err(_) => Some((1, line.to_string())),
                },
                None => Some((1, line.to_string())),
            }
        })
        .collect()
}
