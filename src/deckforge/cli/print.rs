use colored::*;
use deckforge::commands::{CmdMessage, MessageLevel};
use deckforge::ledger::DeckSnapshot;
use deckforge::model::{CardRecord, DeckCategory};
use deckforge::tally::{CategoryTally, DeckStatus};
use std::collections::BTreeMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The count display next to each category header: "7/60-75" for
/// ranged limits, "15/15" for exact ones, a bare total when unbounded.
fn format_count(category: DeckCategory, tally: &CategoryTally) -> String {
    let policy = category.policy();
    match policy.max_count {
        None => format!("{}", tally.total),
        Some(max) if policy.min_count > 0 && policy.min_count < max => {
            format!("{}/{}-{}", tally.total, policy.min_count, max)
        }
        Some(max) => format!("{}/{}", tally.total, max),
    }
}

pub fn print_deck(deck: &DeckSnapshot, tallies: &BTreeMap<DeckCategory, CategoryTally>) {
    for category in DeckCategory::ALL {
        let entries = deck.category(category);
        let header = match tallies.get(&category) {
            Some(tally) => {
                let count = format_count(category, tally);
                let count = match tally.status {
                    DeckStatus::Ok => count.green(),
                    DeckStatus::Under | DeckStatus::Over => count.red(),
                };
                format!("{} [{}]", category.label().bold(), count)
            }
            None => category.label().bold().to_string(),
        };
        println!("{}", header);

        if entries.is_empty() {
            println!("  {}", "(empty)".dimmed());
        }
        for entry in entries {
            println!("  {}x {}", entry.quantity, entry.card_name);
        }
    }
}

const NAME_WIDTH: usize = 26;
const COST_WIDTH: usize = 14;
const TYPE_WIDTH: usize = 10;
const FACTION_WIDTH: usize = 10;
const EFFECT_WIDTH: usize = 36;

pub fn print_gallery(cards: &[CardRecord]) {
    if cards.is_empty() {
        println!("No cards match.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:<nw$} {:<cw$} {:<tw$} {:<fw$} {:<7} {}",
            "Name",
            "Cost",
            "Type",
            "Faction",
            "A/OG",
            "Effect",
            nw = NAME_WIDTH,
            cw = COST_WIDTH,
            tw = TYPE_WIDTH,
            fw = FACTION_WIDTH,
        )
        .bold()
    );

    for card in cards {
        let power = if card.power.is_empty() && card.off_guard_power.is_empty() {
            String::new()
        } else {
            format!("{}/{}", card.power, card.off_guard_power)
        };
        println!(
            "{} {} {} {} {:<7} {}",
            pad(&card.name, NAME_WIDTH),
            pad(&card.cost, COST_WIDTH),
            pad(&card.card_type, TYPE_WIDTH),
            pad(&card.faction, FACTION_WIDTH),
            power,
            truncate_to_width(&card.effect.replace('\n', " "), EFFECT_WIDTH),
        );
    }
}

/// Truncate to a display width and pad to it, so columns line up even
/// with wide characters in card names.
fn pad(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    // Keep one column for the ellipsis.
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_width_strings_are_left_alone() {
        assert_eq!(truncate_to_width("abcdef", 6), "abcdef");
        assert_eq!(truncate_to_width("short", 6), "short");
    }

    #[test]
    fn over_width_strings_end_in_an_ellipsis_within_budget() {
        let truncated = truncate_to_width("abcdefgh", 6);
        assert_eq!(truncated, "abcde…");
        assert!(truncated.width() <= 6);
    }

    #[test]
    fn wide_chars_count_by_display_width() {
        // Each CJK char occupies two columns.
        assert_eq!(truncate_to_width("火火火", 6), "火火火");
        assert_eq!(truncate_to_width("火火火火", 6), "火火…");
    }

    #[test]
    fn pad_fills_to_the_column_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcd", 4), "abcd");
    }
}
