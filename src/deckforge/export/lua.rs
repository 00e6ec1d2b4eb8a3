//! The Lua image-database table consumed by the tabletop client. Maps
//! each distinct deck card to its full image URL, plus the fixed card-back
//! entry. A card appearing in two categories is emitted once, in
//! first-seen order.

use crate::catalog::Catalog;
use crate::ledger::DeckSnapshot;
use std::collections::HashSet;

pub fn render(
    snapshot: &DeckSnapshot,
    catalog: &Catalog,
    base_url: &str,
    card_back_path: &str,
) -> String {
    let mut out = String::from("cardDatabase = {\n");
    let mut seen: HashSet<&str> = HashSet::new();

    for entry in snapshot.entries() {
        let name = entry.card_name.as_str();
        if name.is_empty() || !seen.insert(name) {
            continue;
        }
        // Cards without a resolvable image are skipped silently.
        let Some(card) = catalog.get(name) else {
            continue;
        };
        let path = card.clean_image_path();
        if path.is_empty() {
            continue;
        }
        out.push_str(&format!("    [\"{}\"] = \"{}{}\",\n", name, base_url, path));
    }

    out.push_str(&format!("}}\ncardBack = \"{}{}\"", base_url, card_back_path));
    out
}
