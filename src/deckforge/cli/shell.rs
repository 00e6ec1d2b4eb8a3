//! The interactive shell: one in-memory session, each input line one
//! discrete command against the API. All prompting and printing stays
//! here; the ledger itself never sees a prompt.

use super::print::{print_deck, print_gallery, print_messages};
use super::sink::{deliver, SinkTarget};
use colored::*;
use deckforge::api::DeckApi;
use deckforge::catalog::CardFilter;
use deckforge::error::{DeckError, Result};
use deckforge::export::sheet::SheetSpec;
use deckforge::export::text::TextOptions;
use deckforge::model::DeckCategory;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

enum Flow {
    Continue,
    Quit,
}

pub fn run(api: &mut DeckApi) -> Result<()> {
    println!(
        "{} cards loaded. Type {} for commands.",
        api.session().catalog.len(),
        "help".bold()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "deckforge>".cyan());
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };

        match dispatch(api, line.trim()) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            // Expected errors are per-command; report and keep the session.
            Err(err) => eprintln!("{}", err.to_string().red()),
        }
    }

    Ok(())
}

fn dispatch(api: &mut DeckApi, line: &str) -> Result<Flow> {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "" => {}
        "help" | "?" => print_help(),
        "quit" | "exit" | "q" => return Ok(Flow::Quit),
        "add" | "a" => {
            let result = api.add_card(require(rest, "add <card name>")?)?;
            print_messages(&result.messages);
        }
        "remove" | "rm" => {
            let (category, name) = category_and_name(rest, "remove <category> <card name>")?;
            let result = api.remove_card(category, name)?;
            print_messages(&result.messages);
        }
        "set" => {
            let (category, rest) = category_and_rest(rest, "set <category> <qty> <card name>")?;
            let (qty_str, name) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| usage("set <category> <qty> <card name>"))?;
            let quantity: u32 = qty_str
                .parse()
                .map_err(|_| DeckError::Api(format!("Not a quantity: {}", qty_str)))?;
            let result = api.set_quantity(category, name.trim(), quantity)?;
            print_messages(&result.messages);
        }
        "deck" | "counts" | "ls" => {
            let result = api.deck()?;
            if let Some(deck) = &result.deck {
                print_deck(deck, &result.tallies);
            }
        }
        "gallery" | "g" => {
            let filter = parse_filter(rest)?;
            let result = api.gallery(&filter)?;
            print_gallery(&result.gallery);
            print_messages(&result.messages);
        }
        "import" => {
            let path = require(rest, "import <decklist file>")?;
            let content = std::fs::read_to_string(path)?;
            let result = api.import_deck(&content)?;
            print_messages(&result.messages);
        }
        "export" => return export(api, rest).map(|_| Flow::Continue),
        "clear" | "new" => {
            let result = api.clear_deck()?;
            print_messages(&result.messages);
        }
        other => {
            eprintln!(
                "{}",
                format!("Unknown command: {} (try \"help\")", other).red()
            );
        }
    }

    Ok(Flow::Continue)
}

fn export(api: &mut DeckApi, rest: &str) -> Result<()> {
    let mut words = rest.split_whitespace();
    let kind = words.next().unwrap_or("");
    let args: Vec<&str> = words.collect();
    let out = args
        .iter()
        .find_map(|w| w.strip_prefix("out="))
        .map(PathBuf::from);

    match kind {
        "text" => {
            let options = TextOptions {
                include_tokens: args.contains(&"tokens"),
                group_headers: args.contains(&"headers"),
            };
            let result = api.export_text(&options)?;
            print_messages(&result.messages);
            if let Some(payload) = &result.export {
                let target = out.map_or(SinkTarget::Clipboard, SinkTarget::File);
                deliver(payload, target);
            }
        }
        "lua" => {
            let result = api.export_lua()?;
            print_messages(&result.messages);
            if let Some(payload) = &result.export {
                let target = out.map_or(SinkTarget::Clipboard, SinkTarget::File);
                deliver(payload, target);
            }
        }
        "sheet" => {
            let result = api.export_sheet(SheetSpec::default())?;
            print_messages(&result.messages);
            if let Some(payload) = &result.export {
                // A sheet goes to a file; fall back to the dated default name.
                let path = out.unwrap_or_else(|| PathBuf::from(&payload.suggested_name));
                deliver(payload, SinkTarget::File(path));
            }
        }
        _ => return Err(usage("export text|lua|sheet [tokens] [headers] [out=<file>]")),
    }

    Ok(())
}

fn parse_filter(rest: &str) -> Result<CardFilter> {
    let mut filter = CardFilter::default();
    for word in rest.split_whitespace() {
        match word.split_once('=') {
            Some(("name", v)) => filter.name = Some(v.to_string()),
            Some(("effect", v)) => filter.effect = Some(v.to_string()),
            Some(("ronum", v)) => filter.ronum = Some(v.to_string()),
            Some(("subtype", v)) => filter.sub_type = Some(v.to_string()),
            Some(("power", v)) => filter.power = Some(v.to_string()),
            Some(("offguard", v)) => filter.off_guard_power = Some(v.to_string()),
            Some(("endurance", v)) => filter.endurance = Some(v.to_string()),
            Some(("experience", v)) => filter.experience = Some(v.to_string()),
            Some(("hands", v)) => filter.hands = Some(v.to_string()),
            Some(("speed", v)) => filter.action_speed = Some(v.to_string()),
            Some(("type", v)) => filter.card_type = Some(v.to_string()),
            Some(("faction", v)) => filter.faction = Some(v.to_string()),
            None if word == "gear" => filter.starting_gear = true,
            None if word == "tokens" => filter.tokens = true,
            _ => {
                return Err(DeckError::Api(format!(
                    "Unknown gallery filter: {} (try \"help\")",
                    word
                )))
            }
        }
    }
    Ok(filter)
}

fn require<'a>(rest: &'a str, usage_text: &str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(usage(usage_text))
    } else {
        Ok(rest)
    }
}

fn category_and_rest<'a>(rest: &'a str, usage_text: &str) -> Result<(DeckCategory, &'a str)> {
    let (cat_str, rest) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| usage(usage_text))?;
    let category = cat_str.parse::<DeckCategory>().map_err(DeckError::Api)?;
    Ok((category, rest.trim()))
}

fn category_and_name<'a>(rest: &'a str, usage_text: &str) -> Result<(DeckCategory, &'a str)> {
    let (category, name) = category_and_rest(rest, usage_text)?;
    if name.is_empty() {
        return Err(usage(usage_text));
    }
    Ok((category, name))
}

fn usage(text: &str) -> DeckError {
    DeckError::Api(format!("Usage: {}", text))
}

fn print_help() {
    println!("Commands:");
    println!("  add <card name>                     add one copy (category is automatic)");
    println!("  remove <category> <card name>       drop an entry entirely");
    println!("  set <category> <qty> <card name>    set a quantity (0 removes)");
    println!("  deck                                show the deck with counts");
    println!("  gallery [field=value ...] [gear] [tokens]");
    println!("                                      search the catalog (name=, effect=, type=,");
    println!("                                      faction=, speed=, subtype=, ...)");
    println!("  import <file>                       add cards from a text decklist");
    println!("  export text [tokens] [headers] [out=<file>]");
    println!("  export lua [out=<file>]");
    println!("  export sheet [out=<file>]");
    println!("  clear                               start over");
    println!("  quit");
    println!();
    println!("Categories: starting-gear, main, forge, tokens");
}
