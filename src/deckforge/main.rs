use clap::Parser;
use colored::*;
use deckforge::api::DeckApi;
use deckforge::catalog::{Catalog, CardFilter};
use deckforge::commands::config::ConfigAction;
use deckforge::config::DeckforgeConfig;
use deckforge::error::{DeckError, Result};
use deckforge::export::sheet::SheetSpec;
use deckforge::export::text::TextOptions;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print::{print_gallery, print_messages};
use cli::sink::{deliver, SinkTarget};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config edits need no catalog, so they dispatch before the session
    // comes up.
    if let Some(Commands::Config { key, value }) = &cli.command {
        let action = match (key, value) {
            (None, _) => ConfigAction::ShowAll,
            (Some(key), None) => ConfigAction::ShowKey(key.clone()),
            (Some(key), Some(value)) => ConfigAction::Set(key.clone(), value.clone()),
        };
        let result = deckforge::commands::config::run(&config_dir()?, action)?;
        print_messages(&result.messages);
        return Ok(());
    }

    let mut api = init_api(&cli)?;

    match cli.command {
        None | Some(Commands::Shell) => cli::shell::run(&mut api),
        Some(Commands::Gallery {
            name,
            effect,
            card_type,
            faction,
            speed,
            starting_gear,
            tokens,
        }) => {
            let filter = CardFilter {
                name,
                effect,
                card_type,
                faction,
                action_speed: speed,
                starting_gear,
                tokens,
                ..CardFilter::default()
            };
            let result = api.gallery(&filter)?;
            print_gallery(&result.gallery);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::ExportText {
            deck,
            tokens,
            headers,
            out,
        }) => {
            load_deck(&mut api, &deck)?;
            let options = TextOptions {
                include_tokens: tokens,
                group_headers: headers,
            };
            let result = api.export_text(&options)?;
            finish_export(result, out);
            Ok(())
        }
        Some(Commands::ExportLua { deck, out }) => {
            load_deck(&mut api, &deck)?;
            let result = api.export_lua()?;
            finish_export(result, out);
            Ok(())
        }
        // Dispatched before the session came up.
        Some(Commands::Config { .. }) => Ok(()),
        Some(Commands::ExportSheet { deck, out }) => {
            load_deck(&mut api, &deck)?;
            let result = api.export_sheet(SheetSpec::default())?;
            // Sheets always land in a file; HTML on a clipboard helps no one.
            let out = out.or_else(|| {
                result
                    .export
                    .as_ref()
                    .map(|p| PathBuf::from(&p.suggested_name))
            });
            finish_export(result, out);
            Ok(())
        }
    }
}

fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "deckforge", "deckforge")
        .ok_or_else(|| DeckError::Api("Could not determine config dir".into()))?;
    Ok(dirs.config_dir().to_path_buf())
}

fn init_api(cli: &Cli) -> Result<DeckApi> {
    let mut config = match config_dir() {
        Ok(dir) => DeckforgeConfig::load(dir).unwrap_or_default(),
        Err(_) => DeckforgeConfig::default(),
    };
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.catalog_path));

    // Fatal on failure: there is no session without a catalog.
    let catalog = Catalog::load(&catalog_path)?;
    Ok(DeckApi::new(catalog, config))
}

fn load_deck(api: &mut DeckApi, deck_path: &std::path::Path) -> Result<()> {
    let content = std::fs::read_to_string(deck_path)?;
    let result = api.import_deck(&content)?;
    print_messages(&result.messages);
    Ok(())
}

fn finish_export(result: deckforge::commands::CmdResult, out: Option<PathBuf>) {
    print_messages(&result.messages);
    if let Some(payload) = &result.export {
        let target = out.map_or(SinkTarget::Clipboard, SinkTarget::File);
        deliver(payload, target);
    }
}
