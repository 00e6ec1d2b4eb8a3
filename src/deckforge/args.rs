use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deckforge")]
#[command(about = "Deck builder for the Soul Forger trading card game", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Card catalog JSON file (defaults to the configured path)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Override the image base URL used by exports
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive deck-building shell (the default)
    Shell,

    /// Search and filter the card gallery
    #[command(alias = "g")]
    Gallery {
        /// Substring match on the card name
        #[arg(long)]
        name: Option<String>,

        /// Substring match on the effect text
        #[arg(long)]
        effect: Option<String>,

        /// Exact type (Creature, Action, Equipment, ...)
        #[arg(long = "type")]
        card_type: Option<String>,

        /// Exact faction
        #[arg(long)]
        faction: Option<String>,

        /// Substring match on the action speed
        #[arg(long)]
        speed: Option<String>,

        /// Only cards whose cost marks them as starting gear
        #[arg(long)]
        starting_gear: bool,

        /// Only cards whose cost marks them as tokens
        #[arg(long)]
        tokens: bool,
    },

    /// Export a decklist file as plain text (clipboard unless --out)
    ExportText {
        /// Text decklist to load
        #[arg(long)]
        deck: PathBuf,

        /// Include the Tokens category
        #[arg(long)]
        tokens: bool,

        /// Group categories under header lines
        #[arg(long)]
        headers: bool,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Export the Lua image database for a decklist file
    ExportLua {
        /// Text decklist to load
        #[arg(long)]
        deck: PathBuf,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show or edit persisted settings (base-url, card-back, catalog)
    Config {
        /// Key to show or set; omit to list everything
        key: Option<String>,

        /// New value for the key; omit to show it
        value: Option<String>,
    },

    /// Export a printable sheet (HTML) for a decklist file
    ExportSheet {
        /// Text decklist to load
        #[arg(long)]
        deck: PathBuf,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}
