//! # Deckforge Architecture
//!
//! Deckforge is a **UI-agnostic deck-building library** for the Soul
//! Forger trading-card game, with a CLI client on top. The split matters:
//! the deck-composition engine knows nothing about terminals, and the
//! terminal layer holds no game rules.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)               │
//! │  - Parses arguments, runs the interactive shell            │
//! │  - The ONLY place that touches stdout/stderr/exit codes    │
//! │  - Owns the sinks: clipboard, file writes, fallbacks       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - DeckApi facade over one Session (catalog + ledger)      │
//! │  - Dispatches to commands, returns Result<CmdResult>       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - One module per user action, pure business logic         │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Core (model, catalog, classify, ledger, tally, export/)   │
//! │  - The deck-composition engine proper                      │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The engine in one paragraph
//!
//! The [`catalog`] loads an immutable card list once at startup (failure
//! is fatal). [`classify`] is a pure rule set mapping a card's cost and
//! type text to one of four deck buckets and its per-card copy ceiling.
//! The [`ledger`] is the only mutable state: one entry per (category,
//! card name), quantities bounded by the ceiling, insertion order kept
//! for deterministic display and export. [`tally`] recomputes category
//! totals and under/ok/over status from scratch after every mutation.
//! The [`export`] serializers turn a ledger snapshot into a text
//! decklist, a Lua image-database table, or a paginated print sheet.
//!
//! ## Error policy
//!
//! Expected outcomes (copy-limit rejections, empty exports, per-card
//! image failures, sink failures) travel as `Result` values up to the
//! CLI and degrade there; only a failed catalog load is fatal. Core code
//! never panics and never touches a terminal.
//!
//! ## Module Overview
//!
//! - [`api`]: the `DeckApi` facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`model`]: core data types (`CardRecord`, `DeckCategory`, `DeckEntry`)
//! - [`catalog`]: catalog load, lookup and gallery filtering
//! - [`classify`]: the category classifier
//! - [`ledger`]: the deck ledger state machine
//! - [`tally`]: per-category totals and thresholds
//! - [`export`]: text / Lua / print-sheet serializers
//! - [`config`]: configuration management
//! - [`clipboard`]: cross-platform clipboard support
//! - [`error`]: error types

pub mod api;
pub mod catalog;
pub mod classify;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod ledger;
pub mod model;
pub mod tally;
