use crate::model::DeckCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    /// Fatal: the catalog could not be loaded, the session is unusable.
    #[error("Failed to load card catalog from {path}: {reason}")]
    CatalogLoad { path: String, reason: String },

    #[error("Card not found in catalog: {0}")]
    CardNotFound(String),

    /// An add or quantity edit would push a card past its copy ceiling.
    /// The ledger is left unchanged.
    #[error("Copy limit reached: {name} is capped at {limit} in the {category}")]
    LimitExceeded {
        name: String,
        category: DeckCategory,
        limit: u32,
    },

    #[error("{name} is not in the {category}")]
    NotInDeck {
        name: String,
        category: DeckCategory,
    },

    #[error("The deck is empty; nothing to export")]
    EmptyExport,

    /// Per-card image failure during sheet export. Callers substitute a
    /// placeholder cell rather than aborting the batch.
    #[error("Could not resolve image for {name}: {reason}")]
    ImageResolution { name: String, reason: String },

    #[error("Failed to write to {sink}: {reason}")]
    SinkWrite { sink: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
