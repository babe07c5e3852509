use thiserror::Error;

use crate::market::TypeId;

/// Convenient result alias for the ammoscope library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when market item data fails validation during catalog load.
    #[error("invalid market item data: {message}")]
    ItemDataValidation { message: String },

    /// Raised when duplicate item ids are encountered during catalog load.
    #[error("duplicate item id encountered: {type_id}")]
    DuplicateItemId { type_id: TypeId },

    /// Raised when an item name could not be found in the catalog.
    #[error("unknown item name: {name}{}", format_suggestions(.suggestions))]
    UnknownItem {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the market oracle is asked about an item it has no
    /// classification for. Never swallowed; grouping determinism depends
    /// on every queried item having a definitive answer.
    #[error("item {type_id} is not classified in the market catalog")]
    UnclassifiedItem { type_id: TypeId },

    /// Raised when fit data fails validation.
    #[error("invalid fit data: {message}")]
    FitDataValidation { message: String },

    /// Wrapper for fit document parse errors.
    #[error("failed to parse fit document: {0}")]
    FitParse(#[from] serde_json::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
