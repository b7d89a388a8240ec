use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid forecast parameter '{field}': {reason}")]
    InvalidForecast { field: &'static str, reason: String },

    #[error("Invalid product ID '{input}': {reason}")]
    InvalidProductId { input: String, reason: String },

    #[error("Failed to read product ID: {0}")]
    InputRead(#[source] std::io::Error),

    #[error("Unknown document kind '{0}' (expected word, pdf or excel)")]
    UnknownDocumentKind(String),

    #[error("Catalog is empty")]
    EmptyCatalog,
}

impl DemoError {
    pub fn invalid_forecast(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidForecast {
            field,
            reason: reason.into(),
        }
    }

    pub fn invalid_product_id(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProductId {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
