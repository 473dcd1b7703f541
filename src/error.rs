use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnrichError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {0}")]
    MissingInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid override for '{company}': {reason}")]
    InvalidOverride { company: String, reason: String },
}

pub type Result<T> = std::result::Result<T, EnrichError>;
