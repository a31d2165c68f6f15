use expression_engine::ExtractError;
use model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input: {0}")]
    InputRead(#[from] std::io::Error),

    #[error("Failed to parse input as JSON: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Failed to prepare extraction: {0}")]
    Extract(#[from] ExtractError),

    #[error("Invalid --now value '{0}': expected RFC 3339, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD'")]
    InvalidNow(String),
}
