use dialect_schema::SchemaError;
use model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Dialect schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
