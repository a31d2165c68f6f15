use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Malformed node path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },

    #[error("Invalid dialect schema JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl SchemaError {
    pub fn malformed(path: &str, reason: impl Into<String>) -> Self {
        SchemaError::MalformedPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
