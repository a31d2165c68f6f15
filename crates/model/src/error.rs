use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("Unknown SQL dialect: {0}")]
    UnknownDialect(String),

    #[error("Unknown period unit: {0}")]
    UnknownPeriod(String),

    #[error("Invalid week start day: {0}")]
    InvalidWeekStart(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
