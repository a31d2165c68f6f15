pub mod config;
pub mod context;
pub mod error;
pub mod extractor;
pub mod functions;
pub mod merge;
pub mod walk;

pub use config::EngineConfig;
pub use context::WalkContext;
pub use error::{ExtractError, Result};
pub use extractor::{extract_date_filters, DateFilterExtractor};
pub use functions::{FunctionRegistry, FunctionRole, ShiftDirection};
pub use merge::{classify, merge};
pub use walk::walk;
