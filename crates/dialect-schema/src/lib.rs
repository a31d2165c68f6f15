//! Per-dialect node paths.
//!
//! Every supported parser shapes the same SQL construct differently (a column
//! is `column` in one grammar and `column.expr.value` in another). Rather than
//! one walker per grammar, a single walker consults a [`DialectSchema`] for
//! the few locations that differ.

pub mod builtin;
pub mod error;
pub mod path;
pub mod schema;

pub use error::{Result, SchemaError};
pub use path::{NodePath, Segment};
pub use schema::{DialectSchema, FunctionPaths, SchemaDocument};
