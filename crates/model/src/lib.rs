pub mod ast;
pub mod core;
pub mod error;
pub mod filter;

pub use crate::ast::node::{ExpressionNode, LiteralKind, NodeKind};
pub use crate::core::dialect::SqlDialect;
pub use crate::core::operator::BinaryOperator;
pub use crate::core::period::{Period, PeriodSpan};
pub use crate::core::week::WeekStart;
pub use crate::error::{ModelError, Result};
pub use crate::filter::{DateFilter, FilterType, PartialFilter};
