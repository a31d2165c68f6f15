//! Recursive traversal of a predicate tree.
//!
//! Each node kind contributes a list of partial filters. Knowledge flows
//! upward: columns, periods and anchors found deep in the tree are stamped
//! onto filters by their ancestors and fused at comparison operators.

mod binary;
mod extract;
mod function;
pub mod interval;

use crate::context::WalkContext;
use model::{ExpressionNode, NodeKind, PartialFilter};
use tracing::{debug, trace};

pub fn walk(node: ExpressionNode<'_>, ctx: &WalkContext<'_>) -> Vec<PartialFilter> {
    if ctx.exceeds_depth() {
        debug!(depth = ctx.depth(), "Predicate nested too deep, subtree skipped");
        return Vec::new();
    }

    let sign = ctx.sign();
    let ctx = ctx.descend();

    match node.kind() {
        NodeKind::Binary => binary::walk_binary(node, &ctx),
        NodeKind::Function => function::walk_function(node, &ctx),
        NodeKind::Extract => extract::walk_extract(node, &ctx),
        NodeKind::Interval => interval::walk_interval(node, &ctx, sign),
        NodeKind::ColumnRef => walk_column(node, &ctx),
        NodeKind::ExprList => node
            .items()
            .into_iter()
            .flat_map(|item| walk(item, &ctx))
            .collect(),
        NodeKind::Unary => node
            .inner()
            .map(|operand| walk(operand, &ctx))
            .unwrap_or_default(),
        NodeKind::Literal(_) => Vec::new(),
        NodeKind::Other => {
            trace!(tag = ?node.type_tag(), "Node kind carries no date signal");
            Vec::new()
        }
    }
}

/// A bare column is only a field; an ancestor supplies the rest.
fn walk_column(node: ExpressionNode<'_>, ctx: &WalkContext<'_>) -> Vec<PartialFilter> {
    match ctx.schema.resolve_column(node) {
        Some(name) if !ctx.registry.is_current_instant(name) => {
            vec![PartialFilter::new().with_field(name)]
        }
        _ => Vec::new(),
    }
}

/// Give `column` to every filter that has no field yet.
pub(crate) fn stamp_field(filters: Vec<PartialFilter>, column: Option<&str>) -> Vec<PartialFilter> {
    filters
        .into_iter()
        .map(|filter| filter.or_field(column))
        .collect()
}
