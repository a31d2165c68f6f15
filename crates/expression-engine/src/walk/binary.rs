use super::{stamp_field, walk};
use crate::{context::WalkContext, merge::merge};
use model::{BinaryOperator, ExpressionNode, PartialFilter};
use tracing::debug;

pub(crate) fn walk_binary(node: ExpressionNode<'_>, ctx: &WalkContext<'_>) -> Vec<PartialFilter> {
    let op = node.operator();
    if op.is_none() {
        debug!(operator = ?node.raw_operator(), "Unrecognised binary operator, operands concatenated");
    }

    let column = ctx.schema.resolve_column(node);
    let child_ctx = ctx.with_sign(op.and_then(|op| op.sign()));
    let left = node.left().map(|n| walk(n, &child_ctx)).unwrap_or_default();
    let right = node.right().map(|n| walk(n, &child_ctx)).unwrap_or_default();

    let filters = match op {
        Some(op) if op.is_merge_eligible() => combine(left, right, op, ctx),
        _ => concat(left, right),
    };

    if filters.is_empty() {
        return column
            .map(|field| vec![PartialFilter::new().with_field(field)])
            .unwrap_or_default();
    }
    stamp_field(filters, column)
}

/// Merge the last filter of each operand into the single filter this node
/// passes up. Earlier filters of either operand are dropped.
///
/// Under `AND`, a conjunct that is already complete stands on its own:
/// `EXTRACT(YEAR ...) = ... AND EXTRACT(MONTH ...) = ...` yields two filters.
fn combine(
    mut left: Vec<PartialFilter>,
    mut right: Vec<PartialFilter>,
    op: BinaryOperator,
    ctx: &WalkContext<'_>,
) -> Vec<PartialFilter> {
    if op == BinaryOperator::And {
        let left_complete = left.last().is_some_and(PartialFilter::is_complete);
        let right_complete = right.last().is_some_and(PartialFilter::is_complete);
        if left_complete || right_complete {
            return concat(left, right);
        }
    }

    merge(left.pop(), right.pop(), op, ctx.config.week_start)
        .into_iter()
        .collect()
}

fn concat(mut left: Vec<PartialFilter>, right: Vec<PartialFilter>) -> Vec<PartialFilter> {
    left.extend(right);
    left
}
