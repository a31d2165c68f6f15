use super::walk;
use crate::context::WalkContext;
use model::{ExpressionNode, NodeKind, PartialFilter, Period};
use tracing::debug;

/// `EXTRACT(<unit> FROM <source>)`.
///
/// The unit becomes the period of every filter found in the source, and
/// anchors are truncated to it the same way `DATE_TRUNC` would.
pub(crate) fn walk_extract(node: ExpressionNode<'_>, ctx: &WalkContext<'_>) -> Vec<PartialFilter> {
    let period = node.extract_unit().and_then(Period::normalize);
    if period.is_none() {
        debug!(unit = ?node.extract_unit(), "EXTRACT unit is not a period");
    }

    let field = ctx
        .schema
        .resolve_column(node)
        .filter(|column| !ctx.registry.is_current_instant(column));

    let children = match node.extract_source() {
        Some(source)
            if matches!(
                source.kind(),
                NodeKind::Binary | NodeKind::Function | NodeKind::Extract | NodeKind::Unary
            ) =>
        {
            walk(source, ctx)
        }
        _ => Vec::new(),
    };

    let anchor = period.and_then(|p| ctx.truncate(ctx.now, p));

    if children.is_empty() {
        if field.is_none() && period.is_none() {
            return Vec::new();
        }
        let filter = PartialFilter::new().with_period(period).with_anchor(anchor);
        return vec![match field {
            Some(field) => filter.with_field(field),
            None => filter,
        }];
    }

    children
        .into_iter()
        .map(|child| {
            let Some(period) = period else {
                return child.or_field(field);
            };
            // a count measured in another unit says nothing about this one
            let count = match child.period {
                Some(existing) if existing != period => None,
                _ => child.number_of_periods,
            };
            let moved = match child.anchor {
                Some(existing) => ctx.truncate(existing, period),
                None => anchor,
            };
            child
                .with_period(Some(period))
                .with_count(count)
                .with_anchor(moved)
                .or_field(field)
        })
        .collect()
}
