use super::{interval::IntervalLiteral, walk};
use crate::{
    context::WalkContext,
    functions::{FunctionRole, ShiftDirection},
};
use chrono::NaiveDateTime;
use model::{ExpressionNode, LiteralKind, NodeKind, PartialFilter, Period, PeriodSpan};
use tracing::{debug, trace};

pub(crate) fn walk_function(node: ExpressionNode<'_>, ctx: &WalkContext<'_>) -> Vec<PartialFilter> {
    let Some(name) = ctx.schema.resolve_function_name(node) else {
        debug!("Function call without a resolvable name");
        return node
            .args()
            .into_iter()
            .filter(|arg| is_nested_expression(*arg))
            .flat_map(|arg| walk(arg, ctx))
            .collect();
    };

    let role = ctx.registry.role(&name);
    trace!(function = %name, ?role, "walking function call");
    if role == Some(FunctionRole::CurrentInstant) {
        return Vec::new();
    }

    FunctionCall::collect(name, role, node, ctx).finish(ctx)
}

fn is_nested_expression(node: ExpressionNode<'_>) -> bool {
    matches!(
        node.kind(),
        NodeKind::Binary | NodeKind::Function | NodeKind::Extract | NodeKind::ExprList | NodeKind::Unary
    )
}

/// What one call site contributes before it is applied to its children.
struct FunctionCall<'n> {
    name: String,
    role: Option<FunctionRole>,
    field: Option<&'n str>,
    period: Option<Period>,
    /// Signed amount; the sign only matters for shifting functions.
    amount: Option<i64>,
    children: Vec<PartialFilter>,
}

impl<'n> FunctionCall<'n> {
    fn collect(
        name: String,
        role: Option<FunctionRole>,
        node: ExpressionNode<'n>,
        ctx: &WalkContext<'_>,
    ) -> Self {
        let schema = ctx.schema;
        let mut call = FunctionCall {
            field: schema.resolve_function_column(&name, node),
            period: schema.resolve_function_period_arg(&name, node),
            amount: schema.resolve_function_count_arg(&name, node),
            children: Vec::new(),
            name,
            role,
        };

        if let Some(FunctionRole::Part(period)) = role {
            call.period = Some(period);
            call.amount = Some(1);
        }

        let period_position = schema.period_arg_position(&call.name);
        for (position, arg) in node.args().into_iter().enumerate() {
            match arg.kind() {
                NodeKind::ColumnRef => call.column_arg(position, period_position, arg, ctx),
                NodeKind::Literal(LiteralKind::String) => call.string_arg(arg),
                NodeKind::Literal(LiteralKind::Number) => call.number_arg(arg),
                NodeKind::Interval => call.interval_arg(arg),
                NodeKind::Unary if arg.as_integer().is_some() => call.number_arg(arg),
                NodeKind::Binary
                | NodeKind::Function
                | NodeKind::Extract
                | NodeKind::ExprList
                | NodeKind::Unary => call.children.extend(walk(arg, ctx)),
                _ => {}
            }
        }
        call
    }

    fn column_arg(
        &mut self,
        position: usize,
        period_position: Option<usize>,
        arg: ExpressionNode<'n>,
        ctx: &WalkContext<'_>,
    ) {
        let Some(column) = ctx.schema.resolve_column(arg) else {
            return;
        };
        if ctx.registry.is_current_instant(column) {
            return;
        }

        let at_period_slot = period_position == Some(position);
        // Unit keywords parse as bare columns: DATEADD(day, ...), TIMESTAMP_TRUNC(d, MONTH)
        let keyword = if at_period_slot || (period_position.is_none() && self.takes_unit_keyword()) {
            unit_keyword(column)
        } else {
            None
        };

        match keyword {
            Some(period) => {
                self.period.get_or_insert(period);
            }
            None if at_period_slot => {}
            None => {
                self.field.get_or_insert(column);
            }
        }
    }

    fn string_arg(&mut self, arg: ExpressionNode<'n>) {
        let Some(text) = arg.as_text() else {
            return;
        };
        match self.role {
            Some(FunctionRole::Format) => {
                if self.period.is_none() {
                    self.period = format_period(text);
                    self.amount = Some(1);
                }
            }
            Some(_) if self.period.is_none() => self.period = Period::normalize(text),
            _ => {}
        }
    }

    fn number_arg(&mut self, arg: ExpressionNode<'n>) {
        if self.role == Some(FunctionRole::Shift(ShiftDirection::Signed)) && self.amount.is_none() {
            self.amount = arg.as_integer();
        }
    }

    fn interval_arg(&mut self, arg: ExpressionNode<'n>) {
        let Some(interval) = IntervalLiteral::parse(arg) else {
            return;
        };
        match self.role {
            Some(FunctionRole::Shift(ShiftDirection::Forward)) => {
                self.period = Some(interval.period);
                self.amount = Some(interval.signed_amount(1));
            }
            Some(FunctionRole::Shift(ShiftDirection::Backward)) => {
                self.period = Some(interval.period);
                self.amount = Some(interval.signed_amount(-1));
            }
            Some(_) if self.period.is_none() => {
                self.period = Some(interval.period);
                self.amount = self.amount.or(interval.amount);
            }
            _ => {}
        }
    }

    fn takes_unit_keyword(&self) -> bool {
        matches!(
            self.role,
            Some(FunctionRole::Truncate) | Some(FunctionRole::Shift(_))
        )
    }

    fn count(&self) -> Option<u32> {
        let period = self.period?;
        PeriodSpan::from_signed(period, self.amount).count
    }

    /// Apply this call to the filters found in its arguments, or stand in
    /// for them when there are none.
    fn finish(self, ctx: &WalkContext<'_>) -> Vec<PartialFilter> {
        let count = self.count();
        let (children, anchor) = match self.role {
            Some(FunctionRole::Truncate | FunctionRole::Part(_) | FunctionRole::Format) => {
                self.truncate_children(ctx)
            }
            Some(FunctionRole::Shift(_)) => self.shift_children(ctx, count),
            _ => (self.children, None),
        };

        if children.is_empty() {
            if self.field.is_none() && self.period.is_none() {
                return Vec::new();
            }
            let mut filter = PartialFilter::new()
                .with_period(self.period)
                .with_count(count)
                .with_anchor(anchor);
            if let Some(field) = self.field {
                filter = filter.with_field(field);
            }
            return vec![filter];
        }

        children
            .into_iter()
            .map(|child| {
                child
                    .or_field(self.field)
                    .or_period(self.period)
                    .or_count(count)
                    .or_anchor(anchor)
            })
            .collect()
    }

    /// Truncation composes: child anchors move to the start of this
    /// call's period, unanchored children take the start of the current one.
    /// The result is measured in this call's period.
    fn truncate_children(&self, ctx: &WalkContext<'_>) -> (Vec<PartialFilter>, Option<NaiveDateTime>) {
        let Some(period) = self.period else {
            return (self.children.clone(), None);
        };
        let anchor = ctx.truncate(ctx.now, period);
        let children = self
            .children
            .iter()
            .cloned()
            .map(|child| {
                let moved = match child.anchor {
                    Some(existing) => ctx.truncate(existing, period),
                    None => anchor,
                };
                let count = match child.period {
                    Some(existing) if existing != period => None,
                    _ => child.number_of_periods,
                };
                child
                    .with_period(Some(period))
                    .with_count(count)
                    .with_anchor(moved)
            })
            .collect();
        (children, anchor)
    }

    /// Shifting replaces the span of its children and moves the last
    /// child's anchor (or now) by the signed amount.
    fn shift_children(
        &self,
        ctx: &WalkContext<'_>,
        count: Option<u32>,
    ) -> (Vec<PartialFilter>, Option<NaiveDateTime>) {
        let Some(period) = self.period else {
            debug!(function = %self.name, "Shift without a unit");
            return (self.children.clone(), None);
        };
        let base = self
            .children
            .last()
            .and_then(|child| child.anchor)
            .unwrap_or(ctx.now);
        let anchor = ctx.shift(base, period, self.amount.unwrap_or(0));

        let children = self
            .children
            .iter()
            .cloned()
            .map(|child| {
                let child = child.with_period(Some(period));
                let child = match count {
                    Some(_) => child.with_count(count),
                    None => child,
                };
                match anchor {
                    Some(_) => child.with_anchor(anchor),
                    None => child,
                }
            })
            .collect();
        (children, anchor)
    }
}

/// Unit spelled as a bare word. Single letters are left alone since they
/// are far more likely to be column names.
fn unit_keyword(word: &str) -> Option<Period> {
    if word.trim().chars().count() > 1 {
        Period::normalize(word)
    } else {
        None
    }
}

/// Finest unit named by a date format string: `%Y-%m-%d` is daily.
fn format_period(format: &str) -> Option<Period> {
    format
        .chars()
        .rev()
        .find(|c| c.is_ascii_alphabetic())
        .and_then(|c| Period::normalize(c.encode_utf8(&mut [0; 4])))
}
