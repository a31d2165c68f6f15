use crate::context::WalkContext;
use model::{ExpressionNode, LiteralKind, NodeKind, PartialFilter, Period, PeriodSpan};
use tracing::debug;

/// Period and signed amount of an `INTERVAL` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalLiteral {
    pub period: Period,
    pub amount: Option<i64>,
}

impl IntervalLiteral {
    /// Accepts `INTERVAL 1 MONTH` (number plus unit), `INTERVAL '1 month'`
    /// (count and unit in one string) and `INTERVAL '90' DAY`.
    pub fn parse(node: ExpressionNode<'_>) -> Option<IntervalLiteral> {
        let unit = node.interval_unit().and_then(Period::normalize);
        let Some(expr) = node.inner() else {
            return unit.map(|period| IntervalLiteral { period, amount: None });
        };

        match expr.kind() {
            NodeKind::Literal(LiteralKind::String) => {
                let text = expr.as_text()?;
                let mut words = text.split_whitespace();
                let first = words.next();
                let second = words.next();
                match (first, second) {
                    (Some(amount), Some(word)) => Some(IntervalLiteral {
                        period: unit.or_else(|| Period::normalize(word))?,
                        amount: amount.parse().ok(),
                    }),
                    (Some(single), None) => match single.parse::<i64>() {
                        Ok(amount) => unit.map(|period| IntervalLiteral {
                            period,
                            amount: Some(amount),
                        }),
                        Err(_) => Period::normalize(single)
                            .or(unit)
                            .map(|period| IntervalLiteral { period, amount: None }),
                    },
                    _ => unit.map(|period| IntervalLiteral { period, amount: None }),
                }
            }
            _ => unit.map(|period| IntervalLiteral {
                period,
                amount: expr.as_integer(),
            }),
        }
    }

    pub fn span(&self) -> PeriodSpan {
        PeriodSpan::from_signed(self.period, self.amount)
    }

    /// Amount with the direction of the enclosing operator applied.
    pub fn signed_amount(&self, sign: i64) -> i64 {
        sign.saturating_mul(self.amount.unwrap_or(1))
    }
}

pub(crate) fn walk_interval(node: ExpressionNode<'_>, ctx: &WalkContext<'_>, sign: Option<i64>) -> Vec<PartialFilter> {
    let Some(interval) = IntervalLiteral::parse(node) else {
        debug!("Interval without a recognisable unit");
        return Vec::new();
    };

    let anchor = sign.and_then(|sign| ctx.shift(ctx.now, interval.period, interval.signed_amount(sign)));

    vec![PartialFilter::new()
        .with_span(interval.span())
        .with_anchor(anchor)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Option<IntervalLiteral> {
        IntervalLiteral::parse(ExpressionNode::new(&value))
    }

    #[test]
    fn test_quoted_count_and_unit() {
        let literal = parse(json!({"type": "interval", "expr": {"type": "single_quote_string", "value": "30 months"}, "unit": ""}));
        assert_eq!(literal, Some(IntervalLiteral { period: Period::Months, amount: Some(30) }));
    }

    #[test]
    fn test_number_and_unit() {
        let literal = parse(json!({"type": "interval", "expr": {"type": "number", "value": 90}, "unit": "DAY"}));
        assert_eq!(literal, Some(IntervalLiteral { period: Period::Days, amount: Some(90) }));
    }

    #[test]
    fn test_quoted_number_with_separate_unit() {
        let literal = parse(json!({"type": "interval", "expr": {"type": "single_quote_string", "value": "90"}, "unit": "day"}));
        assert_eq!(literal, Some(IntervalLiteral { period: Period::Days, amount: Some(90) }));
    }

    #[test]
    fn test_unit_only() {
        let literal = parse(json!({"type": "interval", "expr": {"type": "single_quote_string", "value": "month"}, "unit": ""}));
        assert_eq!(literal, Some(IntervalLiteral { period: Period::Months, amount: None }));
    }

    #[test]
    fn test_unknown_unit_is_none() {
        assert_eq!(
            parse(json!({"type": "interval", "expr": {"type": "number", "value": 5}, "unit": "hour"})),
            None
        );
        assert_eq!(
            parse(json!({"type": "interval", "expr": {"type": "single_quote_string", "value": "2 hours"}, "unit": ""})),
            None
        );
    }

    #[test]
    fn test_signed_amount() {
        let literal = IntervalLiteral { period: Period::Days, amount: Some(90) };
        assert_eq!(literal.signed_amount(-1), -90);
        let bare = IntervalLiteral { period: Period::Days, amount: None };
        assert_eq!(bare.signed_amount(1), 1);
        assert_eq!(bare.span().count, None);
    }
}
