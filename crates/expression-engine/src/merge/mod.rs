//! Fusing the filters found on both sides of an operator.

pub mod classify;

pub use classify::classify;

use model::{core::calendar, BinaryOperator, PartialFilter, Period, PeriodSpan, WeekStart};
use std::cmp::Ordering;
use tracing::trace;

/// Merge the last filter of each operand into one.
///
/// With one side absent the other is returned unchanged. Otherwise the
/// shorter span wins (ties go to the smaller count, then to `a`), the field
/// comes from `a` before `b`, arithmetic operators move the anchor and the
/// type is recomputed from the two anchors.
pub fn merge(
    a: Option<PartialFilter>,
    b: Option<PartialFilter>,
    op: BinaryOperator,
    week_start: WeekStart,
) -> Option<PartialFilter> {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        (Some(only), None) | (None, Some(only)) => return Some(only),
        (None, None) => return None,
    };

    let (period, count) = pick_span(&a, &b);
    let anchor = merged_anchor(&a, &b, op);
    let filter_type = classify(&a, &b, op, week_start);
    trace!(%op, ?period, ?count, ?filter_type, "merged filters");

    Some(
        PartialFilter::new()
            .with_period(period)
            .with_count(count)
            .with_anchor(anchor)
            .with_type(filter_type)
            .or_field(a.field.as_deref())
            .or_field(b.field.as_deref()),
    )
}

/// Order spans by total length, then by count.
pub fn compare_spans(a: &PeriodSpan, b: &PeriodSpan) -> Ordering {
    a.duration_seconds()
        .cmp(&b.duration_seconds())
        .then_with(|| a.count.unwrap_or(1).cmp(&b.count.unwrap_or(1)))
}

fn pick_span(a: &PartialFilter, b: &PartialFilter) -> (Option<Period>, Option<u32>) {
    match (a.span(), b.span()) {
        (Some(span_a), Some(span_b)) => {
            let winner = if compare_spans(&span_b, &span_a) == Ordering::Less {
                span_b
            } else {
                span_a
            };
            (Some(winner.period), winner.count)
        }
        (Some(span), None) => (Some(span.period), span.count.or(b.number_of_periods)),
        (None, Some(span)) => (Some(span.period), span.count.or(a.number_of_periods)),
        (None, None) => (None, a.number_of_periods.or(b.number_of_periods)),
    }
}

/// For `+`/`-`, when exactly one side carries a count, shift the other
/// side's anchor by it: `DATE_TRUNC('month', now) - INTERVAL '1 month'`
/// anchors at the start of last month.
fn merged_anchor(
    a: &PartialFilter,
    b: &PartialFilter,
    op: BinaryOperator,
) -> Option<chrono::NaiveDateTime> {
    let fallback = a.anchor.or(b.anchor);
    let Some(sign) = op.sign() else {
        return fallback;
    };

    let (base, counted) = match (a.number_of_periods, b.number_of_periods) {
        (None, Some(_)) => (a, b),
        (Some(_), None) => (b, a),
        _ => return fallback,
    };

    match (base.anchor, counted.span()) {
        (Some(anchor), Some(PeriodSpan { period, count: Some(n) })) => {
            calendar::shift(anchor, period, sign * i64::from(n)).or(fallback)
        }
        _ => fallback,
    }
}
