use model::{core::calendar, BinaryOperator, FilterType, PartialFilter, WeekStart};
use std::cmp::Ordering;

use BinaryOperator::*;

/// Decide how two sides of a comparison relate in time.
///
/// Each anchor is first moved to the start of its own filter's period so
/// that "now" and "start of this month" compare equal under a month filter.
pub fn classify(
    a: &PartialFilter,
    b: &PartialFilter,
    op: BinaryOperator,
    week_start: WeekStart,
) -> Option<FilterType> {
    let anchor_a = normalized_anchor(a, week_start);
    let anchor_b = normalized_anchor(b, week_start);

    if anchor_a.is_none() && anchor_b.is_none() {
        return None;
    }

    match op {
        LessThan | LessOrEqual => match (anchor_a, anchor_b) {
            (None, _) => Some(FilterType::Previous),
            (_, None) => Some(FilterType::Last),
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => Some(FilterType::Last),
                Ordering::Less => Some(FilterType::Previous),
                Ordering::Greater => None,
            },
        },
        Equal | Between => {
            if anchor_a.is_some() && anchor_a == anchor_b {
                return Some(FilterType::Current);
            }
            let (reference, other) = if a.field.is_some() {
                (anchor_a, anchor_b)
            } else if b.field.is_some() {
                (anchor_b, anchor_a)
            } else {
                return None;
            };
            match (reference, other) {
                (Some(r), Some(o)) if r > o => Some(FilterType::Previous),
                (Some(r), Some(o)) if r < o => Some(FilterType::Next),
                _ => None,
            }
        }
        GreaterThan | GreaterOrEqual => match (anchor_a, anchor_b) {
            (None, _) => Some(FilterType::Last),
            (_, None) => Some(FilterType::Next),
            (Some(x), Some(y)) if x >= y => Some(FilterType::Next),
            _ => None,
        },
        _ => None,
    }
}

fn normalized_anchor(filter: &PartialFilter, week_start: WeekStart) -> Option<chrono::NaiveDateTime> {
    let anchor = filter.anchor?;
    match filter.period {
        Some(period) => calendar::truncate_to_start(anchor, period, week_start),
        None => Some(anchor),
    }
}
