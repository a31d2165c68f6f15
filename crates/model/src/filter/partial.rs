use super::{DateFilter, FilterType};
use crate::core::period::{Period, PeriodSpan};
use chrono::NaiveDateTime;

/// Knowledge about one date filter gathered so far.
///
/// Built with consuming combinators; the `or_*` variants only fill members
/// that are still unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialFilter {
    pub field: Option<String>,
    pub period: Option<Period>,
    pub number_of_periods: Option<u32>,
    pub filter_type: Option<FilterType>,
    /// Absolute instant the filter points at. Only used for classification.
    pub anchor: Option<NaiveDateTime>,
}

impl PartialFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_period(mut self, period: Option<Period>) -> Self {
        self.period = period;
        self
    }

    pub fn with_count(mut self, count: Option<u32>) -> Self {
        self.number_of_periods = count;
        self
    }

    pub fn with_span(self, span: PeriodSpan) -> Self {
        self.with_period(Some(span.period)).with_count(span.count)
    }

    pub fn with_anchor(mut self, anchor: Option<NaiveDateTime>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_type(mut self, filter_type: Option<FilterType>) -> Self {
        self.filter_type = filter_type;
        self
    }

    pub fn or_field(mut self, field: Option<&str>) -> Self {
        if self.field.is_none() {
            self.field = field.map(str::to_string);
        }
        self
    }

    pub fn or_period(mut self, period: Option<Period>) -> Self {
        self.period = self.period.or(period);
        self
    }

    pub fn or_count(mut self, count: Option<u32>) -> Self {
        self.number_of_periods = self.number_of_periods.or(count);
        self
    }

    pub fn or_anchor(mut self, anchor: Option<NaiveDateTime>) -> Self {
        self.anchor = self.anchor.or(anchor);
        self
    }

    pub fn span(&self) -> Option<PeriodSpan> {
        self.period
            .map(|period| PeriodSpan::new(period, self.number_of_periods))
    }

    pub fn is_complete(&self) -> bool {
        self.field.is_some() && self.period.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.field.is_none()
            && self.period.is_none()
            && self.number_of_periods.is_none()
            && self.filter_type.is_none()
            && self.anchor.is_none()
    }

    /// Promote to a [`DateFilter`] when field and period are known.
    /// A missing count becomes one and the anchor is dropped.
    pub fn complete(self) -> Option<DateFilter> {
        match (self.field, self.period) {
            (Some(field), Some(period)) => Some(DateFilter {
                field,
                period,
                number_of_periods: self.number_of_periods.unwrap_or(1).max(1),
                filter_type: self.filter_type,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_complete_requires_field_and_period() {
        assert!(PartialFilter::new().with_field("d").complete().is_none());
        assert!(PartialFilter::new().with_period(Some(Period::Days)).complete().is_none());

        let filter = PartialFilter::new()
            .with_field("d")
            .with_period(Some(Period::Days))
            .complete()
            .unwrap();
        assert_eq!(filter.number_of_periods, 1);
        assert_eq!(filter.filter_type, None);
    }

    #[test]
    fn test_complete_keeps_count_and_type() {
        let anchor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0);
        let filter = PartialFilter::new()
            .with_field("created_at")
            .with_span(PeriodSpan::new(Period::Days, Some(90)))
            .with_type(Some(FilterType::Last))
            .with_anchor(anchor)
            .complete()
            .unwrap();
        assert_eq!(filter.number_of_periods, 90);
        assert_eq!(filter.filter_type, Some(FilterType::Last));
    }

    #[test]
    fn test_or_combinators_only_fill_gaps() {
        let filter = PartialFilter::new()
            .with_field("a")
            .or_field(Some("b"))
            .or_period(Some(Period::Weeks))
            .or_period(Some(Period::Years))
            .or_count(None);
        assert_eq!(filter.field.as_deref(), Some("a"));
        assert_eq!(filter.period, Some(Period::Weeks));
        assert_eq!(filter.number_of_periods, None);
    }

    #[test]
    fn test_is_empty() {
        assert!(PartialFilter::new().is_empty());
        assert!(!PartialFilter::new().with_count(Some(2)).is_empty());
    }
}
