//! Filter descriptors: the partial form accumulated during a walk and the
//! completed form handed to callers.

pub mod partial;

pub use partial::PartialFilter;

use crate::core::period::Period;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Temporal relation of a filter to the present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Current,
    Last,
    Next,
    Previous,
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterType::Current => "current",
            FilterType::Last => "last",
            FilterType::Next => "next",
            FilterType::Previous => "previous",
        };
        write!(f, "{name}")
    }
}

/// A completed relative date filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilter {
    pub field: String,
    pub period: Period,
    pub number_of_periods: u32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<FilterType>,
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.filter_type {
            Some(kind) => write!(
                f,
                "{} {} {} {}",
                self.field, kind, self.number_of_periods, self.period
            ),
            None => write!(f, "{} {} {}", self.field, self.number_of_periods, self.period),
        }
    }
}
