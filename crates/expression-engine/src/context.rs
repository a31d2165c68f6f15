use crate::{config::EngineConfig, functions::FunctionRegistry};
use chrono::NaiveDateTime;
use dialect_schema::DialectSchema;
use model::{core::calendar, Period};
use tracing::warn;

/// Everything a walk needs besides the node itself.
///
/// `now` is captured once by the caller so every anchor in one extraction is
/// computed from the same instant.
#[derive(Debug, Clone, Copy)]
pub struct WalkContext<'a> {
    pub schema: &'a DialectSchema,
    pub registry: &'a FunctionRegistry,
    pub config: &'a EngineConfig,
    pub now: NaiveDateTime,
    depth: usize,
    sign: Option<i64>,
}

impl<'a> WalkContext<'a> {
    pub fn new(
        schema: &'a DialectSchema,
        registry: &'a FunctionRegistry,
        config: &'a EngineConfig,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            schema,
            registry,
            config,
            now,
            depth: 0,
            sign: None,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Direction handed down by an enclosing `+` or `-`.
    pub fn sign(&self) -> Option<i64> {
        self.sign
    }

    pub fn exceeds_depth(&self) -> bool {
        self.depth >= self.config.max_depth
    }

    /// Context for a child node. The sign only reaches direct operands.
    pub fn descend(&self) -> Self {
        Self {
            depth: self.depth + 1,
            sign: None,
            ..*self
        }
    }

    pub fn with_sign(&self, sign: Option<i64>) -> Self {
        Self { sign, ..*self }
    }

    pub fn truncate(&self, instant: NaiveDateTime, period: Period) -> Option<NaiveDateTime> {
        calendar::truncate_to_start(instant, period, self.config.week_start)
    }

    pub fn shift(&self, instant: NaiveDateTime, period: Period, count: i64) -> Option<NaiveDateTime> {
        let shifted = calendar::shift(instant, period, count);
        if shifted.is_none() {
            warn!("Shifting {instant} by {count} {period} overflows the calendar, anchor dropped");
        }
        shifted
    }
}
