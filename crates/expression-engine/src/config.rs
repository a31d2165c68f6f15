use crate::error::Result;
use model::WeekStart;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunables for a walk. Every member has a default so partial JSON is fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// First day of the week used by week truncation.
    pub week_start: WeekStart,
    /// Subtrees nested deeper than this yield nothing.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
