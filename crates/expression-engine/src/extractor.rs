use crate::{
    config::EngineConfig, context::WalkContext, error::Result, functions::FunctionRegistry,
    walk::walk,
};
use chrono::NaiveDateTime;
use dialect_schema::DialectSchema;
use model::{DateFilter, ExpressionNode, PartialFilter, SqlDialect};
use serde_json::Value;
use std::borrow::Cow;
use tracing::debug;

/// Extracts relative date filters from parsed `WHERE` clauses of one dialect.
///
/// Holds only immutable tables, so one extractor can serve many threads.
#[derive(Debug, Clone)]
pub struct DateFilterExtractor {
    dialect: SqlDialect,
    schema: Cow<'static, DialectSchema>,
    registry: FunctionRegistry,
    config: EngineConfig,
}

impl DateFilterExtractor {
    pub fn new(dialect: SqlDialect) -> Self {
        Self {
            dialect,
            schema: Cow::Borrowed(DialectSchema::builtin(dialect)),
            registry: FunctionRegistry::new(),
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the built-in table for this dialect.
    pub fn with_schema(mut self, schema: DialectSchema) -> Self {
        self.schema = Cow::Owned(schema);
        self
    }

    /// Load a replacement table from JSON.
    pub fn with_schema_json(self, json: &str) -> Result<Self> {
        let schema = DialectSchema::from_json(json)?;
        Ok(self.with_schema(schema))
    }

    pub fn with_registry(mut self, registry: FunctionRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }

    pub fn schema(&self) -> &DialectSchema {
        &self.schema
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Completed filters of a predicate, in pre-order left to right.
    /// No predicate, or one without date conditions, gives an empty list.
    pub fn extract(&self, predicate: Option<&Value>, now: NaiveDateTime) -> Vec<DateFilter> {
        let Some(root) = predicate.filter(|value| !value.is_null()) else {
            return Vec::new();
        };

        let ctx = WalkContext::new(&self.schema, &self.registry, &self.config, now);
        let partials = walk(ExpressionNode::new(root), &ctx);
        let found = partials.len();

        let filters: Vec<DateFilter> = partials
            .into_iter()
            .filter_map(PartialFilter::complete)
            .collect();

        debug!(
            dialect = %self.dialect,
            partial = found,
            complete = filters.len(),
            "Date filter extraction finished"
        );
        filters
    }

    /// Same as [`extract`](Self::extract), reading the `where` member of a
    /// parsed statement. Statement lists are not inspected.
    pub fn extract_from_statement(&self, statement: &Value, now: NaiveDateTime) -> Vec<DateFilter> {
        match statement {
            Value::Object(members) => self.extract(members.get("where"), now),
            Value::Array(_) => {
                debug!("Received a list of statements, expected a single statement");
                Vec::new()
            }
            _ => Vec::new(),
        }
    }
}

/// One-shot extraction with the built-in table and default configuration.
pub fn extract_date_filters(
    predicate: Option<&Value>,
    dialect: SqlDialect,
    now: NaiveDateTime,
) -> Vec<DateFilter> {
    DateFilterExtractor::new(dialect).extract(predicate, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 15).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn test_absent_predicate_is_empty() {
        let extractor = DateFilterExtractor::new(SqlDialect::Postgresql);
        assert!(extractor.extract(None, now()).is_empty());
        assert!(extractor.extract(Some(&Value::Null), now()).is_empty());
    }

    #[test]
    fn test_statement_without_where() {
        let extractor = DateFilterExtractor::new(SqlDialect::Mysql);
        let statement = json!({"type": "select", "columns": "*", "where": null});
        assert!(extractor.extract_from_statement(&statement, now()).is_empty());
        assert!(extractor.extract_from_statement(&json!([statement]), now()).is_empty());
    }

    #[test]
    fn test_custom_schema_replaces_builtin() {
        let extractor = DateFilterExtractor::new(SqlDialect::Mysql)
            .with_schema_json(r#"{"column_ref": {"column": "column.name"}}"#)
            .unwrap();
        assert_eq!(
            extractor.schema().column.as_ref().map(|p| p.as_str()),
            Some("column.name")
        );
        assert!(DateFilterExtractor::new(SqlDialect::Mysql)
            .with_schema_json("[")
            .is_err());
    }

    #[test]
    fn test_extractor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DateFilterExtractor>();
    }
}
