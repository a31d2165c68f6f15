use crate::schema::{
    ColumnRefDocument, DialectSchema, FunctionDocument, FunctionPathsDocument, SchemaDocument,
};
use lazy_static::lazy_static;
use model::SqlDialect;
use std::collections::{BTreeMap, HashMap};

lazy_static! {
    static ref BUILTIN_SCHEMAS: HashMap<SqlDialect, DialectSchema> = SqlDialect::ALL
        .into_iter()
        .map(|dialect| (dialect, DialectSchema::from_document(builtin_document(dialect))))
        .collect();
    static ref EMPTY_SCHEMA: DialectSchema = DialectSchema::default();
}

impl DialectSchema {
    /// Shared, read-only table for one of the supported dialects.
    pub fn builtin(dialect: SqlDialect) -> &'static DialectSchema {
        BUILTIN_SCHEMAS.get(&dialect).unwrap_or(&EMPTY_SCHEMA)
    }
}

fn paths(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect()
}

fn period_and_count(period: &str, count: &str) -> FunctionPathsDocument {
    FunctionPathsDocument {
        period: Some(period.to_string()),
        interval: Some(count.to_string()),
    }
}

fn period_only(period: &str) -> FunctionPathsDocument {
    FunctionPathsDocument {
        period: Some(period.to_string()),
        interval: None,
    }
}

/// Table source for each dialect, in the same layout accepted by
/// [`DialectSchema::from_json`].
pub fn builtin_document(dialect: SqlDialect) -> SchemaDocument {
    let name = FunctionDocument {
        name: Some("name.name[0].value".to_string()),
    };

    match dialect {
        SqlDialect::Postgresql => SchemaDocument {
            column_ref: ColumnRefDocument {
                column: Some("column.expr.value".to_string()),
                functions: paths(&[("date_trunc", "args.value[1].column.expr.value")]),
                extract: Some("args.source.column.expr.value".to_string()),
            },
            function: name,
            functions: BTreeMap::new(),
        },
        SqlDialect::Redshift => SchemaDocument {
            column_ref: ColumnRefDocument {
                column: Some("column.expr.value".to_string()),
                functions: paths(&[("date_trunc", "args.value[1].column.expr.value")]),
                extract: Some("args.source.column.expr.value".to_string()),
            },
            function: name,
            functions: BTreeMap::from([(
                "dateadd".to_string(),
                period_and_count("args.value[0].column.expr.value", "args.value[1]"),
            )]),
        },
        SqlDialect::Snowflake => SchemaDocument {
            column_ref: ColumnRefDocument {
                column: Some("column".to_string()),
                functions: paths(&[
                    ("year", "args.value[0].column"),
                    ("month", "args.value[0].column"),
                    ("date_trunc", "args.value[1].column"),
                ]),
                extract: Some("args.source.column".to_string()),
            },
            function: name,
            functions: BTreeMap::from([
                (
                    "dateadd".to_string(),
                    period_and_count("args.value[0].column", "args.value[1]"),
                ),
                (
                    "timestampadd".to_string(),
                    period_and_count("args.value[0].column", "args.value[1]"),
                ),
            ]),
        },
        SqlDialect::Bigquery => SchemaDocument {
            column_ref: ColumnRefDocument {
                column: Some("column".to_string()),
                functions: paths(&[
                    ("parse_timestamp", "args.value[1].column"),
                    ("timestamp_trunc", "args.value[0].column"),
                    ("date_trunc", "args.value[0].column"),
                    ("datetime_trunc", "args.value[0].column"),
                ]),
                extract: Some("args.source.column".to_string()),
            },
            function: name,
            functions: BTreeMap::from([
                ("timestamp_trunc".to_string(), period_only("args.value[1].column")),
                ("date_trunc".to_string(), period_only("args.value[1].column")),
                ("datetime_trunc".to_string(), period_only("args.value[1].column")),
            ]),
        },
        SqlDialect::Mysql => SchemaDocument {
            column_ref: ColumnRefDocument {
                column: Some("column".to_string()),
                functions: paths(&[
                    ("year", "args.value[0].column"),
                    ("month", "args.value[0].column"),
                ]),
                extract: None,
            },
            function: name,
            functions: BTreeMap::from([(
                "timestampadd".to_string(),
                period_and_count("args.value[0].column", "args.value[1]"),
            )]),
        },
    }
}
