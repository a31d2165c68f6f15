#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use model::SqlDialect;
use serde_json::{json, Value};

/// Wednesday, mid-month, mid-quarter.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 15)
        .unwrap()
        .and_hms_opt(13, 45, 0)
        .unwrap()
}

/// Builds predicate trees in the shape a given dialect's parser emits.
#[derive(Debug, Clone, Copy)]
pub struct Sql(pub SqlDialect);

impl Sql {
    pub fn column(&self, name: &str) -> Value {
        match self.0 {
            SqlDialect::Postgresql | SqlDialect::Redshift => json!({
                "type": "column_ref",
                "table": null,
                "column": {"expr": {"type": "default", "value": name}}
            }),
            _ => json!({"type": "column_ref", "table": null, "column": name}),
        }
    }

    /// `CURRENT_DATE`, or `CURRENT_DATE()` where the dialect writes it so.
    pub fn current_date(&self) -> Value {
        call("CURRENT_DATE", vec![])
    }

    pub fn date_trunc(&self, unit: &str, source: Value) -> Value {
        match self.0 {
            SqlDialect::Bigquery => call("DATE_TRUNC", vec![source, self.column(unit)]),
            _ => call("DATE_TRUNC", vec![string(unit), source]),
        }
    }

    pub fn extract(&self, unit: &str, source: Value) -> Value {
        json!({"type": "extract", "args": {"field": unit, "source": source}})
    }

    /// `now - INTERVAL n unit` in the dialect's usual interval spelling.
    pub fn ago(&self, amount: i64, unit: &str) -> Value {
        binary("-", self.current_date(), self.interval(amount, unit))
    }

    pub fn interval(&self, amount: i64, unit: &str) -> Value {
        match self.0 {
            SqlDialect::Mysql | SqlDialect::Bigquery => interval_number(amount, unit),
            _ => interval_string(&format!("{amount} {unit}")),
        }
    }
}

pub fn call(name: &str, args: Vec<Value>) -> Value {
    json!({
        "type": "function",
        "name": {"name": [{"type": "default", "value": name}]},
        "args": {"type": "expr_list", "value": args},
        "over": null
    })
}

pub fn binary(op: &str, left: Value, right: Value) -> Value {
    json!({"type": "binary_expr", "operator": op, "left": left, "right": right})
}

pub fn and(left: Value, right: Value) -> Value {
    binary("AND", left, right)
}

pub fn between(subject: Value, low: Value, high: Value) -> Value {
    binary("BETWEEN", subject, json!({"type": "expr_list", "value": [low, high]}))
}

pub fn string(text: &str) -> Value {
    json!({"type": "single_quote_string", "value": text})
}

pub fn number(n: i64) -> Value {
    json!({"type": "number", "value": n})
}

pub fn interval_string(text: &str) -> Value {
    json!({"type": "interval", "expr": string(text), "unit": ""})
}

pub fn interval_number(amount: i64, unit: &str) -> Value {
    json!({"type": "interval", "expr": number(amount), "unit": unit})
}

pub fn select(predicate: Value) -> Value {
    json!({
        "type": "select",
        "columns": "*",
        "from": [{"db": null, "table": "transactions", "as": null}],
        "where": predicate
    })
}
