mod common;

use common::{and, binary, call, interval_string, now, number, string, Sql};
use expression_engine::{extract_date_filters, DateFilterExtractor, EngineConfig};
use model::{Period, SqlDialect};
use serde_json::{json, Value};
use std::{sync::Arc, thread};

fn sample_predicates(sql: Sql) -> Vec<Value> {
    vec![
        binary(">=", sql.column("d"), sql.ago(1, "month")),
        binary(
            "=",
            sql.date_trunc("month", sql.column("d")),
            sql.date_trunc("month", sql.current_date()),
        ),
        and(
            binary("=", sql.extract("YEAR", sql.column("d")), sql.extract("YEAR", sql.current_date())),
            binary("<>", sql.column("status"), string("void")),
        ),
        binary("OR", sql.column("a"), binary("=", sql.column("id"), number(3))),
        call("COALESCE", vec![sql.column("d"), sql.current_date()]),
    ]
}

#[test]
fn test_extraction_is_deterministic() {
    for dialect in SqlDialect::ALL {
        let extractor = DateFilterExtractor::new(dialect);
        for predicate in sample_predicates(Sql(dialect)) {
            let first = extractor.extract(Some(&predicate), now());
            let second = extractor.extract(Some(&predicate), now());
            assert_eq!(first, second, "{dialect}");
        }
    }
}

#[test]
fn test_every_result_is_complete() {
    for dialect in SqlDialect::ALL {
        for predicate in sample_predicates(Sql(dialect)) {
            for found in extract_date_filters(Some(&predicate), dialect, now()) {
                assert!(!found.field.is_empty());
                assert!(found.number_of_periods >= 1);
            }
        }
    }
}

#[test]
fn test_no_date_signal_is_empty() {
    let dialect = SqlDialect::Postgresql;
    let sql = Sql(dialect);
    let predicates = [
        binary("=", sql.column("id"), number(1)),
        binary("LIKE", sql.column("name"), string("a%")),
        call("LOWER", vec![sql.column("email")]),
        json!({"type": "bool", "value": true}),
        json!({}),
    ];
    for predicate in predicates {
        assert!(extract_date_filters(Some(&predicate), dialect, now()).is_empty(), "{predicate}");
    }
}

#[test]
fn test_span_tie_break_is_order_independent() {
    let dialect = SqlDialect::Postgresql;
    let sql = Sql(dialect);
    let months = binary("-", sql.current_date(), interval_string("3 months"));
    let days = binary("-", sql.current_date(), interval_string("90 days"));

    for (left, right) in [(months.clone(), days.clone()), (days, months)] {
        let predicate = binary(
            "=",
            sql.column("d"),
            binary("-", binary("+", left, right), sql.current_date()),
        );
        let filters = extract_date_filters(Some(&predicate), dialect, now());
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].period, Period::Months);
        assert_eq!(filters[0].number_of_periods, 3);
    }
}

#[test]
fn test_max_depth_is_configurable() {
    let dialect = SqlDialect::Mysql;
    let sql = Sql(dialect);
    let mut predicate = binary(">=", sql.column("d"), sql.ago(1, "week"));
    for _ in 0..20 {
        predicate = json!({"type": "unary_expr", "operator": "NOT", "expr": predicate});
    }

    let deep = DateFilterExtractor::new(dialect);
    assert_eq!(deep.extract(Some(&predicate), now()).len(), 1);

    let shallow = DateFilterExtractor::new(dialect)
        .with_config(EngineConfig::from_json(r#"{"max_depth": 10}"#).unwrap());
    assert!(shallow.extract(Some(&predicate), now()).is_empty());
}

#[test]
fn test_extractor_shared_across_threads() {
    let extractor = Arc::new(DateFilterExtractor::new(SqlDialect::Bigquery));
    let sql = Sql(SqlDialect::Bigquery);
    let predicate = Arc::new(binary(">=", sql.column("d"), sql.ago(14, "day")));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let extractor = Arc::clone(&extractor);
            let predicate = Arc::clone(&predicate);
            thread::spawn(move || extractor.extract(Some(&predicate), now()))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0][0].number_of_periods, 14);
}
