use crate::core::operator::BinaryOperator;
use serde_json::Value;

/// Literal flavours, collapsed from the parser's many tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    String,
    Bool,
    Null,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    ColumnRef,
    Binary,
    Function,
    Extract,
    Interval,
    ExprList,
    Unary,
    Literal(LiteralKind),
    Other,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> NodeKind {
        match tag {
            "column_ref" => NodeKind::ColumnRef,
            "binary_expr" => NodeKind::Binary,
            "function" | "aggr_func" => NodeKind::Function,
            "extract" => NodeKind::Extract,
            "interval" => NodeKind::Interval,
            "expr_list" => NodeKind::ExprList,
            "unary_expr" => NodeKind::Unary,
            "number" | "bigint" => NodeKind::Literal(LiteralKind::Number),
            "single_quote_string" | "double_quote_string" | "string" | "natural_string"
            | "hex_string" | "full_hex_string" | "bit_string" | "backticks_quote_string" => {
                NodeKind::Literal(LiteralKind::String)
            }
            "bool" | "boolean" => NodeKind::Literal(LiteralKind::Bool),
            "null" => NodeKind::Literal(LiteralKind::Null),
            "date" | "time" | "timestamp" | "datetime" | "param" | "origin" | "default" => {
                NodeKind::Literal(LiteralKind::Other)
            }
            _ => NodeKind::Other,
        }
    }
}

/// Borrowed, read-only view over one node of a parsed predicate tree.
///
/// Only the members whose layout is identical across dialects are exposed
/// here; dialect specific locations are resolved through a dialect schema.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionNode<'a> {
    value: &'a Value,
}

impl<'a> ExpressionNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(self) -> &'a Value {
        self.value
    }

    pub fn type_tag(self) -> Option<&'a str> {
        self.value.get("type").and_then(Value::as_str)
    }

    pub fn kind(self) -> NodeKind {
        self.type_tag().map_or(NodeKind::Other, NodeKind::from_tag)
    }

    pub fn is_kind(self, kind: NodeKind) -> bool {
        self.kind() == kind
    }

    pub fn child(self, key: &str) -> Option<ExpressionNode<'a>> {
        self.value
            .get(key)
            .filter(|v| v.is_object())
            .map(ExpressionNode::new)
    }

    pub fn raw_operator(self) -> Option<&'a str> {
        self.value.get("operator").and_then(Value::as_str)
    }

    pub fn operator(self) -> Option<BinaryOperator> {
        self.raw_operator().and_then(BinaryOperator::parse)
    }

    pub fn left(self) -> Option<ExpressionNode<'a>> {
        self.child("left")
    }

    pub fn right(self) -> Option<ExpressionNode<'a>> {
        self.child("right")
    }

    /// Function call arguments from `args.value[]`. A single object in place
    /// of the list is treated as a one element list.
    pub fn args(self) -> Vec<ExpressionNode<'a>> {
        match self.value.get("args").and_then(|a| a.get("value")) {
            Some(Value::Array(items)) => items.iter().map(ExpressionNode::new).collect(),
            Some(single @ Value::Object(_)) => vec![ExpressionNode::new(single)],
            _ => Vec::new(),
        }
    }

    /// Unit keyword of an `EXTRACT(<unit> FROM ...)`.
    pub fn extract_unit(self) -> Option<&'a str> {
        let field = self.value.get("args")?.get("field")?;
        field
            .as_str()
            .or_else(|| field.get("value").and_then(Value::as_str))
    }

    pub fn extract_source(self) -> Option<ExpressionNode<'a>> {
        self.value
            .get("args")?
            .get("source")
            .filter(|v| v.is_object())
            .map(ExpressionNode::new)
    }

    /// Amount expression of an interval literal, or operand of a unary node.
    pub fn inner(self) -> Option<ExpressionNode<'a>> {
        self.child("expr")
    }

    pub fn interval_unit(self) -> Option<&'a str> {
        self.value
            .get("unit")
            .and_then(Value::as_str)
            .filter(|unit| !unit.trim().is_empty())
    }

    /// Elements of an expression list.
    pub fn items(self) -> Vec<ExpressionNode<'a>> {
        match self.value.get("value") {
            Some(Value::Array(items)) => items.iter().map(ExpressionNode::new).collect(),
            _ => Vec::new(),
        }
    }

    /// Text payload of a string literal.
    pub fn as_text(self) -> Option<&'a str> {
        match self.kind() {
            NodeKind::Literal(LiteralKind::String) => self.value.get("value").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Integral payload of a numeric literal, including a negated one.
    pub fn as_integer(self) -> Option<i64> {
        match self.kind() {
            NodeKind::Literal(LiteralKind::Number) => integer_of(self.value.get("value")?),
            NodeKind::Unary if self.raw_operator() == Some("-") => {
                self.inner()?.as_integer().and_then(i64::checked_neg)
            }
            _ => None,
        }
    }
}

/// Interpret a JSON scalar as a whole number.
pub fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_type_tag() {
        let tree = json!({"type": "binary_expr", "operator": ">=", "left": {"type": "column_ref"}, "right": {"type": "interval"}});
        let node = ExpressionNode::new(&tree);
        assert_eq!(node.kind(), NodeKind::Binary);
        assert_eq!(node.operator(), Some(BinaryOperator::GreaterOrEqual));
        assert_eq!(node.left().map(|n| n.kind()), Some(NodeKind::ColumnRef));
        assert_eq!(node.right().map(|n| n.kind()), Some(NodeKind::Interval));
    }

    #[test]
    fn test_untagged_node_is_other() {
        let tree = json!({"value": 1});
        assert_eq!(ExpressionNode::new(&tree).kind(), NodeKind::Other);
        let tree = json!("plain");
        assert_eq!(ExpressionNode::new(&tree).kind(), NodeKind::Other);
    }

    #[test]
    fn test_function_args() {
        let tree = json!({
            "type": "function",
            "name": {"name": [{"type": "default", "value": "DATE_TRUNC"}]},
            "args": {"type": "expr_list", "value": [
                {"type": "single_quote_string", "value": "month"},
                {"type": "column_ref", "column": "d"}
            ]}
        });
        let node = ExpressionNode::new(&tree);
        let args = node.args();
        assert_eq!(args.len(), 2);
        assert_eq!(args[0].as_text(), Some("month"));
        assert_eq!(args[1].kind(), NodeKind::ColumnRef);
    }

    #[test]
    fn test_extract_members() {
        let tree = json!({"type": "extract", "args": {"field": "YEAR", "source": {"type": "column_ref", "column": "d"}}});
        let node = ExpressionNode::new(&tree);
        assert_eq!(node.extract_unit(), Some("YEAR"));
        assert_eq!(node.extract_source().map(|s| s.kind()), Some(NodeKind::ColumnRef));
    }

    #[test]
    fn test_interval_members() {
        let tree = json!({"type": "interval", "expr": {"type": "number", "value": 90}, "unit": "DAY"});
        let node = ExpressionNode::new(&tree);
        assert_eq!(node.interval_unit(), Some("DAY"));
        assert_eq!(node.inner().and_then(|e| e.as_integer()), Some(90));

        let tree = json!({"type": "interval", "expr": {"type": "single_quote_string", "value": "1 month"}, "unit": ""});
        let node = ExpressionNode::new(&tree);
        assert_eq!(node.interval_unit(), None);
        assert_eq!(node.inner().and_then(|e| e.as_text()), Some("1 month"));
    }

    #[test]
    fn test_integer_forms() {
        let negated = json!({"type": "unary_expr", "operator": "-", "expr": {"type": "number", "value": 90}});
        assert_eq!(ExpressionNode::new(&negated).as_integer(), Some(-90));
        let stringly = json!({"type": "number", "value": "12"});
        assert_eq!(ExpressionNode::new(&stringly).as_integer(), Some(12));
        let fractional = json!({"type": "number", "value": 1.5});
        assert_eq!(ExpressionNode::new(&fractional).as_integer(), None);
    }
}
