use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators found in predicate trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Between,
    NotBetween,
    And,
    Or,
    In,
    NotIn,
    Is,
    IsNot,
    Like,
    NotLike,
}

impl BinaryOperator {
    /// Parse the operator spelling used by parsed predicate trees.
    /// Unknown operators are `None`.
    pub fn parse(raw: &str) -> Option<BinaryOperator> {
        let normalized = raw.trim().to_ascii_uppercase();
        let op = match normalized.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Subtract,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "%" => BinaryOperator::Modulo,
            "=" | "==" => BinaryOperator::Equal,
            "!=" | "<>" => BinaryOperator::NotEqual,
            ">" => BinaryOperator::GreaterThan,
            "<" => BinaryOperator::LessThan,
            ">=" => BinaryOperator::GreaterOrEqual,
            "<=" => BinaryOperator::LessOrEqual,
            "BETWEEN" => BinaryOperator::Between,
            "NOT BETWEEN" => BinaryOperator::NotBetween,
            "AND" | "&&" => BinaryOperator::And,
            "OR" | "||" => BinaryOperator::Or,
            "IN" => BinaryOperator::In,
            "NOT IN" => BinaryOperator::NotIn,
            "IS" => BinaryOperator::Is,
            "IS NOT" => BinaryOperator::IsNot,
            "LIKE" => BinaryOperator::Like,
            "NOT LIKE" => BinaryOperator::NotLike,
            _ => return None,
        };
        Some(op)
    }

    /// Operators at which the last filters of both operands fuse into one.
    pub fn is_merge_eligible(&self) -> bool {
        matches!(
            self,
            BinaryOperator::LessThan
                | BinaryOperator::LessOrEqual
                | BinaryOperator::GreaterThan
                | BinaryOperator::GreaterOrEqual
                | BinaryOperator::Equal
                | BinaryOperator::Between
                | BinaryOperator::And
                | BinaryOperator::Add
                | BinaryOperator::Subtract
        )
    }

    /// Direction an interval operand moves its anchor in.
    pub fn sign(&self) -> Option<i64> {
        match self {
            BinaryOperator::Add => Some(1),
            BinaryOperator::Subtract => Some(-1),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
            BinaryOperator::Modulo => write!(f, "%"),
            BinaryOperator::Equal => write!(f, "="),
            BinaryOperator::NotEqual => write!(f, "!="),
            BinaryOperator::GreaterThan => write!(f, ">"),
            BinaryOperator::LessThan => write!(f, "<"),
            BinaryOperator::GreaterOrEqual => write!(f, ">="),
            BinaryOperator::LessOrEqual => write!(f, "<="),
            BinaryOperator::Between => write!(f, "BETWEEN"),
            BinaryOperator::NotBetween => write!(f, "NOT BETWEEN"),
            BinaryOperator::And => write!(f, "AND"),
            BinaryOperator::Or => write!(f, "OR"),
            BinaryOperator::In => write!(f, "IN"),
            BinaryOperator::NotIn => write!(f, "NOT IN"),
            BinaryOperator::Is => write!(f, "IS"),
            BinaryOperator::IsNot => write!(f, "IS NOT"),
            BinaryOperator::Like => write!(f, "LIKE"),
            BinaryOperator::NotLike => write!(f, "NOT LIKE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_operator_display() {
        assert_eq!(format!("{}", BinaryOperator::Equal), "=");
        assert_eq!(format!("{}", BinaryOperator::And), "AND");
        assert_eq!(format!("{}", BinaryOperator::GreaterOrEqual), ">=");
    }

    #[test]
    fn test_parse_spellings() {
        assert_eq!(BinaryOperator::parse(">="), Some(BinaryOperator::GreaterOrEqual));
        assert_eq!(BinaryOperator::parse("between"), Some(BinaryOperator::Between));
        assert_eq!(BinaryOperator::parse("NOT  BETWEEN"), Some(BinaryOperator::NotBetween));
        assert_eq!(BinaryOperator::parse("<>"), Some(BinaryOperator::NotEqual));
        assert_eq!(BinaryOperator::parse("and"), Some(BinaryOperator::And));
        assert_eq!(BinaryOperator::parse("@@"), None);
    }

    #[test]
    fn test_merge_eligibility() {
        assert!(BinaryOperator::And.is_merge_eligible());
        assert!(BinaryOperator::Subtract.is_merge_eligible());
        assert!(BinaryOperator::Between.is_merge_eligible());
        assert!(!BinaryOperator::Or.is_merge_eligible());
        assert!(!BinaryOperator::NotEqual.is_merge_eligible());
        assert!(!BinaryOperator::In.is_merge_eligible());
    }

    #[test]
    fn test_sign() {
        assert_eq!(BinaryOperator::Add.sign(), Some(1));
        assert_eq!(BinaryOperator::Subtract.sign(), Some(-1));
        assert_eq!(BinaryOperator::Equal.sign(), None);
    }
}
