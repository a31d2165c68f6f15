use crate::error::{Result, SchemaError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// A location inside a JSON node, written as `args.value[1].column.expr.value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodePath {
    raw: String,
    segments: Vec<Segment>,
}

impl NodePath {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SchemaError::malformed(raw, "path is empty"));
        }

        let mut segments = Vec::new();
        for part in trimmed.split('.') {
            let (key, mut rest) = match part.find('[') {
                Some(pos) => (&part[..pos], &part[pos..]),
                None => (part, ""),
            };
            if key.is_empty() {
                return Err(SchemaError::malformed(raw, "empty key segment"));
            }
            if key.contains(']') {
                return Err(SchemaError::malformed(raw, "unexpected ']'"));
            }
            segments.push(Segment::Key(key.to_string()));

            while !rest.is_empty() {
                let Some(close) = rest.find(']') else {
                    return Err(SchemaError::malformed(raw, "unclosed '['"));
                };
                let index = rest[1..close]
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| SchemaError::malformed(raw, "index is not a number"))?;
                segments.push(Segment::Index(index));
                rest = &rest[close + 1..];
                if !rest.is_empty() && !rest.starts_with('[') {
                    return Err(SchemaError::malformed(raw, "text after index"));
                }
            }
        }

        Ok(Self {
            raw: trimmed.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Follow the path from `root`. Any miss is `None`.
    pub fn lookup<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| match segment {
                Segment::Key(key) => current.get(key.as_str()),
                Segment::Index(index) => current.get(*index),
            })
    }

    pub fn lookup_str<'a>(&self, root: &'a Value) -> Option<&'a str> {
        self.lookup(root).and_then(Value::as_str)
    }

    /// Argument index when the path starts at `args.value[i]`.
    pub fn argument_position(&self) -> Option<usize> {
        match self.segments.as_slice() {
            [Segment::Key(args), Segment::Key(value), Segment::Index(i), ..]
                if args == "args" && value == "value" =>
            {
                Some(*i)
            }
            _ => None,
        }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl FromStr for NodePath {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        NodePath::parse(s)
    }
}

impl TryFrom<String> for NodePath {
    type Error = SchemaError;

    fn try_from(value: String) -> Result<Self> {
        NodePath::parse(&value)
    }
}

impl From<NodePath> for String {
    fn from(path: NodePath) -> Self {
        path.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_segments() {
        let path = NodePath::parse("args.value[1].column.expr.value").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("args".into()),
                Segment::Key("value".into()),
                Segment::Index(1),
                Segment::Key("column".into()),
                Segment::Key("expr".into()),
                Segment::Key("value".into()),
            ]
        );
        assert_eq!(path.to_string(), "args.value[1].column.expr.value");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["", "a..b", "args.value[1", "args.value[x]", "a[0]b", ".a", "a]"] {
            assert!(
                matches!(NodePath::parse(raw), Err(SchemaError::MalformedPath { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_nested_indices() {
        let path = NodePath::parse("grid[1][0]").unwrap();
        let value = json!({"grid": [[1], [2, 3]]});
        assert_eq!(path.lookup(&value), Some(&json!(2)));
    }

    #[test]
    fn test_lookup_hits_and_misses() {
        let node = json!({"column": {"expr": {"type": "default", "value": "created_at"}}});
        let hit = NodePath::parse("column.expr.value").unwrap();
        let miss = NodePath::parse("column.expr.name").unwrap();
        let wrong_shape = NodePath::parse("column[0]").unwrap();

        assert_eq!(hit.lookup_str(&node), Some("created_at"));
        assert_eq!(miss.lookup(&node), None);
        assert_eq!(wrong_shape.lookup(&node), None);
    }

    #[test]
    fn test_argument_position() {
        assert_eq!(NodePath::parse("args.value[2].column").unwrap().argument_position(), Some(2));
        assert_eq!(NodePath::parse("args.source.column").unwrap().argument_position(), None);
        assert_eq!(NodePath::parse("column").unwrap().argument_position(), None);
    }

    #[test]
    fn test_serde_as_string() {
        let path: NodePath = serde_json::from_value(json!("name.name[0].value")).unwrap();
        assert_eq!(serde_json::to_value(&path).unwrap(), json!("name.name[0].value"));
        assert!(serde_json::from_value::<NodePath>(json!("name.[0]")).is_err());
    }
}
