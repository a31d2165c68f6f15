use crate::{error::Result, path::NodePath};
use model::{ExpressionNode, NodeKind, Period, ast::node::integer_of};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

/// Argument locations for a function that carries its own period and count,
/// such as `DATEADD(day, -90, d)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionPaths {
    pub period: Option<NodePath>,
    pub count: Option<NodePath>,
}

/// Where a dialect's parser puts the pieces the walker needs.
///
/// Function keys are stored lower-case. Every lookup is total: a missing
/// table entry or a path that misses the node is simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialectSchema {
    pub column: Option<NodePath>,
    pub extract_column: Option<NodePath>,
    pub function_name: Option<NodePath>,
    pub function_columns: BTreeMap<String, NodePath>,
    pub functions: BTreeMap<String, FunctionPaths>,
}

/// JSON layout of a dialect table, with paths kept as plain strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaDocument {
    pub column_ref: ColumnRefDocument,
    pub function: FunctionDocument,
    pub functions: BTreeMap<String, FunctionPathsDocument>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnRefDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub functions: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionPathsDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(alias = "count", skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

fn lenient_path(raw: Option<&str>, location: &str) -> Option<NodePath> {
    let raw = raw?;
    match NodePath::parse(raw) {
        Ok(path) => Some(path),
        Err(err) => {
            warn!("Ignoring dialect path at {location}: {err}");
            None
        }
    }
}

impl DialectSchema {
    /// Load a custom table from JSON. Malformed individual paths are
    /// dropped with a warning; only unreadable JSON is an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: SchemaDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    pub fn from_document(document: SchemaDocument) -> Self {
        let function_columns = document
            .column_ref
            .functions
            .iter()
            .filter_map(|(name, raw)| {
                let location = format!("column_ref.functions.{name}");
                lenient_path(Some(raw.as_str()), &location).map(|path| (name.to_lowercase(), path))
            })
            .collect();

        let functions = document
            .functions
            .iter()
            .map(|(name, paths)| {
                let paths = FunctionPaths {
                    period: lenient_path(paths.period.as_deref(), &format!("functions.{name}.period")),
                    count: lenient_path(paths.interval.as_deref(), &format!("functions.{name}.interval")),
                };
                (name.to_lowercase(), paths)
            })
            .collect();

        DialectSchema {
            column: lenient_path(document.column_ref.column.as_deref(), "column_ref.column"),
            extract_column: lenient_path(document.column_ref.extract.as_deref(), "column_ref.extract"),
            function_name: lenient_path(document.function.name.as_deref(), "function.name"),
            function_columns,
            functions,
        }
    }

    pub fn to_document(&self) -> SchemaDocument {
        let as_string = |path: &Option<NodePath>| path.as_ref().map(|p| p.to_string());
        SchemaDocument {
            column_ref: ColumnRefDocument {
                column: as_string(&self.column),
                functions: self
                    .function_columns
                    .iter()
                    .map(|(name, path)| (name.clone(), path.to_string()))
                    .collect(),
                extract: as_string(&self.extract_column),
            },
            function: FunctionDocument {
                name: as_string(&self.function_name),
            },
            functions: self
                .functions
                .iter()
                .map(|(name, paths)| {
                    let document = FunctionPathsDocument {
                        period: as_string(&paths.period),
                        interval: as_string(&paths.count),
                    };
                    (name.clone(), document)
                })
                .collect(),
        }
    }

    /// Column name a node refers to.
    ///
    /// Column references use the dialect column path. Binary nodes resolve to
    /// their left column reference, then their right. Functions use their
    /// per-function path, then the first column argument that is not the
    /// function's period argument. Extracts use the extract path, then their
    /// source.
    pub fn resolve_column<'a>(&self, node: ExpressionNode<'a>) -> Option<&'a str> {
        match node.kind() {
            NodeKind::ColumnRef => self.column_of_ref(node),
            NodeKind::Binary => [node.left(), node.right()]
                .into_iter()
                .flatten()
                .find(|side| side.is_kind(NodeKind::ColumnRef))
                .and_then(|side| self.column_of_ref(side)),
            NodeKind::Function => {
                let name = self.resolve_function_name(node)?;
                self.resolve_function_column(&name, node).or_else(|| {
                    let period_position = self.period_arg_position(&name);
                    node.args()
                        .into_iter()
                        .enumerate()
                        .filter(|(i, arg)| {
                            Some(*i) != period_position && arg.is_kind(NodeKind::ColumnRef)
                        })
                        .find_map(|(_, arg)| self.column_of_ref(arg))
                })
            }
            NodeKind::Extract => self
                .extract_column
                .as_ref()
                .and_then(|path| path.lookup_str(node.value()))
                .or_else(|| {
                    node.extract_source()
                        .filter(|source| source.is_kind(NodeKind::ColumnRef))
                        .and_then(|source| self.column_of_ref(source))
                }),
            _ => None,
        }
    }

    fn column_of_ref<'a>(&self, node: ExpressionNode<'a>) -> Option<&'a str> {
        self.column
            .as_ref()
            .and_then(|path| path.lookup_str(node.value()))
            .or_else(|| node.value().get("column").and_then(Value::as_str))
    }

    /// Column named by the per-function path, if the dialect has one.
    pub fn resolve_function_column<'a>(&self, name: &str, node: ExpressionNode<'a>) -> Option<&'a str> {
        self.function_columns
            .get(&name.to_lowercase())
            .and_then(|path| path.lookup_str(node.value()))
    }

    /// Upper-cased function name.
    pub fn resolve_function_name(&self, node: ExpressionNode<'_>) -> Option<String> {
        let value = node.value();
        let by_path = self
            .function_name
            .as_ref()
            .and_then(|path| path.lookup_str(value));

        let by_parts = || {
            value
                .get("name")?
                .get("name")?
                .as_array()?
                .iter()
                .rev()
                .find_map(|part| part.get("value").and_then(Value::as_str).or_else(|| part.as_str()))
        };

        let plain = || value.get("name").and_then(Value::as_str);

        by_path
            .or_else(by_parts)
            .or_else(plain)
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.trim().to_uppercase())
    }

    /// Period named by the function's period argument, e.g. `day` in `DATEADD(day, -90, d)`.
    pub fn resolve_function_period_arg(&self, name: &str, node: ExpressionNode<'_>) -> Option<Period> {
        let path = self.functions.get(&name.to_lowercase())?.period.as_ref()?;
        let found = path.lookup(node.value())?;
        match found {
            Value::String(raw) => Period::normalize(raw),
            other => {
                let inner = ExpressionNode::new(other);
                inner
                    .as_text()
                    .or_else(|| self.column_of_ref(inner))
                    .and_then(Period::normalize)
            }
        }
    }

    /// Signed count named by the function's count argument, e.g. `-90`.
    pub fn resolve_function_count_arg(&self, name: &str, node: ExpressionNode<'_>) -> Option<i64> {
        let path = self.functions.get(&name.to_lowercase())?.count.as_ref()?;
        let found = path.lookup(node.value())?;
        if found.is_object() {
            ExpressionNode::new(found).as_integer()
        } else {
            integer_of(found)
        }
    }

    pub fn period_arg_position(&self, name: &str) -> Option<usize> {
        self.functions
            .get(&name.to_lowercase())?
            .period
            .as_ref()?
            .argument_position()
    }
}
