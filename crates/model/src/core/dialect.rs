use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// SQL grammars whose parsed predicate trees are understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    Postgresql,
    Mysql,
    Snowflake,
    Redshift,
    Bigquery,
}

impl SqlDialect {
    pub const ALL: [SqlDialect; 5] = [
        SqlDialect::Postgresql,
        SqlDialect::Mysql,
        SqlDialect::Snowflake,
        SqlDialect::Redshift,
        SqlDialect::Bigquery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SqlDialect::Postgresql => "postgresql",
            SqlDialect::Mysql => "mysql",
            SqlDialect::Snowflake => "snowflake",
            SqlDialect::Redshift => "redshift",
            SqlDialect::Bigquery => "bigquery",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SqlDialect {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => Ok(SqlDialect::Postgresql),
            "mysql" => Ok(SqlDialect::Mysql),
            "snowflake" => Ok(SqlDialect::Snowflake),
            "redshift" => Ok(SqlDialect::Redshift),
            "bigquery" | "bq" => Ok(SqlDialect::Bigquery),
            _ => Err(ModelError::UnknownDialect(s.to_string())),
        }
    }
}
