use crate::error::CliError;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use tokio::io::AsyncReadExt;

/// Read a JSON document from a file, or from stdin when no path is given.
pub async fn read_json(path: Option<&str>) -> Result<Value, CliError> {
    let source = match path {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            buffer
        }
    };
    Ok(serde_json::from_str(&source)?)
}

pub async fn read_text(path: &str) -> Result<String, CliError> {
    Ok(tokio::fs::read_to_string(path).await?)
}

/// Reference instant for the walk. Offsets are dropped after conversion to
/// the wall-clock time they name.
pub fn parse_now(raw: Option<&str>) -> Result<NaiveDateTime, CliError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(Local::now().naive_local());
    };

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.naive_local());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(instant);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| CliError::InvalidNow(raw.to_string()))
}
