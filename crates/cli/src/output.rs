use crate::error::CliError;
use model::DateFilter;

fn filters_json(filters: &[DateFilter]) -> Result<String, CliError> {
    serde_json::to_string_pretty(filters).map_err(CliError::JsonSerialize)
}

pub async fn write_filters(filters: &[DateFilter], path: &str) -> Result<(), CliError> {
    let json = filters_json(filters)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

pub fn print_filters(filters: &[DateFilter]) -> Result<(), CliError> {
    let json = filters_json(filters)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{FilterType, Period};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_filters_as_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("filters.json");
        let filters = vec![DateFilter {
            field: "d".to_string(),
            period: Period::Months,
            number_of_periods: 1,
            filter_type: Some(FilterType::Last),
        }];

        write_filters(&filters, path.to_str().unwrap()).await.unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            serde_json::json!([{"field": "d", "period": "months", "numberOfPeriods": 1, "type": "last"}])
        );
    }
}
