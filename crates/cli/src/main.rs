use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use dialect_schema::DialectSchema;
use expression_engine::{DateFilterExtractor, EngineConfig};
use model::{SqlDialect, WeekStart};
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;

#[derive(Parser)]
#[command(
    name = "datescope",
    version = "0.1.0",
    about = "Infer relative date filters from parsed SQL predicates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            dialect,
            input,
            now,
            statement,
            week_start,
            schema,
            config,
            output,
        } => {
            let dialect = SqlDialect::from_str(&dialect)?;
            let now = input::parse_now(now.as_deref())?;

            let mut engine_config = match config {
                Some(path) => EngineConfig::from_json(&input::read_text(&path).await?)?,
                None => EngineConfig::default(),
            };
            if let Some(day) = week_start {
                engine_config = engine_config.with_week_start(WeekStart::from_str(&day)?);
            }

            let mut extractor = DateFilterExtractor::new(dialect).with_config(engine_config);
            if let Some(path) = schema {
                extractor = extractor.with_schema_json(&input::read_text(&path).await?)?;
            }

            info!(%dialect, %now, statement, "Extracting date filters");
            let tree = input::read_json(input.as_deref()).await?;
            let filters = if statement {
                extractor.extract_from_statement(&tree, now)
            } else {
                extractor.extract(Some(&tree), now)
            };
            debug!(count = filters.len(), "Extraction done");

            match output {
                Some(path) => output::write_filters(&filters, &path).await?,
                None => output::print_filters(&filters)?,
            }
        }
        Commands::Schema { dialect } => {
            let dialect = SqlDialect::from_str(&dialect)?;
            let document = DialectSchema::builtin(dialect).to_document();
            let json = serde_json::to_string_pretty(&document).map_err(CliError::JsonSerialize)?;
            println!("{json}");
        }
    }

    Ok(())
}
