use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract relative date filters from a parsed WHERE clause
    Extract {
        /// SQL dialect: "postgresql", "mysql", "snowflake", "redshift", "bigquery"
        #[arg(long)]
        dialect: String,

        #[arg(long, help = "JSON file holding the parsed predicate; reads stdin when omitted")]
        input: Option<String>,

        #[arg(
            long,
            help = "Reference instant (RFC 3339, 'YYYY-MM-DD HH:MM:SS' or 'YYYY-MM-DD'); defaults to local now"
        )]
        now: Option<String>,

        #[arg(long, help = "Treat the input as a whole parsed statement and read its WHERE member")]
        statement: bool,

        #[arg(long, help = "First day of the week used by week truncation (default: sunday)")]
        week_start: Option<String>,

        #[arg(long, help = "JSON file with a custom dialect table replacing the built-in one")]
        schema: Option<String>,

        #[arg(long, help = "JSON file with engine settings (week_start, max_depth)")]
        config: Option<String>,

        #[arg(
            long,
            help = "If specified, writes the filters to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the built-in node paths of a dialect
    Schema {
        #[arg(long)]
        dialect: String,
    },
}
