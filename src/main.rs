//! Farmwatch CLI
//!
//! Runs chart-data transformations over JSON record files and exports
//! chart tables as CSV.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use farmwatch_charts::api::{ApiConfig, EndpointKind};
use farmwatch_charts::commands::{
    display_color, display_format, display_palette, execute_export, execute_fetch, execute_transform,
    validate_export_args, validate_fetch_args, validate_transform_args, ExportArgs, FetchArgs, InputSource,
    TransformArgs, TransformKind,
};
use farmwatch_charts::output::{Locale, NumberFormatOptions};
use farmwatch_charts::palette::Thresholds;
use farmwatch_charts::parser::FieldMapping;
use farmwatch_charts::utils::config::{API_TOKEN_ENV, API_URL_ENV, DEFAULT_DATE_FIELD};
use farmwatch_charts::utils::{load_config, ChartConfig};

/// Farmwatch - chart data tooling for agricultural dashboards
#[derive(Parser, Debug)]
#[command(name = "farmwatch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config with field mapping, thresholds, palette and API settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize records into {name, value} points
    Normalize {
        #[command(flatten)]
        io: IoArgs,

        /// Field holding the label
        #[arg(long)]
        name_field: Option<String>,

        /// Field holding the numeric value
        #[arg(long)]
        value_field: Option<String>,
    },

    /// Add a one-decimal percentage-of-total to every record
    Percentages {
        #[command(flatten)]
        io: IoArgs,

        /// Numeric field to total
        #[arg(long)]
        value_field: Option<String>,
    },

    /// Group records by a field and sum values per group
    Aggregate {
        #[command(flatten)]
        io: IoArgs,

        /// Field to group by
        #[arg(long)]
        by: String,

        /// Numeric field to sum
        #[arg(long)]
        value_field: Option<String>,
    },

    /// Keep records dated within an inclusive range
    Filter {
        #[command(flatten)]
        io: IoArgs,

        /// Range start (RFC 3339, YYYY-MM-DD or YYYY-MM-DD HH:MM:SS)
        #[arg(long)]
        start: String,

        /// Range end, inclusive
        #[arg(long)]
        end: String,

        /// Field holding each record's date
        #[arg(long, default_value = DEFAULT_DATE_FIELD)]
        date_field: String,
    },

    /// Sort records by value (largest first unless --ascending)
    Sort {
        #[command(flatten)]
        io: IoArgs,

        /// Smallest first
        #[arg(long)]
        ascending: bool,
    },

    /// Print a series palette
    Palette {
        /// Number of colors
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Classify a KPI value as red, yellow or green
    Color {
        /// Value to classify
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Upper bound of the red bucket
        #[arg(long)]
        low: Option<f64>,

        /// Upper bound of the yellow bucket
        #[arg(long)]
        medium: Option<f64>,
    },

    /// Format a number for display
    Format {
        /// Value to format; non-numbers are echoed unchanged
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Fraction digits
        #[arg(long)]
        decimals: Option<usize>,

        /// Text before the number
        #[arg(long)]
        prefix: Option<String>,

        /// Text after the number
        #[arg(long)]
        suffix: Option<String>,

        /// Locale tag (en-US, en-GB, de-DE, fr-FR)
        #[arg(long)]
        locale: Option<String>,
    },

    /// Export records as a Name,Value,Percentage CSV file
    Export {
        /// JSON input file, or - for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// File name without extension
        #[arg(short, long, default_value = "chart-data")]
        filename: String,

        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Fetch an analytics resource from the API
    Fetch {
        /// Endpoint (national-risk-levels, disease-distribution, mortality-by-disease,
        /// animal-health-status, vaccination-coverage, regional-summary, time-series)
        endpoint: String,

        /// API base address
        #[arg(long, env = API_URL_ENV)]
        api_url: Option<String>,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Region for regional-summary
        #[arg(long)]
        region: Option<String>,

        /// Window for time-series (e.g. 7d, 30d)
        #[arg(long)]
        period: Option<String>,

        /// Bearer token
        #[arg(long, env = API_TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,

        /// Output path for the JSON body (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Input/output options shared by the transformation commands
#[derive(clap::Args, Debug)]
struct IoArgs {
    /// JSON input file, or - for stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    /// Output path for the JSON result (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging (env_logger writes to stderr, stdout stays JSON)
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    match cli.command {
        Commands::Normalize { io, name_field, value_field } => {
            let mapping = FieldMapping::new(
                name_field.unwrap_or(config.fields.name_field),
                value_field.unwrap_or(config.fields.value_field),
            );
            run_transform(io, TransformKind::Normalize { mapping })?;
        }

        Commands::Percentages { io, value_field } => {
            let value_field = value_field.unwrap_or(config.fields.value_field);
            run_transform(io, TransformKind::Percentages { value_field })?;
        }

        Commands::Aggregate { io, by, value_field } => {
            let value_field = value_field.unwrap_or(config.fields.value_field);
            run_transform(io, TransformKind::Aggregate { group_field: by, value_field })?;
        }

        Commands::Filter { io, start, end, date_field } => {
            run_transform(io, TransformKind::Filter { start, end, date_field })?;
        }

        Commands::Sort { io, ascending } => {
            run_transform(io, TransformKind::Sort { ascending })?;
        }

        Commands::Palette { count } => {
            if count == 0 {
                anyhow::bail!("count must be greater than 0");
            }
            display_palette(count, config.palette.custom())?;
        }

        Commands::Color { value, low, medium } => {
            let thresholds = Thresholds::new(
                low.unwrap_or(config.thresholds.low),
                medium.unwrap_or(config.thresholds.medium),
            );
            if !thresholds.is_ordered() {
                anyhow::bail!("low threshold must not exceed medium threshold");
            }
            display_color(value, &thresholds);
        }

        Commands::Format { value, decimals, prefix, suffix, locale } => {
            let base = config.number;
            let options = NumberFormatOptions {
                decimals: decimals.unwrap_or(base.decimals),
                prefix: prefix.unwrap_or(base.prefix),
                suffix: suffix.unwrap_or(base.suffix),
                locale: locale.map(|tag| Locale::from_tag(&tag)).unwrap_or(base.locale),
            };
            display_format(&value, &options);
        }

        Commands::Export { input, filename, dir } => {
            let args = ExportArgs {
                input: InputSource::from_arg(&input),
                filename,
                dir,
            };
            validate_export_args(&args)?;
            let path = execute_export(args)?;
            println!("{}", path.display());
        }

        Commands::Fetch { endpoint, api_url, timeout, region, period, token, output } => {
            let endpoint: EndpointKind = endpoint.parse().map_err(anyhow::Error::msg)?;
            let api = ApiConfig {
                base_url: api_url.unwrap_or(config.api.base_url),
                timeout: Duration::from_secs(timeout.unwrap_or(config.api.timeout_secs)),
            };
            let args = FetchArgs { api, endpoint, region, period, token, output };
            validate_fetch_args(&args)?;
            execute_fetch(args)?;
        }
    }

    Ok(())
}

/// Build, validate and run one transformation command
///
/// **Private** - shared by the record-transforming subcommands
fn run_transform(io: IoArgs, kind: TransformKind) -> Result<()> {
    let args = TransformArgs {
        input: InputSource::from_arg(&io.input),
        output: io.output,
        kind,
    };

    validate_transform_args(&args)?;
    execute_transform(args)
}
