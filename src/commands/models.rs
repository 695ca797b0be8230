use crate::api::{ApiConfig, EndpointKind};
use crate::parser::FieldMapping;
use crate::utils::config::{DEFAULT_EXPORT_FILENAME, DEFAULT_VALUE_FIELD};
use std::path::PathBuf;

/// Where a command reads its JSON records from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` means stdin, anything else is a file path
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }
}

/// Which transformation to run over the input records
#[derive(Debug, Clone, PartialEq)]
pub enum TransformKind {
    Normalize {
        mapping: FieldMapping,
    },
    Percentages {
        value_field: String,
    },
    Aggregate {
        group_field: String,
        value_field: String,
    },
    Filter {
        start: String,
        end: String,
        date_field: String,
    },
    Sort {
        ascending: bool,
    },
}

impl TransformKind {
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Normalize { .. } => "normalize",
            TransformKind::Percentages { .. } => "percentages",
            TransformKind::Aggregate { .. } => "aggregate",
            TransformKind::Filter { .. } => "filter",
            TransformKind::Sort { .. } => "sort",
        }
    }
}

/// Arguments for the transformation commands
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TransformArgs {
    /// JSON input
    pub input: InputSource,

    /// Output path for JSON result (stdout when absent)
    pub output: Option<PathBuf>,

    /// Transformation to apply
    pub kind: TransformKind,
}

impl Default for TransformArgs {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            output: None,
            kind: TransformKind::Percentages {
                value_field: DEFAULT_VALUE_FIELD.to_string(),
            },
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// JSON input
    pub input: InputSource,

    /// Base file name, without extension
    pub filename: String,

    /// Directory the CSV is written into
    pub dir: PathBuf,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            filename: DEFAULT_EXPORT_FILENAME.to_string(),
            dir: PathBuf::from("."),
        }
    }
}

/// Arguments for the fetch command
#[derive(Debug, Clone)]
pub struct FetchArgs {
    /// API connection settings
    pub api: ApiConfig,

    /// Endpoint to query
    pub endpoint: EndpointKind,

    /// Region filter for the regional summary
    pub region: Option<String>,

    /// Window for the time series (e.g. `30d`)
    pub period: Option<String>,

    /// Bearer token
    pub token: Option<String>,

    /// Output path for JSON result (stdout when absent)
    pub output: Option<PathBuf>,
}
