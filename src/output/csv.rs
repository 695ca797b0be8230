//! CSV export of chart data.
//!
//! Text generation is pure ([`csv_text`]); delivering the text somewhere is
//! the job of a [`CsvSink`], so the browser-download, file and in-memory
//! targets are interchangeable.

use crate::aggregator::percentages::percentage_shares;
use crate::parser::record::{coerce_label, field, number_field};
use crate::utils::config::{
    CSV_HEADER, DEFAULT_EXPORT_FILENAME, DEFAULT_NAME_FIELD, DEFAULT_VALUE_FIELD, PERCENTAGE_FIELD,
};
use crate::utils::error::ExportError;
use log::{debug, info};
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Destination for finished CSV text
pub trait CsvSink {
    /// Hand over `contents` under the file name `filename` (extension included)
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<(), ExportError>;
}

impl<F> CsvSink for F
where
    F: FnMut(&str, &str) -> Result<(), ExportError>,
{
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<(), ExportError> {
        self(filename, contents)
    }
}

/// Writes each export as a file inside a directory
///
/// File names must be a single plain component; anything that would land
/// outside `dir` is rejected.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    last_written: Option<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_written: None,
        }
    }

    /// Path of the most recent successful export
    pub fn last_written(&self) -> Option<&Path> {
        self.last_written.as_deref()
    }
}

impl CsvSink for FileSink {
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<(), ExportError> {
        if Path::new(filename).file_name() != Some(OsStr::new(filename)) {
            return Err(ExportError::InvalidPath(format!(
                "Export name must be a plain file name: {}",
                filename
            )));
        }

        let path = self.dir.join(filename);
        validate_export_path(&path)?;

        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            debug!("Creating export directory: {}", self.dir.display());
            fs::create_dir_all(&self.dir).map_err(|e| {
                ExportError::InvalidPath(format!("Cannot create directory {}: {}", self.dir.display(), e))
            })?;
        }

        fs::write(&path, contents)?;
        info!("CSV written to: {} ({} bytes)", path.display(), contents.len());

        self.last_written = Some(path);
        Ok(())
    }
}

/// Keeps exports in memory, mostly for tests and previews
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: Vec<(String, String)>,
}

impl CsvSink for MemorySink {
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<(), ExportError> {
        self.files.push((filename.to_string(), contents.to_string()));
        Ok(())
    }
}

/// Render records as `Name,Value,Percentage` CSV
///
/// **Public** - pure text generation
///
/// A record's own non-empty `percentage` field is used as-is; otherwise the
/// share of the collection total is computed with one decimal digit.
/// Fields containing commas, quotes or newlines are quoted.
pub fn csv_text(data: &[Value]) -> Result<String, ExportError> {
    let values: Vec<f64> = data.iter().map(|record| number_field(record, DEFAULT_VALUE_FIELD)).collect();
    let shares = percentage_shares(&values);

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;

    for (record, share) in data.iter().zip(shares) {
        let name = coerce_label(field(record, DEFAULT_NAME_FIELD)).unwrap_or_default();
        let value = coerce_label(field(record, DEFAULT_VALUE_FIELD)).unwrap_or_default();
        let percentage = coerce_label(field(record, PERCENTAGE_FIELD))
            .filter(|p| !p.is_empty())
            .unwrap_or(share);

        writer.write_record([name, value, percentage])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::WriteFailed(e.into_error()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Export records as `<filename>.csv` through a sink
///
/// **Public** - main entry point for downloads
///
/// # Arguments
/// * `data` - Records with `name`, `value` and optionally `percentage`
/// * `filename` - Base name without extension; blank uses `chart-data`
/// * `sink` - Where the CSV goes
///
/// # Returns
/// The file name handed to the sink
pub fn export_as_csv<S: CsvSink + ?Sized>(
    data: &[Value],
    filename: &str,
    sink: &mut S,
) -> Result<String, ExportError> {
    let base = if filename.trim().is_empty() {
        DEFAULT_EXPORT_FILENAME
    } else {
        filename.trim()
    };
    let full_name = format!("{}.csv", base);

    let contents = csv_text(data)?;
    debug!("Exporting {} rows as {}", data.len(), full_name);

    sink.deliver(&full_name, &contents)?;
    Ok(full_name)
}

/// Validate that an export target is writable
///
/// **Private** - internal validation
fn validate_export_path(path: &Path) -> Result<(), ExportError> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(ExportError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_csv_text_computes_missing_percentages() {
        let data = vec![
            json!({"name": "Vaccinated", "value": 75}),
            json!({"name": "Pending", "value": 25}),
        ];

        let text = csv_text(&data).unwrap();

        assert_eq!(text, "Name,Value,Percentage\nVaccinated,75,75.0\nPending,25,25.0\n");
    }

    #[test]
    fn test_csv_text_keeps_existing_percentage() {
        let data = vec![json!({"name": "A", "value": 1, "percentage": "99.9"})];

        let text = csv_text(&data).unwrap();

        assert_eq!(text, "Name,Value,Percentage\nA,1,99.9\n");
    }

    #[test]
    fn test_csv_text_quotes_special_characters() {
        let data = vec![json!({"name": "Cattle, dairy", "value": 3}), json!({"name": "Say \"hi\"", "value": 1})];

        let text = csv_text(&data).unwrap();

        assert_eq!(
            text,
            "Name,Value,Percentage\n\"Cattle, dairy\",3,75.0\n\"Say \"\"hi\"\"\",1,25.0\n"
        );
    }

    #[test]
    fn test_csv_text_zero_total() {
        let data = vec![json!({"name": "A", "value": 0})];
        let text = csv_text(&data).unwrap();
        assert_eq!(text, "Name,Value,Percentage\nA,0,0\n");
    }

    #[test]
    fn test_export_to_memory_sink() {
        let mut sink = MemorySink::default();

        let name = export_as_csv(&[json!({"name": "A", "value": 2})], "", &mut sink).unwrap();

        assert_eq!(name, "chart-data.csv");
        assert_eq!(sink.files.len(), 1);
        assert_eq!(sink.files[0].0, "chart-data.csv");
        assert!(sink.files[0].1.starts_with("Name,Value,Percentage\n"));
    }

    #[test]
    fn test_export_to_closure_sink() {
        let mut seen = Vec::new();
        let mut sink = |name: &str, contents: &str| -> Result<(), ExportError> {
            seen.push(format!("{}:{}", name, contents.lines().count()));
            Ok(())
        };

        export_as_csv(&[json!({"name": "A", "value": 2})], "regions", &mut sink).unwrap();

        assert_eq!(seen, vec!["regions.csv:2".to_string()]);
    }

    #[test]
    fn test_file_sink_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut sink = FileSink::new(temp_dir.path().join("nested/exports"));

        export_as_csv(&[json!({"name": "A", "value": 2})], "farms", &mut sink).unwrap();

        let written = sink.last_written().unwrap().to_path_buf();
        assert!(written.ends_with("farms.csv"));
        assert_eq!(fs::read_to_string(written).unwrap(), "Name,Value,Percentage\nA,2,100.0\n");
    }

    #[test]
    fn test_file_sink_rejects_names_outside_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let export_dir = temp_dir.path().join("exports");
        let mut sink = FileSink::new(&export_dir);

        let escaped = export_as_csv(&[json!({"name": "A", "value": 2})], "../escaped", &mut sink);
        assert!(matches!(escaped, Err(ExportError::InvalidPath(_))));
        assert!(!temp_dir.path().join("escaped.csv").exists());

        let absolute = temp_dir.path().join("absolute");
        let absolute = export_as_csv(&[json!({"name": "A", "value": 2})], absolute.to_str().unwrap(), &mut sink);
        assert!(matches!(absolute, Err(ExportError::InvalidPath(_))));
        assert!(!temp_dir.path().join("absolute.csv").exists());

        assert!(sink.last_written().is_none());
        assert!(!export_dir.exists());
    }

    #[test]
    fn test_csv_text_huge_values() {
        let data = vec![json!({"name": "A", "value": 1e308}), json!({"name": "B", "value": 1e308})];

        let text = csv_text(&data).unwrap();

        assert!(text.ends_with(",50.0\n"));
        assert_eq!(text.matches(",50.0\n").count(), 2);
    }

    #[test]
    fn test_validate_export_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_export_path(temp_dir.path()).is_err());
        assert!(validate_export_path(Path::new("")).is_err());
    }
}
