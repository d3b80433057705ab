//! Report output configuration.

use serde::Deserialize;

use crate::report::ExportFormat;

/// Report output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Print the ranked table per account (default: true).
    #[serde(default = "default_true")]
    pub print_table: bool,
    /// Print the daily summary of profitable funds (default: true).
    #[serde(default = "default_true")]
    pub print_summary: bool,
    /// Write a file per account (default: false).
    #[serde(default)]
    pub export: bool,
    /// Export file format, `csv` or `json` (default: csv).
    #[serde(default)]
    pub format: ExportFormat,
    /// Directory for exported files (default: current directory).
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            print_table: true,
            print_summary: true,
            export: false,
            format: ExportFormat::default(),
            export_dir: default_export_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_export_dir() -> String {
    ".".to_string()
}
