//! Output formatting for networks and plans.
//!
//! This module handles formatting and writing results:
//! - [`row`] - Flat per-network export record
//! - [`csv`] - CSV export
//! - [`json`] - JSON export
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod row;
mod terminal;

pub use csv::{csv_row, escape_csv_field, to_csv, CSV_HEADER};
pub use json::to_json;
pub use row::{plan_rows, NetworkRow};
pub use terminal::{format_field, render_network_info, render_plan, render_subnets};

use crate::config;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// File format for exported rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Render rows in the requested format.
pub fn render_export(rows: &[NetworkRow], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(rows)),
        ExportFormat::Json => to_json(rows),
    }
}

/// Default export file name for today, e.g. `vlsm_plan_2024-05-01.csv`.
pub fn export_file_name(format: ExportFormat) -> String {
    let now = chrono::Local::now();
    format!(
        "{}_{}.{}",
        config::EXPORT_FILE_PREFIX,
        now.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Write rendered rows into `dir` using [`export_file_name`]. Returns the file path.
pub fn save_export(rows: &[NetworkRow], format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(export_file_name(format));
    let content = render_export(rows, format)?;
    log::warn!("Writing {} rows to export file: {}", rows.len(), path.display());
    std::fs::write(&path, content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Network;

    #[test]
    fn test_export_file_name() {
        let name = export_file_name(ExportFormat::Json);
        assert!(name.starts_with("vlsm_plan_"));
        assert!(name.ends_with(".json"));
        // vlsm_plan_ + YYYY-MM-DD + .json
        assert_eq!(name.len(), 10 + 10 + 5);
    }

    #[test]
    fn test_save_export() {
        let dir = std::env::temp_dir().join(format!("vlsm_export_test_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let network: Network = "10.9.0.0/29".parse().unwrap();
        let rows = vec![NetworkRow::new(&network, None, false)];

        let path = save_export(&rows, ExportFormat::Csv, &dir).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(CSV_HEADER));
        assert!(content.contains("10.9.0.0,29,"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_export_missing_dir() {
        let dir = std::env::temp_dir().join("vlsm_export_test_does_not_exist/nested");
        let result = save_export(&[], ExportFormat::Json, &dir);
        assert!(matches!(result, Err(crate::error::SubnetError::Export(_))));
    }
}
