//! Report file export and line-item input loading
//!
//! The export artifact is a single Markdown file named for the current
//! date. Loading line items from a JSON file is the file-based entry
//! point used by the CLI; nothing here persists application state.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use log::info;
use thiserror::Error;

use crate::item::{GroupedProduct, LineItem};
use crate::report::{render_report, ReportOptions};

/// Errors raised while exporting reports or loading line items
#[derive(Error, Debug)]
pub enum ExportError {
    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The line-item file is not a valid JSON array of items
    #[error("invalid line-item file: {0}")]
    InvalidInput(#[from] serde_json::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// File name of the export artifact for a given date:
/// `report-YYYY-MM-DD.md`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("report-{}.md", date.format("%Y-%m-%d"))
}

/// Render the report and write it into `dir` under today's file name.
///
/// Returns the path of the written file.
pub fn export_report(
    dir: &Path,
    groups: &[GroupedProduct],
    options: &ReportOptions,
) -> ExportResult<PathBuf> {
    let path = dir.join(report_file_name(Local::now().date_naive()));
    fs::write(&path, render_report(groups, options))?;
    info!("report written to {}", path.display());
    Ok(path)
}

/// Load a JSON array of line items from a file.
pub fn read_items(path: &Path) -> ExportResult<Vec<LineItem>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_report_file_name_embeds_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(report_file_name(date), "report-2024-03-15.md");
    }

    #[test]
    fn test_export_report_writes_rendered_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let options = ReportOptions::default();

        let path = export_report(dir.path(), &[], &options).unwrap();
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("report-"));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# MAPA COMPARATIVO DE PREÇOS"));
    }

    #[test]
    fn test_read_items_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(
            &path,
            r#"[{"id":"1","productName":"Caneta","supplier":"A","source":"PNCP","price":2.0}]"#,
        )
        .unwrap();

        let items = read_items(&path).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product_name, "Caneta");
    }

    #[test]
    fn test_read_items_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(read_items(&path), Err(ExportError::InvalidInput(_))));
    }

    #[test]
    fn test_read_items_missing_file_is_io_error() {
        assert!(matches!(
            read_items(Path::new("/nonexistent/items.json")),
            Err(ExportError::Io(_))
        ));
    }
}
