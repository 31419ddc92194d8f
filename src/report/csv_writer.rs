use super::{ReportError, Sheet};
use std::path::{Path, PathBuf};

const DEFAULT_STEM: &str = "request_log";

/// `<dir>/<stem>-<sheet>.csv` for an output path of `<dir>/<stem>.<ext>`.
pub fn sheet_path(output: &Path, sheet_name: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_STEM);
    let file_name = format!("{}-{}.csv", stem, sheet_name.to_lowercase());

    match output.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

pub fn write_sheets(sheets: &[Sheet], output: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let mut written = Vec::with_capacity(sheets.len());

    for sheet in sheets {
        let path = sheet_path(output, sheet.name);
        let mut wtr = csv::Writer::from_path(&path)?;

        wtr.write_record(sheet.columns.iter().map(|c| c.name))?;
        for row in &sheet.rows {
            wtr.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        wtr.flush()?;

        tracing::debug!(
            sheet = sheet.name,
            rows = sheet.rows.len(),
            path = %path.display(),
            "sheet written"
        );
        written.push(path);
    }

    Ok(written)
}
