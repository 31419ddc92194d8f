//! Report emission
//!
//! Turns the finished request tables into two sheets ("Summary" and
//! "Detailed") with a fixed column schema, then hands them to a writer:
//! - CSV: one file per sheet next to the requested output path
//! - JSON: a single document holding both sheets in order
//!
//! Column names and order are consumed by downstream spreadsheets and must
//! not change.

pub mod csv_writer;
pub mod error;
pub mod json_writer;

use crate::log_parser::{EndpointSummary, RequestRecord, RequestReport};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub use error::ReportError;

pub const SUMMARY_SHEET: &str = "Summary";
pub const DETAILED_SHEET: &str = "Detailed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub width: u16,
}

pub const SUMMARY_COLUMNS: [Column; 4] = [
    Column { name: "EndPoint", width: 50 },
    Column { name: "Count", width: 10 },
    Column { name: "Minimum", width: 10 },
    Column { name: "Maximum", width: 10 },
];

pub const DETAILED_COLUMNS: [Column; 7] = [
    Column { name: "Method", width: 8 },
    Column { name: "EndPoint", width: 50 },
    Column { name: "Params", width: 30 },
    Column { name: "Response", width: 10 },
    Column { name: "MilliSeconds", width: 10 },
    Column { name: "Date Time", width: 20 },
    Column { name: "Id", width: 20 },
];

/// Appended after the detailed columns when request parameters are included.
pub const PARAMETERS_COLUMN: Column = Column {
    name: "Parameters",
    width: 50,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Integer(u64),
    Number(f64),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Number(value) => write!(f, "{}", value),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    pub name: &'static str,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

fn summary_row(entry: &EndpointSummary) -> Vec<Cell> {
    vec![
        Cell::Text(entry.url.clone()),
        Cell::Integer(entry.count),
        Cell::Number(entry.minimum_ms),
        Cell::Number(entry.maximum_ms),
    ]
}

fn detailed_row(record: &RequestRecord, include_parameters: bool) -> Vec<Cell> {
    let mut row = vec![
        Cell::Text(record.method.clone()),
        Cell::Text(record.url.clone()),
        Cell::Text(record.query_params.clone()),
        Cell::Integer(u64::from(record.status_code)),
        Cell::Number(record.elapsed_ms),
        Cell::Text(record.start_time.clone()),
        Cell::Text(record.id.clone()),
    ];
    if include_parameters {
        row.push(Cell::Text(record.parameters.clone()));
    }
    row
}

/// Builds the Summary and Detailed sheets, in that order.
pub fn build_sheets(report: &RequestReport, include_parameters: bool) -> Vec<Sheet> {
    let mut detailed_columns = DETAILED_COLUMNS.to_vec();
    if include_parameters {
        detailed_columns.push(PARAMETERS_COLUMN);
    }

    vec![
        Sheet {
            name: SUMMARY_SHEET,
            columns: SUMMARY_COLUMNS.to_vec(),
            rows: report.summary.iter().map(summary_row).collect(),
        },
        Sheet {
            name: DETAILED_SHEET,
            columns: detailed_columns,
            rows: report
                .detailed
                .iter()
                .map(|record| detailed_row(record, include_parameters))
                .collect(),
        },
    ]
}

/// Writes the report and returns every file created.
pub fn write_report(
    report: &RequestReport,
    output: &Path,
    format: ReportFormat,
    include_parameters: bool,
) -> Result<Vec<PathBuf>, ReportError> {
    let sheets = build_sheets(report, include_parameters);

    let written = match format {
        ReportFormat::Csv => csv_writer::write_sheets(&sheets, output)?,
        ReportFormat::Json => {
            json_writer::write_sheets(&sheets, output)?;
            vec![output.to_path_buf()]
        }
    };

    tracing::info!(files = written.len(), "report written");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_parser::ParseStats;

    pub(crate) fn sample_report() -> RequestReport {
        RequestReport {
            summary: vec![EndpointSummary {
                url: "/api/items".to_string(),
                count: 2,
                minimum_ms: 12.0,
                maximum_ms: 42.5,
            }],
            detailed: vec![
                RequestRecord {
                    id: "0f4c5a8e-6d2b-4c55-9d2e-1b5a7e3c9f10".to_string(),
                    method: "GET".to_string(),
                    url: "/api/items".to_string(),
                    query_params: "page=2".to_string(),
                    client_address: "10.0.0.7".to_string(),
                    start_time: "2024-03-05 08:15:42".to_string(),
                    parameters: "{\"page\"=>\"2\"}".to_string(),
                    status_code: 200,
                    elapsed_ms: 42.5,
                },
                RequestRecord {
                    id: "7d1e2f3a-0b4c-4d5e-8f90-a1b2c3d4e5f6".to_string(),
                    method: "GET".to_string(),
                    url: "/api/items".to_string(),
                    query_params: String::new(),
                    client_address: "10.0.0.8".to_string(),
                    start_time: "2024-03-05 08:15:43".to_string(),
                    parameters: String::new(),
                    status_code: 304,
                    elapsed_ms: 12.0,
                },
            ],
            stats: ParseStats::default(),
        }
    }

    #[test]
    fn test_column_contract() {
        let summary: Vec<_> = SUMMARY_COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(summary, ["EndPoint", "Count", "Minimum", "Maximum"]);

        let detailed: Vec<_> = DETAILED_COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(
            detailed,
            ["Method", "EndPoint", "Params", "Response", "MilliSeconds", "Date Time", "Id"]
        );
    }

    #[test]
    fn test_build_sheets() {
        let sheets = build_sheets(&sample_report(), false);

        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].name, SUMMARY_SHEET);
        assert_eq!(sheets[1].name, DETAILED_SHEET);
        assert_eq!(sheets[1].columns.len(), 7);
        assert_eq!(
            sheets[1].rows[0],
            vec![
                Cell::Text("GET".to_string()),
                Cell::Text("/api/items".to_string()),
                Cell::Text("page=2".to_string()),
                Cell::Integer(200),
                Cell::Number(42.5),
                Cell::Text("2024-03-05 08:15:42".to_string()),
                Cell::Text("0f4c5a8e-6d2b-4c55-9d2e-1b5a7e3c9f10".to_string()),
            ]
        );
    }

    #[test]
    fn test_parameters_column_is_appended() {
        let sheets = build_sheets(&sample_report(), true);

        let detailed = &sheets[1];
        assert_eq!(detailed.columns.last(), Some(&PARAMETERS_COLUMN));
        assert_eq!(
            detailed.rows[0].last(),
            Some(&Cell::Text("{\"page\"=>\"2\"}".to_string()))
        );
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Number(42.0).to_string(), "42");
        assert_eq!(Cell::Number(7.5).to_string(), "7.5");
        assert_eq!(Cell::Integer(200).to_string(), "200");
    }
}
