use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("writing CSV sheet: {0}")]
    Csv(#[from] csv::Error),

    #[error("encoding JSON report: {0}")]
    Json(#[from] serde_json::Error),
}
