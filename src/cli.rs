use clap::{Parser, ValueEnum};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "reqlog")]
#[command(
    author,
    version,
    about = "Summarize request latency from a tagged application log",
    long_about = None
)]
pub struct Cli {
    #[arg(short, long, help = "Input log file path")]
    pub input: String,

    #[arg(
        short,
        long,
        env = "REQLOG_OUTPUT",
        help = "Output file path (default: request_log.csv or request_log.json)"
    )]
    pub output: Option<String>,

    #[arg(short, long, help = "Include request parameters in the detailed sheet")]
    pub params: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv, help = "Report format")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable debug logging (RUST_LOG takes precedence)")]
    pub verbose: bool,

    #[arg(long, help = "Do not print the run summary")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Json,
}
