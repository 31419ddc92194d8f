mod cli;
mod log_parser;
mod logging;
mod report;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, OutputFormat};
use log_parser::detector::{detect_format, LogFormat};
use log_parser::{LogParser, ParseOptions};
use report::ReportFormat;
use std::path::{Path, PathBuf};

const SAMPLE_LINES: usize = 50;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let input = Path::new(&cli.input);
    let sample_lines = utils::read_file_sample(input, SAMPLE_LINES).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not sample input for format detection");
        Vec::new()
    });
    let detection = detect_format(&sample_lines);
    if detection.format == LogFormat::Unknown {
        tracing::warn!(
            confidence = detection.confidence,
            "input does not look like a tagged request log"
        );
    } else {
        tracing::info!(format = detection.format.name(), "detected log format");
    }

    let options = ParseOptions {
        include_parameters: cli.params,
    };
    let parser = LogParser::new(options);

    tracing::info!(input = %cli.input, "parsing request log");
    let report = parser.process_file(&cli.input)?;

    let stats = &report.stats;
    tracing::info!(
        lines = stats.total_lines,
        parsed = stats.candidate_lines,
        requests = stats.started,
        endpoints = report.summary.len(),
        "log parsing done"
    );
    if stats.invalid_lines > 0 {
        tracing::warn!(count = stats.invalid_lines, "skipped malformed log lines");
    }
    if stats.orphan_parameters + stats.orphan_completed > 0 {
        tracing::warn!(
            parameters = stats.orphan_parameters,
            completed = stats.orphan_completed,
            "dropped lines with no matching Started line"
        );
    }
    if stats.unfinished_requests > 0 {
        tracing::warn!(
            count = stats.unfinished_requests,
            "requests without a Completed line"
        );
    }

    let output = cli
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| utils::default_output_path(cli.format));
    let report_format = match cli.format {
        OutputFormat::Csv => ReportFormat::Csv,
        OutputFormat::Json => ReportFormat::Json,
    };

    let written = report::write_report(&report, &output, report_format, cli.params)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    if !cli.quiet {
        utils::output_summary(&report.stats, &written, cli.format)?;
    }

    Ok(())
}
