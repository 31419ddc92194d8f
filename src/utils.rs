//! Utility functions for reqlog
//!
//! This module provides common utilities for:
//! - Input sampling for format detection
//! - Output path defaults
//! - Printing the run summary (plain text and JSON)

use crate::cli::OutputFormat;
use crate::log_parser::lines::LossyLines;
use crate::log_parser::ParseStats;
use anyhow::{anyhow, Result};
use serde_json::json;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub fn default_output_path(format: OutputFormat) -> PathBuf {
    match format {
        OutputFormat::Csv => PathBuf::from("request_log.csv"),
        OutputFormat::Json => PathBuf::from("request_log.json"),
    }
}

pub fn output_summary(
    stats: &ParseStats,
    written: &[PathBuf],
    format: OutputFormat,
) -> Result<()> {
    let files: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();

    match format {
        OutputFormat::Json => {
            let output = json!({
                "stats": stats,
                "files": files,
                "format": format,
                "success": true
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            println!("Lines read:          {}", stats.total_lines);
            println!("Lines parsed:        {}", stats.candidate_lines);
            println!("Requests:            {}", stats.started);
            println!("Completed:           {}", stats.completed_applied);
            println!("Unfinished:          {}", stats.unfinished_requests);
            println!("Invalid lines:       {}", stats.invalid_lines);
            for file in &files {
                println!("Report file created: {}", file);
            }
        }
    }
    Ok(())
}

/// First `max_lines` lines of `path`, decoded lossily like the main parse.
pub fn read_file_sample(path: &Path, max_lines: usize) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| anyhow!("Failed to open file: {}", e))?;

    LossyLines::new(BufReader::new(file))
        .take(max_lines)
        .enumerate()
        .map(|(i, line)| line.map_err(|e| anyhow!("Failed to read line {}: {}", i + 1, e)))
        .collect()
}
