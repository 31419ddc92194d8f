use super::classifier::classify;
use super::correlator::{RequestCorrelator, RequestReport};
use super::formats::{
    completed::CompletedLineParser, parameters::ParametersLineParser, started::StartedLineParser,
    LineKind, LogLineParser, ParsedLine,
};
use super::lines::LossyLines;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};

const PROGRESS_INTERVAL: u64 = 100_000;

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub include_parameters: bool,
}

pub struct LogParser {
    options: ParseOptions,
}

impl LogParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    fn get_parser(kind: LineKind) -> Option<&'static dyn LogLineParser> {
        match kind {
            LineKind::Started => Some(&StartedLineParser),
            LineKind::Parameters => Some(&ParametersLineParser),
            LineKind::Completed => Some(&CompletedLineParser),
            LineKind::Invalid => None,
        }
    }

    pub fn process_file(&self, input_path: &str) -> Result<RequestReport> {
        let file = File::open(input_path)
            .with_context(|| format!("Failed to open input file: {}", input_path))?;
        self.process_reader(BufReader::new(file))
    }

    /// Consumes the whole stream in order. Only a read failure aborts the run.
    pub fn process_reader<R: BufRead>(&self, reader: R) -> Result<RequestReport> {
        let mut correlator = RequestCorrelator::new(self.options.include_parameters);

        for (line_num, line) in LossyLines::new(reader).enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;
            correlator.count_line();

            let Some(parsed) = self.process_line(&line) else {
                continue;
            };

            if matches!(parsed, ParsedLine::Invalid) {
                tracing::debug!(line = line_num + 1, "skipping malformed log line");
            }
            correlator.apply(parsed);

            let candidates = correlator.stats().candidate_lines;
            if candidates % PROGRESS_INTERVAL == 0 {
                tracing::info!(lines_parsed = candidates, "parsing");
            }
        }

        Ok(correlator.finish())
    }

    /// Classifies and decodes one raw line; `None` when it is not a log entry.
    pub fn process_line(&self, line: &str) -> Option<ParsedLine> {
        let classified = classify(line)?;

        Some(match Self::get_parser(classified.kind) {
            Some(parser) => parser.parse_line(classified.payload),
            None => ParsedLine::Invalid,
        })
    }
}
