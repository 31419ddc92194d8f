use super::formats::{CompletedLine, ParametersLine, ParsedLine, StartedLine};
use super::summary::{EndpointSummaries, EndpointSummary};
use serde::Serialize;
use std::collections::HashMap;

/// One logged request, assembled from its Started/Parameters/Completed lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRecord {
    pub id: String,
    pub method: String,
    pub url: String,
    pub query_params: String,
    pub client_address: String,
    pub start_time: String,
    pub parameters: String,
    pub status_code: u16,
    pub elapsed_ms: f64,
}

impl RequestRecord {
    fn open(line: StartedLine) -> Self {
        Self {
            id: line.id,
            method: line.method,
            url: line.url,
            query_params: line.query_params,
            client_address: line.client_address,
            start_time: line.start_time,
            parameters: String::new(),
            status_code: 0,
            elapsed_ms: 0.0,
        }
    }

    /// A 0/0 code and duration means no Completed line was applied.
    pub fn is_completed(&self) -> bool {
        self.status_code != 0 || self.elapsed_ms != 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub total_lines: u64,
    pub candidate_lines: u64,
    pub invalid_lines: u64,
    pub started: u64,
    pub parameters_applied: u64,
    pub completed_applied: u64,
    pub orphan_parameters: u64,
    pub orphan_completed: u64,
    pub unfinished_requests: u64,
}

/// Finished tables handed to the report writers.
#[derive(Debug, Clone)]
pub struct RequestReport {
    pub summary: Vec<EndpointSummary>,
    pub detailed: Vec<RequestRecord>,
    pub stats: ParseStats,
}

/// Owns the request table and endpoint summaries for a single run.
pub struct RequestCorrelator {
    include_parameters: bool,
    records: Vec<RequestRecord>,
    // First position per id; later duplicates are never looked up.
    positions: HashMap<String, usize>,
    summaries: EndpointSummaries,
    stats: ParseStats,
}

impl RequestCorrelator {
    pub fn new(include_parameters: bool) -> Self {
        Self {
            include_parameters,
            records: Vec::new(),
            positions: HashMap::new(),
            summaries: EndpointSummaries::new(),
            stats: ParseStats::default(),
        }
    }

    /// Counts a line that was read, whether or not it is a candidate.
    pub fn count_line(&mut self) {
        self.stats.total_lines += 1;
    }

    pub fn apply(&mut self, parsed: ParsedLine) {
        self.stats.candidate_lines += 1;

        match parsed {
            ParsedLine::Started(line) => self.start(line),
            ParsedLine::Parameters(line) => self.attach_parameters(line),
            ParsedLine::Completed(line) => self.complete(line),
            ParsedLine::Invalid => self.stats.invalid_lines += 1,
        }
    }

    fn start(&mut self, line: StartedLine) {
        let position = self.records.len();
        if self.positions.contains_key(&line.id) {
            tracing::debug!(id = %line.id, "duplicate request id");
        } else {
            self.positions.insert(line.id.clone(), position);
        }
        self.records.push(RequestRecord::open(line));
        self.stats.started += 1;
    }

    fn attach_parameters(&mut self, line: ParametersLine) {
        let Some(&position) = self.positions.get(&line.id) else {
            tracing::debug!(id = %line.id, "Parameters without Started");
            self.stats.orphan_parameters += 1;
            return;
        };

        if !self.include_parameters {
            return;
        }

        self.records[position].parameters = line.value;
        self.stats.parameters_applied += 1;
    }

    fn complete(&mut self, line: CompletedLine) {
        let Some(&position) = self.positions.get(&line.id) else {
            tracing::debug!(id = %line.id, "Completed without Started");
            self.stats.orphan_completed += 1;
            return;
        };

        let record = &mut self.records[position];
        record.status_code = line.status_code;
        record.elapsed_ms = line.elapsed_ms;
        self.summaries.record(&record.url, line.elapsed_ms);
        self.stats.completed_applied += 1;
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn finish(mut self) -> RequestReport {
        self.stats.unfinished_requests =
            self.records.iter().filter(|r| !r.is_completed()).count() as u64;

        tracing::debug!(
            requests = self.records.len(),
            endpoints = self.summaries.len(),
            "request table closed"
        );

        RequestReport {
            summary: self.summaries.into_vec(),
            detailed: self.records,
            stats: self.stats,
        }
    }
}
