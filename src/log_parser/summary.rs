use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointSummary {
    pub url: String,
    pub count: u64,
    pub minimum_ms: f64,
    pub maximum_ms: f64,
}

/// Running count/min/max latency per endpoint path, in first-seen order.
#[derive(Debug, Default)]
pub struct EndpointSummaries {
    entries: Vec<EndpointSummary>,
    index: HashMap<String, usize>,
}

impl EndpointSummaries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, url: &str, elapsed_ms: f64) {
        match self.index.get(url) {
            Some(&position) => {
                let entry = &mut self.entries[position];
                entry.count += 1;
                if elapsed_ms < entry.minimum_ms {
                    entry.minimum_ms = elapsed_ms;
                }
                if elapsed_ms > entry.maximum_ms {
                    entry.maximum_ms = elapsed_ms;
                }
            }
            None => {
                self.index.insert(url.to_string(), self.entries.len());
                self.entries.push(EndpointSummary {
                    url: url.to_string(),
                    count: 1,
                    minimum_ms: elapsed_ms,
                    maximum_ms: elapsed_ms,
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_vec(self) -> Vec<EndpointSummary> {
        self.entries
    }
}
