use super::request_id::find_request_id;
use super::{tokenize, CompletedLine, LogLineParser, ParsedLine};
use crate::log_parser::patterns::ELAPSED_SUFFIX;

const MIN_TOKENS: usize = 6;

// [id] Completed <code> <reason> in <N>ms ...
const STATUS_CODE: usize = 2;
const ELAPSED: usize = 5;

pub struct CompletedLineParser;

impl LogLineParser for CompletedLineParser {
    fn parse_line(&self, payload: &str) -> ParsedLine {
        let Some(id) = find_request_id(payload) else {
            return ParsedLine::Invalid;
        };

        let tokens = tokenize(payload);
        if tokens.len() < MIN_TOKENS {
            tracing::debug!(tokens = tokens.len(), "truncated Completed line");
            return ParsedLine::Invalid;
        }

        ParsedLine::Completed(CompletedLine {
            id: id.to_string(),
            status_code: parse_status_code(tokens[STATUS_CODE]),
            elapsed_ms: parse_elapsed(tokens[ELAPSED]),
        })
    }
}

/// Non-numeric status tokens count as 0.
fn parse_status_code(token: &str) -> u16 {
    token.trim().parse().unwrap_or(0)
}

/// Strips the `ms` unit; anything that is not a finite number counts as 0.
fn parse_elapsed(token: &str) -> f64 {
    let value = token.strip_suffix(ELAPSED_SUFFIX).unwrap_or(token);
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|ms| ms.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "0f4c5a8e-6d2b-4c55-9d2e-1b5a7e3c9f10";

    fn completed(payload: &str) -> CompletedLine {
        match CompletedLineParser.parse_line(payload) {
            ParsedLine::Completed(line) => line,
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    #[test]
    fn test_completed_line() {
        let payload = format!(
            "[{}] Completed 200 OK in 42ms (Views: 12.3ms | ActiveRecord: 4.1ms)",
            ID
        );
        let line = completed(&payload);

        assert_eq!(line.id, ID);
        assert_eq!(line.status_code, 200);
        assert_eq!(line.elapsed_ms, 42.0);
    }

    #[test]
    fn test_fractional_elapsed() {
        let payload = format!("[{}] Completed 302 Found in 7.5ms", ID);
        assert_eq!(completed(&payload).elapsed_ms, 7.5);
    }

    #[test]
    fn test_non_numeric_tokens_become_zero() {
        let payload = format!("[{}] Completed abc Internal Server Error", ID);
        let line = completed(&payload);

        assert_eq!(line.status_code, 0);
        assert_eq!(line.elapsed_ms, 0.0);
    }

    #[test]
    fn test_nan_elapsed_becomes_zero() {
        assert_eq!(parse_elapsed("NaNms"), 0.0);
        assert_eq!(parse_elapsed("infms"), 0.0);
    }

    #[test]
    fn test_short_line_is_invalid() {
        let payload = format!("[{}] Completed 200", ID);
        assert_eq!(CompletedLineParser.parse_line(&payload), ParsedLine::Invalid);
    }
}
