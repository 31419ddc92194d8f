use super::request_id::find_request_id;
use super::{tokenize, LogLineParser, ParsedLine, StartedLine};

const MIN_TOKENS: usize = 10;

// [id] Started <METHOD> "<url>" for <ip> at <date> <time> <zone>
const METHOD: usize = 2;
const URL: usize = 3;
const CLIENT_ADDRESS: usize = 5;
const DATE: usize = 7;
const TIME: usize = 8;

pub struct StartedLineParser;

impl LogLineParser for StartedLineParser {
    fn parse_line(&self, payload: &str) -> ParsedLine {
        let Some(id) = find_request_id(payload) else {
            return ParsedLine::Invalid;
        };

        let tokens = tokenize(payload);
        if tokens.len() < MIN_TOKENS {
            tracing::debug!(tokens = tokens.len(), "truncated Started line");
            return ParsedLine::Invalid;
        }

        let full_url = tokens[URL].replace('"', "");
        let (url, query_params) = match full_url.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (full_url, String::new()),
        };

        ParsedLine::Started(StartedLine {
            id: id.to_string(),
            method: tokens[METHOD].to_string(),
            url,
            query_params,
            client_address: tokens[CLIENT_ADDRESS].to_string(),
            start_time: format!("{} {}", tokens[DATE], tokens[TIME]),
        })
    }
}
