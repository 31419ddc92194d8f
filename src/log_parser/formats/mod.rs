pub mod completed;
pub mod parameters;
pub mod request_id;
pub mod started;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Started,
    Parameters,
    Completed,
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StartedLine {
    pub id: String,
    pub method: String,
    pub url: String,
    pub query_params: String,
    pub client_address: String,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParametersLine {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletedLine {
    pub id: String,
    pub status_code: u16,
    pub elapsed_ms: f64,
}

/// Result of decoding one candidate line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    Started(StartedLine),
    Parameters(ParametersLine),
    Completed(CompletedLine),
    Invalid,
}

/// Decodes the payload of one line kind. Shape violations yield
/// [`ParsedLine::Invalid`] rather than an error.
pub trait LogLineParser {
    fn parse_line(&self, payload: &str) -> ParsedLine;
}

/// Payload tokens split on single spaces, so empty tokens keep their position.
pub(crate) fn tokenize(payload: &str) -> Vec<&str> {
    payload.split(' ').collect()
}
