use lazy_static::lazy_static;
use regex::Regex;

/// Separator the Ruby logger writes between `SEVERITY -- progname:` and the message.
pub const LOG_MARKER: &str = "-- :";

pub const STARTED_MARKER: &str = "] Started";
pub const PARAMETERS_MARKER: &str = "]   Parameters:";
pub const COMPLETED_MARKER: &str = "] Completed";

/// Width of the textual request id (`8-4-4-4-12` hex groups).
pub const REQUEST_ID_WIDTH: usize = 36;

pub const ELAPSED_SUFFIX: &str = "ms";

lazy_static! {
    pub static ref LOGGER_PREFIX_PATTERN: Regex = Regex::new(
        r"^[DIWEFA], \[[^\]]+ #\d+\]\s+[A-Z]+ -- [^:]*: "
    ).unwrap();

    pub static ref REQUEST_TAG_PATTERN: Regex = Regex::new(
        r"\[[0-9A-Za-z\-]{36}\] (?:Started|Completed|  Parameters:|Processing|Rendered)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_prefix_pattern() {
        let line = "I, [2024-01-01T10:00:00.123456 #4242]  INFO -- : [11111111-1111-1111-1111-111111111111] Started GET \"/\" for 127.0.0.1 at 2024-01-01 10:00:00 +0000";
        assert!(LOGGER_PREFIX_PATTERN.is_match(line));
        assert!(!LOGGER_PREFIX_PATTERN.is_match("    from app/models/user.rb:12:in `find'"));
    }

    #[test]
    fn test_request_tag_pattern() {
        assert!(REQUEST_TAG_PATTERN
            .is_match("[11111111-1111-1111-1111-111111111111] Completed 200 OK in 5ms"));
        assert!(!REQUEST_TAG_PATTERN.is_match("[short-id] Completed 200 OK in 5ms"));
    }
}
