use super::patterns::{LOGGER_PREFIX_PATTERN, LOG_MARKER, REQUEST_TAG_PATTERN};

const SAMPLE_SIZE: usize = 50;
const MIN_CONFIDENCE: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Ruby logger output with request-id tagged lifecycle lines.
    TaggedRequestLog,
    Unknown,
}

impl LogFormat {
    pub fn name(&self) -> &str {
        match self {
            LogFormat::TaggedRequestLog => "Tagged request log",
            LogFormat::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormatDetectionResult {
    pub format: LogFormat,
    pub confidence: f32,
}

/// Scores a sample of the input. Detection is advisory: the parser runs
/// over any input, this only decides whether to warn.
pub fn detect_format(lines: &[String]) -> FormatDetectionResult {
    let sample_size = lines.len().min(SAMPLE_SIZE);
    let sample = &lines[0..sample_size];

    let mut score = 0.0;
    let mut total_lines = 0.0;

    for line in sample {
        if line.trim().is_empty() {
            continue;
        }
        total_lines += 1.0;

        if LOGGER_PREFIX_PATTERN.is_match(line) {
            score += 0.5;
        } else if line.contains(LOG_MARKER) {
            score += 0.25;
        }

        if REQUEST_TAG_PATTERN.is_match(line) {
            score += 0.5;
        }
    }

    let confidence = if total_lines > 0.0 {
        score / total_lines
    } else {
        0.0
    };

    let format = if confidence < MIN_CONFIDENCE {
        LogFormat::Unknown
    } else {
        LogFormat::TaggedRequestLog
    };

    FormatDetectionResult { format, confidence }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_log_detection() {
        let lines = vec![
            "I, [2024-03-05T08:15:42.120034 #812]  INFO -- : [0f4c5a8e-6d2b-4c55-9d2e-1b5a7e3c9f10] Started GET \"/\" for 10.0.0.7 at 2024-03-05 08:15:42 +0000".to_string(),
            "I, [2024-03-05T08:15:42.130034 #812]  INFO -- : [0f4c5a8e-6d2b-4c55-9d2e-1b5a7e3c9f10] Completed 200 OK in 10ms".to_string(),
        ];

        let result = detect_format(&lines);
        assert_eq!(result.format, LogFormat::TaggedRequestLog);
        assert!(result.confidence > 0.8);
    }

    #[test]
    fn test_apache_log_is_unknown() {
        let lines = vec![
            "192.168.1.1 - - [16/Sep/2025:03:00:09 +0000] \"GET /index.html HTTP/1.1\" 200 1234 \"-\" \"Mozilla/5.0\"".to_string(),
            "10.0.0.1 - - [16/Sep/2025:03:00:10 +0000] \"POST /api/login HTTP/1.1\" 301 567 \"http://example.com\" \"Chrome/91.0\"".to_string(),
        ];

        let result = detect_format(&lines);
        assert_eq!(result.format, LogFormat::Unknown);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_empty_sample() {
        let result = detect_format(&[]);
        assert_eq!(result.format, LogFormat::Unknown);
    }
}
