//! Candidate-line detection and kind classification.
//!
//! A line is only looked at when it carries the logger separator
//! ([`LOG_MARKER`]). Everything else (stack traces, blank lines, SQL dumps)
//! is skipped before classification.

use super::formats::LineKind;
use super::patterns::{COMPLETED_MARKER, LOG_MARKER, PARAMETERS_MARKER, STARTED_MARKER};

/// A candidate line's kind and the payload handed to the matching decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub kind: LineKind,
    pub payload: &'a str,
}

/// Returns `None` for lines that are not log entries at all.
pub fn classify(line: &str) -> Option<Classified<'_>> {
    let (head, tail) = line.split_once(LOG_MARKER)?;
    let tail = tail.strip_prefix(' ').unwrap_or(tail);

    if let Some(kind) = kind_of(tail) {
        return Some(Classified {
            kind,
            payload: tail,
        });
    }

    // Some formatters put the separator after the message; the tag then sits
    // before the marker.
    if let Some(kind) = kind_of(head) {
        // Started keeps the space before the marker: it stands in for the zone
        // token so the positional grammar still sees ten tokens.
        let head = match kind {
            LineKind::Started => head,
            _ => head.trim_end(),
        };
        return Some(Classified {
            kind,
            payload: anchor_at_tag(head, kind),
        });
    }

    Some(Classified {
        kind: LineKind::Invalid,
        payload: tail,
    })
}

fn kind_of(text: &str) -> Option<LineKind> {
    if text.contains(STARTED_MARKER) {
        Some(LineKind::Started)
    } else if text.contains(PARAMETERS_MARKER) {
        Some(LineKind::Parameters)
    } else if text.contains(COMPLETED_MARKER) {
        Some(LineKind::Completed)
    } else {
        None
    }
}

/// Slices `text` from the `[` opening the tag that precedes the kind marker.
fn anchor_at_tag(text: &str, kind: LineKind) -> &str {
    let marker = match kind {
        LineKind::Started => STARTED_MARKER,
        LineKind::Parameters => PARAMETERS_MARKER,
        LineKind::Completed => COMPLETED_MARKER,
        LineKind::Invalid => return text,
    };

    text.find(marker)
        .and_then(|end| text[..end].rfind('['))
        .map_or(text, |start| &text[start..])
}
