use crate::log_parser::patterns::REQUEST_ID_WIDTH;

/// Extracts the bracketed request id that prefixes every tagged line.
///
/// Returns `None` when the fragment has no closing bracket or the tag is not
/// exactly [`REQUEST_ID_WIDTH`] characters wide.
pub fn find_request_id(fragment: &str) -> Option<&str> {
    let (tag, _) = fragment.split_once(']')?;
    let id = tag.strip_prefix('[').unwrap_or(tag);

    if id.chars().count() == REQUEST_ID_WIDTH {
        Some(id)
    } else {
        None
    }
}
