//! Tag extraction for structured substrings in free-form LLM output.
//!
//! Responses carry their structured payloads inside XML-ish tags
//! (`<new_cv>`, `<letter>`, `<grade>`). This pulls out the first matching
//! pair; the interior may span lines. Absence is `None`, not an error;
//! callers decide whether a missing tag is fatal.

/// Returns the trimmed interior of the first `<tag>…</tag>` pair, or
/// `None` if no matching pair exists.
pub fn extract_text_between_tags(text: &str, tag: &str) -> Option<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    let start = text.find(&open)? + open.len();
    let end = text[start..].find(&close)? + start;

    Some(text[start..end].trim().to_string())
}
