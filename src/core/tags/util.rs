//! core/tags/util.rs
//! Small helpers shared by tag reading/writing.

use id3::frame::Content;
use id3::{Tag, TagLike};

/// Description of the user text frame (TXXX) we treat as "band".
pub(crate) const BAND_DESCRIPTION: &str = "BAND";

/// First value of a possibly multi-valued text frame, `None` if blank.
///
/// ID3v2.4 separates values with NUL:
/// - "A\0B" -> Some("A")
/// - "  " -> None
pub(crate) fn first_value(s: &str) -> Option<String> {
    let first = s.split('\0').next().unwrap_or_default();
    if first.trim().is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

/// Best-effort string value of a text frame id.
pub(crate) fn text_frame(tag: &Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => first_value(s),
        _ => None,
    }
}

/// Value of the first TXXX frame whose description matches (case-insensitive).
pub(crate) fn user_text(tag: &Tag, description: &str) -> Option<String> {
    tag.extended_texts()
        .find(|et| et.description.eq_ignore_ascii_case(description))
        .and_then(|et| first_value(&et.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_splits_on_nul_and_blanks_are_none() {
        assert_eq!(first_value("A\0B"), Some("A".to_string()));
        assert_eq!(first_value("Daft Punk / Pharrell"), Some("Daft Punk / Pharrell".to_string()));
        assert_eq!(first_value("   "), None);
        assert_eq!(first_value("\0B"), None);
        assert_eq!(first_value(""), None);
    }
}
