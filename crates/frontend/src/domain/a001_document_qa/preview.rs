use std::borrow::Cow;

/// Maximum number of characters of extracted text shown in the preview
pub const PREVIEW_LIMIT: usize = 500;
/// Appended to a preview that was cut
pub const TRUNCATION_MARKER: &str = "...";

/// Display form of the extracted text.
///
/// Counts characters, not bytes, so multi-byte text is never split inside a
/// code point. The stored text is only borrowed.
pub fn preview_text(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(PREVIEW_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], TRUNCATION_MARKER)),
        None => Cow::Borrowed(text),
    }
}
