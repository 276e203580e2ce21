//! Request payloads accepted by the HTTP layer and their validated forms.

pub mod categories;
pub mod videos;

/// Serde default for optional text fields that start out empty.
pub(crate) fn empty_text() -> Option<String> {
    Some(String::new())
}
