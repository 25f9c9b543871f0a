//! # User-facing snackbar messages.
//!
//! A [`SnackbarMessage`] is a short transient notice the scaffold overlay
//! shows to the user ("post created", "upload failed"). Messages travel
//! through the snackbar facade as single-element groups; see
//! [`SnackbarService`](crate::SnackbarService) for the batching contract.

use serde::{Deserialize, Serialize};

/// Severity discriminant of a snackbar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnackbarKind {
    /// Neutral confirmation.
    Info,
    /// Something went wrong; styled as an error.
    Error,
}

/// One transient user-facing message.
///
/// ## Example
/// ```rust
/// use eventline::{SnackbarKind, SnackbarMessage};
///
/// let msg = SnackbarMessage::error("upload failed");
/// assert_eq!(msg.kind, SnackbarKind::Error);
/// assert_eq!(msg.text(), "upload failed");
/// assert_eq!(msg.as_label(), "error");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackbarMessage {
    /// Severity used for styling and grouping.
    pub kind: SnackbarKind,
    /// The text shown to the user.
    pub text: String,
}

impl SnackbarMessage {
    /// Creates a neutral confirmation message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: SnackbarKind::Info,
            text: text.into(),
        }
    }

    /// Creates an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: SnackbarKind::Error,
            text: text.into(),
        }
    }

    /// The text shown to the user.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self.kind {
            SnackbarKind::Info => "info",
            SnackbarKind::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_the_kind() {
        assert_eq!(SnackbarMessage::info("ok").kind, SnackbarKind::Info);
        assert_eq!(SnackbarMessage::error("no").kind, SnackbarKind::Error);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SnackbarMessage::info("saved")).expect("serialize");
        assert!(json.contains(r#""kind":"info""#));
    }
}
