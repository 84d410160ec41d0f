//! Notices for non-fatal adjustments
//!
//! When the engine silently corrects a value (e.g., clamping an order
//! quantity into the available-stock range) it reports the correction as a
//! notice instead of an error. The engine never renders notices; the
//! presentation layer decides how to surface them.

use serde::Serialize;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
}

/// A discrete (kind, message) event for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }
}
