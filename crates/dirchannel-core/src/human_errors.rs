// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain-language versions of channel failures, for a UI layer that wants to
// show something friendlier than an error code.

use crate::types::ErrorCode;

/// Severity of a failure from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The app asked for something this build does not offer. Not the user's problem.
    Internal,
    /// The device could not provide the folder right now; trying later may work.
    Transient,
}

/// A human-readable failure with a plain English message and a suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert a failure reply into a `HumanError`.
///
/// `detail` is the message that came with the failure; it is appended to the
/// suggestion so support staff can still see it.
pub fn humanize_failure(code: ErrorCode, detail: &str) -> HumanError {
    match code {
        ErrorCode::Unimplemented => HumanError {
            message: "This app asked the device for something it doesn't support.".into(),
            suggestion: "Please update the app. If that doesn't help, report it.".into(),
            severity: Severity::Internal,
        },

        ErrorCode::Unavailable => HumanError {
            message: "We couldn't find the downloads folder on this device.".into(),
            suggestion: with_detail(
                "Check that the device's storage is available, then try again.",
                detail,
            ),
            severity: Severity::Transient,
        },

        ErrorCode::BadEnvelope => HumanError {
            message: "The app had an internal communication problem.".into(),
            suggestion: with_detail("Try again. If this keeps happening, please report it.", detail),
            severity: Severity::Internal,
        },
    }
}

fn with_detail(suggestion: &str, detail: &str) -> String {
    if detail.is_empty() {
        suggestion.to_owned()
    } else {
        format!("{suggestion} ({detail})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_is_transient_and_carries_detail() {
        let human = humanize_failure(ErrorCode::Unavailable, "storage not mounted");
        assert_eq!(human.severity, Severity::Transient);
        assert!(human.suggestion.ends_with("(storage not mounted)"));
    }

    #[test]
    fn unimplemented_hides_detail() {
        let human = humanize_failure(ErrorCode::Unimplemented, "method not implemented");
        assert_eq!(human.severity, Severity::Internal);
        assert!(!human.suggestion.contains("method not implemented"));
    }

    #[test]
    fn empty_detail_is_not_appended() {
        let human = humanize_failure(ErrorCode::BadEnvelope, "");
        assert!(!human.suggestion.contains('('));
    }
}
