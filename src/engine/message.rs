//! Rendering failures as text.

use super::Mismatch;

/// Labels used when rendering a [`Mismatch`].
///
/// Labels are right-aligned so the two values line up:
///
/// ```text
///
/// Expected: (= 1)
///      but: was 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormat {
    expected_label: String,
    was_label: String,
}

impl MessageFormat {
    /// Use `label` in front of the expectation.
    #[must_use]
    pub fn with_expected_label(mut self, label: impl Into<String>) -> Self {
        self.expected_label = label.into();
        self
    }

    /// Use `label` in front of the mismatch explanation.
    #[must_use]
    pub fn with_was_label(mut self, label: impl Into<String>) -> Self {
        self.was_label = label.into();
        self
    }

    /// Render a mismatch.
    #[must_use]
    pub fn format(&self, mismatch: &Mismatch) -> String {
        let width = self
            .expected_label
            .chars()
            .count()
            .max(self.was_label.chars().count());
        format!(
            "\n{:>width$} {}\n{:>width$} {}",
            self.expected_label, mismatch.expected, self.was_label, mismatch.was,
        )
    }
}

impl Default for MessageFormat {
    fn default() -> Self {
        Self {
            expected_label: "Expected:".to_string(),
            was_label: "but:".to_string(),
        }
    }
}

/// Render a mismatch with the default labels.
///
/// # Example
///
/// ```rust
/// use testkit_match::engine::{format_message, run_match};
/// use testkit_match::matcher::equals;
///
/// let result = run_match(&equals(1), &2);
/// let mismatch = result.mismatch().unwrap();
/// assert_eq!(format_message(mismatch), "\nExpected: (= 1)\n     but: was 2");
/// ```
#[must_use]
pub fn format_message(mismatch: &Mismatch) -> String {
    MessageFormat::default().format(mismatch)
}
