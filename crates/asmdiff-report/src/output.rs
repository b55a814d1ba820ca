#![forbid(unsafe_code)]

//! Top-level diff report.

use crate::row::DiffRow;
use crate::text::DiffText;
use serde::{Deserialize, Serialize};

/// Per-track column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHeader {
    /// Header spans for the target column.
    pub base: Vec<DiffText>,
    /// Header spans for the live candidate column.
    pub current: Vec<DiffText>,
    /// Header spans for the prior-attempt column, present only in a
    /// three-way view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Vec<DiffText>>,
}

impl DiffHeader {
    /// Header for a two-way (target vs. current) view.
    #[must_use]
    pub fn two_way(base: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            base: vec![DiffText::raw(base)],
            current: vec![DiffText::raw(current)],
            previous: None,
        }
    }

    /// Header for a three-way (target vs. current vs. previous) view.
    #[must_use]
    pub fn three_way(
        base: impl Into<String>,
        current: impl Into<String>,
        previous: impl Into<String>,
    ) -> Self {
        Self {
            base: vec![DiffText::raw(base)],
            current: vec![DiffText::raw(current)],
            previous: Some(vec![DiffText::raw(previous)]),
        }
    }
}

/// The result of diffing one candidate against the target.
///
/// If `error` is set, `rows` and `header` are unreliable and must not be
/// processed; callers short-circuit on [`DiffOutput::has_error`] before
/// handing the report to anything downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffOutput {
    /// Architecture identifier, e.g. `"mips"`.
    pub arch_str: String,
    /// Remaining mismatch score; zero means a perfect match.
    pub current_score: i64,
    /// Score of a candidate matching nothing at all.
    pub max_score: i64,
    /// Compile or diff failure message. Always serialized, as an explicit
    /// `null` when absent, matching the wire format.
    pub error: Option<String>,
    /// Per-track column headers.
    pub header: DiffHeader,
    /// Ordered diff rows; order represents assembly order.
    pub rows: Vec<DiffRow>,
}

impl DiffOutput {
    /// Whether this report carries an error instead of usable rows.
    #[inline]
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Match quality as a percentage, 100.0 being a perfect match.
    ///
    /// Returns `None` when `max_score` is not positive (an empty target
    /// has nothing to match against).
    #[must_use]
    pub fn match_percent(&self) -> Option<f64> {
        if self.max_score <= 0 {
            return None;
        }
        let ratio = self.current_score as f64 / self.max_score as f64;
        Some(((1.0 - ratio).max(0.0)) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(current_score: i64, max_score: i64) -> DiffOutput {
        DiffOutput {
            arch_str: "mips".into(),
            current_score,
            max_score,
            error: None,
            header: DiffHeader::two_way("Target", "Current"),
            rows: Vec::new(),
        }
    }

    #[test]
    fn match_percent_perfect_and_zero() {
        assert_eq!(report(0, 1000).match_percent(), Some(100.0));
        assert_eq!(report(1000, 1000).match_percent(), Some(0.0));
    }

    #[test]
    fn match_percent_clamps_overshoot() {
        // A candidate can score worse than max_score; never report negative.
        assert_eq!(report(1500, 1000).match_percent(), Some(0.0));
    }

    #[test]
    fn match_percent_undefined_for_empty_target() {
        assert_eq!(report(0, 0).match_percent(), None);
    }

    #[test]
    fn three_way_header_populates_previous() {
        let header = DiffHeader::three_way("Target", "Current", "Previous");
        assert_eq!(header.previous.as_ref().map(Vec::len), Some(1));
    }
}
