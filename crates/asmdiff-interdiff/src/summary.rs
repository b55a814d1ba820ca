#![forbid(unsafe_code)]

//! Row-provenance counts over a reconciled row list.

use asmdiff_report::DiffRow;

/// Counts of where the rows of a reconciled report came from.
///
/// Useful for "what changed since the previous attempt" displays without
/// walking the rows again. Every row lands in exactly one bucket, so the
/// counts sum to the row total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterdiffSummary {
    /// Rows aligned with a target instruction.
    pub anchors: usize,
    /// Unanchored rows matched across both attempts.
    pub merged: usize,
    /// Rows present only in the current attempt.
    pub current_only: usize,
    /// Rows present only in the previous attempt.
    pub previous_only: usize,
}

impl InterdiffSummary {
    /// Classify each row of a reconciled report.
    #[must_use]
    pub fn of_rows(rows: &[DiffRow]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            if row.is_anchor() {
                summary.anchors += 1;
            } else if row.current.is_some() && row.previous.is_some() {
                summary.merged += 1;
            } else if row.current.is_some() {
                summary.current_only += 1;
            } else {
                summary.previous_only += 1;
            }
        }
        summary
    }

    /// Total number of rows classified.
    #[must_use]
    pub fn total(&self) -> usize {
        self.anchors + self.merged + self.current_only + self.previous_only
    }
}
