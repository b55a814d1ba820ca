#![forbid(unsafe_code)]

//! Diff rows and their track cells.

use crate::cell::DiffCell;
use serde::{Deserialize, Serialize};

/// One row of a diff report.
///
/// A row is keyed by a string that encodes its identity in the base
/// (target) track, so that rows from two independently produced diffs of
/// the same target can be compared for equality. Any combination of the
/// three optional cells except "all absent" is meaningful:
///
/// - `base` present: the row is aligned with a target instruction (an
///   *anchor* row for reconciliation purposes).
/// - `base` absent: the row exists only in the candidate's local output,
///   an extra instruction not matched to any target row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRow {
    /// Stable row identifier, comparable across diffs of the same target.
    pub key: String,
    /// The target track cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<DiffCell>,
    /// The live candidate's track cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<DiffCell>,
    /// The prior attempt's track cell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<DiffCell>,
}

impl DiffRow {
    /// Create a row aligned with a target instruction.
    #[must_use]
    pub fn anchored(key: impl Into<String>, base: DiffCell) -> Self {
        Self {
            key: key.into(),
            base: Some(base),
            current: None,
            previous: None,
        }
    }

    /// Create a candidate-only row with no target counterpart.
    #[must_use]
    pub fn unanchored(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            base: None,
            current: None,
            previous: None,
        }
    }

    /// Set the base track cell.
    #[must_use]
    pub fn with_base(mut self, cell: DiffCell) -> Self {
        self.base = Some(cell);
        self
    }

    /// Set the current track cell.
    #[must_use]
    pub fn with_current(mut self, cell: DiffCell) -> Self {
        self.current = Some(cell);
        self
    }

    /// Set the previous track cell.
    #[must_use]
    pub fn with_previous(mut self, cell: DiffCell) -> Self {
        self.previous = Some(cell);
        self
    }

    /// Whether this row carries a base cell and can serve as an
    /// alignment anchor.
    #[inline]
    #[must_use]
    pub fn is_anchor(&self) -> bool {
        self.base.is_some()
    }
}
