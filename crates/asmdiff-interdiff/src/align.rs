#![forbid(unsafe_code)]

//! Sequence alignment of unaligned row spans.
//!
//! Two spans of rows sitting between the same pair of anchors are matched
//! by row key with a longest-common-subsequence alignment. The alignment
//! algorithm itself is a pluggable collaborator behind [`SequenceAligner`];
//! the default [`MyersAligner`] delegates to the `similar` crate.

use asmdiff_report::DiffRow;
use similar::{Algorithm, DiffOp, capture_diff_slices};
use std::fmt;

/// Errors raised when an alignment violates the matcher's contract.
///
/// Both variants are programmer-error-class faults: they mean the aligner
/// produced ranges that do not partition the two key arrays monotonically,
/// which cannot happen for two diffs of the same target. They are distinct
/// from the fail-open fallback paths in [`crate::reconcile`], so tests can
/// assert-fail while production callers may still choose to fail open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// An alignment op did not start at the consumption cursors.
    BadAlignment {
        expected_current: usize,
        expected_previous: usize,
        found_current: usize,
        found_previous: usize,
    },
    /// The ops ran out before both spans were fully consumed.
    IncompleteAlignment {
        consumed_current: usize,
        consumed_previous: usize,
        current_len: usize,
        previous_len: usize,
    },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadAlignment {
                expected_current,
                expected_previous,
                found_current,
                found_previous,
            } => write!(
                f,
                "bad myers-diff range: op starts at ({found_current}, {found_previous}), \
                 expected ({expected_current}, {expected_previous})"
            ),
            Self::IncompleteAlignment {
                consumed_current,
                consumed_previous,
                current_len,
                previous_len,
            } => write!(
                f,
                "bad myers-diff range: alignment consumed ({consumed_current}, {consumed_previous}) \
                 of ({current_len}, {previous_len})"
            ),
        }
    }
}

impl std::error::Error for ReconcileError {}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, ReconcileError>;

/// One alignment operation over a pair of key arrays.
///
/// Index ranges are contiguous and, across a well-formed op sequence,
/// partition both arrays completely and monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOp {
    /// `len` keys identical in both arrays, starting at `current` and
    /// `previous` respectively.
    Equal {
        current: usize,
        previous: usize,
        len: usize,
    },
    /// `len` keys present only in the current span.
    CurrentOnly { current: usize, len: usize },
    /// `len` keys present only in the previous span.
    PreviousOnly { previous: usize, len: usize },
}

/// A sequence-alignment algorithm over two ordered key arrays.
///
/// Implementations must return ops that partition both arrays completely
/// and in order; [`merge_span`] checks this and reports any violation as
/// a [`ReconcileError`]. Any LCS-style algorithm (Myers, patience)
/// satisfies the contract.
pub trait SequenceAligner {
    /// Align `current` against `previous`, returning ordered ops.
    fn align(&self, current: &[&str], previous: &[&str]) -> Vec<AlignOp>;
}

/// The default aligner: Myers diff via the `similar` crate.
///
/// `Replace` ops are normalized to a `CurrentOnly` followed by a
/// `PreviousOnly`, so consumers only see the three op kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersAligner;

impl SequenceAligner for MyersAligner {
    fn align(&self, current: &[&str], previous: &[&str]) -> Vec<AlignOp> {
        let mut ops = Vec::new();
        for op in capture_diff_slices(Algorithm::Myers, current, previous) {
            match op {
                DiffOp::Equal {
                    old_index,
                    new_index,
                    len,
                } => ops.push(AlignOp::Equal {
                    current: old_index,
                    previous: new_index,
                    len,
                }),
                DiffOp::Delete {
                    old_index, old_len, ..
                } => ops.push(AlignOp::CurrentOnly {
                    current: old_index,
                    len: old_len,
                }),
                DiffOp::Insert {
                    new_index, new_len, ..
                } => ops.push(AlignOp::PreviousOnly {
                    previous: new_index,
                    len: new_len,
                }),
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => {
                    ops.push(AlignOp::CurrentOnly {
                        current: old_index,
                        len: old_len,
                    });
                    ops.push(AlignOp::PreviousOnly {
                        previous: new_index,
                        len: new_len,
                    });
                }
            }
        }
        ops
    }
}

/// Merge one matched row pair into a single three-track row.
///
/// When the keys match, the merged row takes `key` and `base` from the
/// current side, `current` from the current side, and `previous` from the
/// previous side. A key mismatch is the degenerate aliasing case: the two
/// rows are emitted standalone instead of combined.
pub(crate) fn merge_pair(curr: &DiffRow, prev: &DiffRow, out: &mut Vec<DiffRow>) {
    if curr.key == prev.key {
        out.push(DiffRow {
            key: curr.key.clone(),
            base: curr.base.clone(),
            current: curr.current.clone(),
            previous: prev.previous.clone(),
        });
    } else {
        out.push(curr.clone());
        out.push(DiffRow {
            key: prev.key.clone(),
            base: None,
            current: None,
            previous: prev.previous.clone(),
        });
    }
}

/// Align two unaligned spans by key and append the resulting rows.
///
/// Matched rows are merged; rows only in `current` are emitted with just
/// their `current` cell, rows only in `previous` with just their
/// `previous` cell, all in alignment order. Empty-on-both-sides spans emit
/// nothing and never invoke the aligner.
pub(crate) fn merge_span<A: SequenceAligner + ?Sized>(
    aligner: &A,
    current: &[DiffRow],
    previous: &[DiffRow],
    out: &mut Vec<DiffRow>,
) -> Result<()> {
    if current.is_empty() && previous.is_empty() {
        return Ok(());
    }

    let current_keys: Vec<&str> = current.iter().map(|r| r.key.as_str()).collect();
    let previous_keys: Vec<&str> = previous.iter().map(|r| r.key.as_str()).collect();
    let ops = aligner.align(&current_keys, &previous_keys);

    // Consumption cursors into the two spans. Every op must start exactly
    // here and advance monotonically, or the alignment is unusable.
    let mut c = 0;
    let mut p = 0;
    for op in ops {
        match op {
            AlignOp::Equal {
                current: ci,
                previous: pi,
                len,
            } => {
                if ci != c || pi != p {
                    return Err(ReconcileError::BadAlignment {
                        expected_current: c,
                        expected_previous: p,
                        found_current: ci,
                        found_previous: pi,
                    });
                }
                for k in 0..len {
                    merge_pair(&current[ci + k], &previous[pi + k], out);
                }
                c += len;
                p += len;
            }
            AlignOp::CurrentOnly { current: ci, len } => {
                if ci != c {
                    return Err(ReconcileError::BadAlignment {
                        expected_current: c,
                        expected_previous: p,
                        found_current: ci,
                        found_previous: p,
                    });
                }
                out.extend(current[ci..ci + len].iter().cloned());
                c += len;
            }
            AlignOp::PreviousOnly { previous: pi, len } => {
                if pi != p {
                    return Err(ReconcileError::BadAlignment {
                        expected_current: c,
                        expected_previous: p,
                        found_current: c,
                        found_previous: pi,
                    });
                }
                out.extend(previous[pi..pi + len].iter().cloned());
                p += len;
            }
        }
    }

    if c != current.len() || p != previous.len() {
        return Err(ReconcileError::IncompleteAlignment {
            consumed_current: c,
            consumed_previous: p,
            current_len: current.len(),
            previous_len: previous.len(),
        });
    }
    Ok(())
}
