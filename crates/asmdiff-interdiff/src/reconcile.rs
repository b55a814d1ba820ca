#![forbid(unsafe_code)]

//! Top-level reconciliation: drive chunking and span matching across two
//! diff reports and assemble the merged three-track row list.

use crate::align::{MyersAligner, Result, SequenceAligner, merge_pair, merge_span};
use crate::chunk::chunk_rows;
use asmdiff_report::{DiffOutput, DiffRow};

/// Reconciles a live diff report against a cached prior one.
///
/// Generic over the sequence aligner so tests can inject a stub; the
/// [`reconcile`] free function pairs it with the default [`MyersAligner`].
#[derive(Debug, Clone, Default)]
pub struct Reconciler<A = MyersAligner> {
    aligner: A,
}

impl Reconciler<MyersAligner> {
    /// A reconciler using Myers alignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: SequenceAligner> Reconciler<A> {
    /// A reconciler using a caller-supplied aligner.
    #[must_use]
    pub fn with_aligner(aligner: A) -> Self {
        Self { aligner }
    }

    /// Merge `curr` and `prev` into one three-track report.
    ///
    /// Fail-open rules: a missing `curr` yields `None`; a missing `prev`
    /// yields `curr` unchanged; differing anchor counts between the two
    /// reports (impossible for two diffs of the same target, but a
    /// changed target between fetches can produce it) log a warning and
    /// yield `curr` unchanged. Only an aligner contract violation is an
    /// error.
    ///
    /// Both inputs are assumed error-free: callers check
    /// [`DiffOutput::has_error`] before invoking.
    pub fn reconcile(
        &self,
        curr: Option<DiffOutput>,
        prev: Option<&DiffOutput>,
    ) -> Result<Option<DiffOutput>> {
        let Some(curr) = curr else {
            return Ok(None);
        };
        let Some(prev) = prev else {
            return Ok(Some(curr));
        };

        let curr_chunks = chunk_rows(&curr.rows);
        let prev_chunks = chunk_rows(&prev.rows);
        if curr_chunks.chunks.len() != prev_chunks.chunks.len() {
            tracing::warn!(
                curr_anchors = curr_chunks.chunks.len(),
                prev_anchors = prev_chunks.chunks.len(),
                "anchor counts differ between diffs, skipping interdiff"
            );
            return Ok(Some(curr));
        }

        let mut rows: Vec<DiffRow> = Vec::with_capacity(curr.rows.len() + prev.rows.len());
        for (cc, pc) in curr_chunks.chunks.iter().zip(&prev_chunks.chunks) {
            merge_span(&self.aligner, cc.unaligned, pc.unaligned, &mut rows)?;
            merge_pair(cc.aligned, pc.aligned, &mut rows);
        }
        merge_span(
            &self.aligner,
            curr_chunks.trailing,
            prev_chunks.trailing,
            &mut rows,
        )?;

        tracing::trace!(
            rows = rows.len(),
            anchors = prev_chunks.chunks.len(),
            "reconciled interdiff"
        );
        Ok(Some(DiffOutput {
            arch_str: curr.arch_str,
            current_score: curr.current_score,
            max_score: curr.max_score,
            error: curr.error,
            header: curr.header,
            rows,
        }))
    }
}

/// Reconcile with the default Myers aligner.
///
/// Callers supply `curr` as the live recompile result and `prev` as a
/// cached prior result; the return value replaces `curr` for three-column
/// rendering.
pub fn reconcile(curr: Option<DiffOutput>, prev: Option<&DiffOutput>) -> Result<Option<DiffOutput>> {
    Reconciler::new().reconcile(curr, prev)
}
