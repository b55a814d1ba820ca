#![forbid(unsafe_code)]

//! asmdiff public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the diff report model and the interdiff reconciler and
//! offers a lightweight prelude for day-to-day usage.

// --- Report model re-exports -----------------------------------------------

pub use asmdiff_report::{DiffCell, DiffHeader, DiffOutput, DiffRow, DiffText};

// --- Interdiff re-exports --------------------------------------------------

pub use asmdiff_interdiff::{
    AlignOp, Chunk, InterdiffSummary, MyersAligner, ReconcileError, Reconciler, RowChunks,
    SequenceAligner, chunk_rows, reconcile,
};

/// Commonly used types, for glob import.
///
/// ```
/// use asmdiff::prelude::*;
///
/// let row = DiffRow::anchored("a0", DiffCell::from_text([DiffText::raw("add")]));
/// assert!(row.is_anchor());
/// ```
pub mod prelude {
    pub use asmdiff_interdiff::{InterdiffSummary, ReconcileError, Reconciler, reconcile};
    pub use asmdiff_report::{DiffCell, DiffHeader, DiffOutput, DiffRow, DiffText};
}
