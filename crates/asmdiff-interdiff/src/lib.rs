#![forbid(unsafe_code)]

//! Three-way diff reconciliation ("interdiff").
//!
//! Given two independently computed diff reports that share the same base
//! (target) track — the live recompile result and a cached prior attempt —
//! this crate merges them into a single three-track report, so a user can
//! see how their latest edit changed the match relative to the previous
//! one.
//!
//! Alignment anchors on rows that carry a `base` cell: base content is
//! identical across both inputs (same target), so anchored rows pair up
//! positionally. The unaligned spans between consecutive anchors are
//! matched by row key with a Myers sequence alignment.
//!
//! # Example
//! ```
//! use asmdiff_interdiff::reconcile;
//! use asmdiff_report::{DiffCell, DiffHeader, DiffOutput, DiffRow, DiffText};
//!
//! let anchor = |cell: &str| DiffCell::from_text([DiffText::raw(cell.to_owned())]);
//! let curr = DiffOutput {
//!     arch_str: "mips".into(),
//!     current_score: 40,
//!     max_score: 100,
//!     error: None,
//!     header: DiffHeader::three_way("Target", "Current", "Previous"),
//!     rows: vec![DiffRow::anchored("a0", anchor("add")).with_current(anchor("addu"))],
//! };
//! let prev = DiffOutput {
//!     rows: vec![DiffRow::anchored("a0", anchor("add")).with_previous(anchor("subu"))],
//!     ..curr.clone()
//! };
//!
//! let merged = reconcile(Some(curr), Some(&prev)).unwrap().unwrap();
//! assert!(merged.rows[0].current.is_some() && merged.rows[0].previous.is_some());
//! ```

pub mod align;
pub mod chunk;
pub mod reconcile;
pub mod summary;

pub use align::{AlignOp, MyersAligner, ReconcileError, Result, SequenceAligner};
pub use chunk::{Chunk, RowChunks, chunk_rows};
pub use reconcile::{Reconciler, reconcile};
pub use summary::InterdiffSummary;
