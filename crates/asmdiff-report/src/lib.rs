#![forbid(unsafe_code)]

//! Diff report data model for the asmdiff pipeline.
//!
//! The types here mirror the compile API's JSON response for a compile
//! request: a [`DiffOutput`] carries scoring metadata, per-track column
//! headers, and an ordered list of [`DiffRow`]s, each with up to three
//! optional [`DiffCell`]s (`base`, `current`, `previous`). Cell contents
//! are ordered [`DiffText`] spans.
//!
//! Row order is significant (it represents assembly order) and the `key`
//! of a row is stable across two independently produced diffs of the same
//! target, which is what makes reconciliation possible downstream.
//!
//! # Example
//! ```
//! use asmdiff_report::{DiffCell, DiffRow, DiffText};
//!
//! let row = DiffRow::anchored("80:8", DiffCell::from_text([DiffText::raw("add")]))
//!     .with_current(DiffCell::from_text([DiffText::formatted("addu", "r")]));
//! assert!(row.is_anchor());
//! ```

pub mod cell;
pub mod output;
pub mod row;
pub mod text;

pub use cell::DiffCell;
pub use output::{DiffHeader, DiffOutput};
pub use row::DiffRow;
pub use text::DiffText;
