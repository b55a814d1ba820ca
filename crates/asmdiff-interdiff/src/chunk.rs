#![forbid(unsafe_code)]

//! Row chunking: decompose a flat row list into alignment anchors and the
//! unaligned spans between them.

use asmdiff_report::DiffRow;

/// A maximal run of rows without a `base` cell, followed by exactly one
/// row that has one (the anchor).
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    /// Rows preceding the anchor that carry no `base` cell.
    pub unaligned: &'a [DiffRow],
    /// The terminating anchor row. Always has a `base` cell.
    pub aligned: &'a DiffRow,
}

/// The chunked form of a row list.
#[derive(Debug, Clone)]
pub struct RowChunks<'a> {
    /// Chunks in row order, one per anchor row.
    pub chunks: Vec<Chunk<'a>>,
    /// Trailing rows after the last anchor, with no anchor of their own.
    pub trailing: &'a [DiffRow],
}

/// Split `rows` into anchor-terminated chunks plus the trailing remainder.
///
/// A row list with zero anchors produces zero chunks and a `trailing`
/// slice covering the entire input. Pure and zero-copy: the result
/// borrows slices of the input.
#[must_use]
pub fn chunk_rows(rows: &[DiffRow]) -> RowChunks<'_> {
    let mut chunks = Vec::new();
    let mut span_start = 0;
    for (i, row) in rows.iter().enumerate() {
        if row.is_anchor() {
            chunks.push(Chunk {
                unaligned: &rows[span_start..i],
                aligned: row,
            });
            span_start = i + 1;
        }
    }
    RowChunks {
        chunks,
        trailing: &rows[span_start..],
    }
}
