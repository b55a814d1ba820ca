#![forbid(unsafe_code)]

//! Per-track cell contents.

use crate::text::DiffText;
use serde::{Deserialize, Serialize};

/// One cell of a diff row: the rendering data for a single track.
///
/// The reconciliation core treats cells as opaque values, cloning them
/// between rows but never inspecting anything beyond their presence.
/// `line`/`branch` locate the instruction in the disassembly; the `src_*`
/// fields tie it back to candidate source when line info is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffCell {
    /// Ordered styled spans making up the cell.
    pub text: Vec<DiffText>,
    /// Instruction line number in this track's disassembly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    /// Branch arrow slot, when the instruction is a branch target/source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<u32>,
    /// Source line text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Comment attached to the source line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_comment: Option<String>,
    /// Line number within the source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_line: Option<u32>,
    /// Path of the source file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_path: Option<String>,
}

impl DiffCell {
    /// Create a cell from its text spans, with no location metadata.
    #[must_use]
    pub fn from_text(text: impl IntoIterator<Item = DiffText>) -> Self {
        Self {
            text: text.into_iter().collect(),
            line: None,
            branch: None,
            src: None,
            src_comment: None,
            src_line: None,
            src_path: None,
        }
    }

    /// Set the disassembly line number.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Set the branch arrow slot.
    #[must_use]
    pub fn with_branch(mut self, branch: u32) -> Self {
        self.branch = Some(branch);
        self
    }

    /// Attach source location info.
    #[must_use]
    pub fn with_src(mut self, src: impl Into<String>, src_line: u32, src_path: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self.src_line = Some(src_line);
        self.src_path = Some(src_path.into());
        self
    }

    /// Display width of the cell: the sum of its span widths.
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.iter().map(DiffText::width).sum()
    }

    /// Concatenated plain text of the cell, without formatting.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.text.iter().map(|s| s.text.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_collects_spans() {
        let cell = DiffCell::from_text([DiffText::raw("lw "), DiffText::formatted("$a0", "r")]);
        assert_eq!(cell.text.len(), 2);
        assert_eq!(cell.plain_text(), "lw $a0");
        assert_eq!(cell.width(), 6);
    }

    #[test]
    fn src_builder_sets_all_three_fields() {
        let cell = DiffCell::from_text([]).with_src("return x;", 42, "src/main.c");
        assert_eq!(cell.src.as_deref(), Some("return x;"));
        assert_eq!(cell.src_line, Some(42));
        assert_eq!(cell.src_path.as_deref(), Some("src/main.c"));
    }
}
