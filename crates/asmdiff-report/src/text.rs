#![forbid(unsafe_code)]

//! Styled text spans for diff cells.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// One styled span of a diff cell.
///
/// `format` is a renderer hint (e.g. `"r"` for a register operand that
/// differs), `group`/`index` tie rotation-colored operands together across
/// tracks, and `key` identifies a relocation or symbol reference. All of
/// these are opaque to the reconciliation core and flow through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffText {
    /// The literal text of the span.
    pub text: String,
    /// Formatting class, absent for plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Rotation group for operand coloring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Index within the rotation group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    /// Symbol/relocation key this span refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl DiffText {
    /// Create an unformatted span.
    #[inline]
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: None,
            group: None,
            index: None,
            key: None,
        }
    }

    /// Create a span with a formatting class.
    #[inline]
    #[must_use]
    pub fn formatted(text: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: Some(format.into()),
            group: None,
            index: None,
            key: None,
        }
    }

    /// Set the rotation group and index for operand coloring.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>, index: u32) -> Self {
        self.group = Some(group.into());
        self.index = Some(index);
        self
    }

    /// Set the symbol/relocation key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Display width of the span in terminal columns.
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.text.width()
    }
}
