//! Text utilities for line spans and indentation.
//!
//! ## Coordinate Conventions
//!
//! - Lines and columns are **1-indexed** (matching editor conventions)
//! - The internal line list is 0-indexed; conversion happens at the API
//!   boundary
//! - Line/column values of 0 are treated as 1 (defensive clamping)
//!
//! Documents are modeled as the list produced by splitting on `'\n'`, so a
//! trailing newline yields a final empty element and `join_lines` restores
//! the original text byte-for-byte.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Line Spans
// ============================================================================

/// An inclusive range of 1-indexed line numbers occupied by a source
/// construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineSpan {
    /// First line of the construct (1-indexed, inclusive).
    pub start: usize,
    /// Last line of the construct (1-indexed, inclusive).
    pub end: usize,
}

impl LineSpan {
    /// Create a new span.
    ///
    /// # Panics
    /// Panics if `start > end` or `start == 0`.
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start >= 1, "LineSpan start ({}) must be >= 1", start);
        assert!(
            start <= end,
            "LineSpan start ({}) must be <= end ({})",
            start,
            end
        );
        LineSpan { start, end }
    }

    /// Number of lines covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A span always covers at least one line.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether the given 1-indexed row falls inside the span.
    pub fn contains_row(&self, row: usize) -> bool {
        self.start <= row && row <= self.end
    }

    /// Whether the span covers a single line.
    pub fn is_single_line(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ============================================================================
// Line Utilities
// ============================================================================

/// Split a document into its line list.
///
/// Splits on `'\n'` without discarding the trailing empty element, so
/// `join_lines(&split_lines(text)) == text`.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

/// Join a line list back into a document.
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// The leading whitespace of a line.
pub fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}

/// The 1-indexed column of the first non-whitespace character on a line.
///
/// Returns 1 for an empty or all-whitespace line.
pub fn first_non_whitespace_column(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count() + 1
}

/// Fetch the line at a 1-indexed row, clamping row 0 to row 1.
pub fn line_at(lines: &[String], row: usize) -> Option<&str> {
    let row = row.max(1);
    lines.get(row - 1).map(String::as_str)
}

// ============================================================================
// Tests
// ============================================================================
