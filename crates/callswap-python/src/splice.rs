//! Line splicing.
//!
//! Replaces the located span of lines with a rendering, re-applying the
//! base indentation of the span's first line to every produced line. The
//! rendering's own indentation is relative, so the block shifts correctly
//! at any nesting depth.
//!
//! Invariants:
//! - every line outside the span is carried over byte-for-byte
//! - the document length changes by exactly
//!   `rendered line count - span length`

use callswap_core::text::{leading_whitespace, LineSpan};

/// Replace `lines[span]` with `rendered`, indented to the span's base
/// indentation. Returns the new full line list.
pub fn splice(lines: &[String], span: LineSpan, rendered: &str) -> Vec<String> {
    let base_indent = lines
        .get(span.start - 1)
        .map(|line| leading_whitespace(line))
        .unwrap_or("");
    let replacement: Vec<String> = rendered
        .split('\n')
        .map(|line| format!("{}{}", base_indent, line))
        .collect();

    let mut out =
        Vec::with_capacity(lines.len().saturating_sub(span.len()) + replacement.len());
    out.extend_from_slice(&lines[..span.start - 1]);
    out.extend(replacement);
    out.extend_from_slice(&lines[span.end.min(lines.len())..]);
    out
}

// ============================================================================
// Tests
// ============================================================================
