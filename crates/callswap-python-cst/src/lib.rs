// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A Python statement parser and syntax node library for callswap.
//!
//! This crate parses the statement surface the call-rewriting engine
//! operates on: expression statements and single assignments built from a
//! closed node set — calls, names, literals, collections, and attribute
//! access. It is deliberately not a full Python parser; logical lines
//! outside that surface are skipped rather than guessed at.
//!
//! # Overview
//!
//! - **Tokenizing**: [`tokenize`] produces a position-tracked token stream
//!   with Python's logical-line rules (implicit joins inside brackets,
//!   backslash joins, comments, triple-quoted strings).
//! - **Parsing**: [`parse_module`] builds a [`Module`] of recognized
//!   statements.
//! - **Code Generation**: the [`Codegen`] trait prints any node in
//!   canonical single-line form.
//! - **Traversal**: the [`visitor`] module provides pre-order walks and
//!   the [`CallCollector`].
//!
//! # Quick Start
//!
//! ```
//! use callswap_python_cst::{parse_module, Codegen};
//!
//! let module = parse_module("obj = foo(bar,   thing=None)").expect("parse error");
//! assert_eq!(module.body[0].to_code(), "obj = foo(bar, thing=None)");
//! ```

use std::cmp::max;

/// Tokenizer for Python source code.
pub mod tokenizer;
pub use tokenizer::{tokenize, TokError, TokKind, Token};

mod nodes;
pub use nodes::*;

mod parser;
pub use parser::{parse_module, ParserError};

/// Visitor and traversal infrastructure.
pub mod visitor;
pub use visitor::{CallCollector, CallSite, VisitResult, Visitor};

// ============================================================================
// Error formatting
// ============================================================================

/// Returns the byte offset of the beginning of line `n` (1-indexed).
fn bol_offset(source: &str, n: i32) -> usize {
    if n <= 1 {
        return 0;
    }
    source
        .match_indices('\n')
        .nth((n - 2) as usize)
        .map(|(index, _)| index + 1)
        .unwrap_or_else(|| source.len())
}

/// Formats a parser error into a human-readable string with source context.
///
/// # Example
///
/// ```
/// use callswap_python_cst::{parse_module, prettify_error};
///
/// if let Err(e) = parse_module("foo('oops\n)") {
///     let formatted = prettify_error(&e, "foo('oops\n)", "example.py");
///     assert!(formatted.contains("example.py"));
/// }
/// ```
pub fn prettify_error(err: &ParserError, source: &str, label: &str) -> String {
    use annotate_snippets::{Level, Renderer, Snippet};

    let line = err.line() as i32;
    let context = 1;
    let line_start = max(1, line - context) as usize;
    let start_offset = bol_offset(source, line - context);
    let end_offset = bol_offset(source, line + context + 1);
    let snippet_source = &source[start_offset..end_offset];

    // Annotate the full error line within the snippet.
    let error_line_start = bol_offset(source, line) - start_offset;
    let error_line_end = source[start_offset + error_line_start..end_offset]
        .find('\n')
        .map(|p| error_line_start + p)
        .unwrap_or(end_offset - start_offset);
    let span_end = if error_line_start == error_line_end {
        (error_line_end + 1).min(snippet_source.len().max(1))
    } else {
        error_line_end
    };
    let message = err.to_string();

    let rendered = Renderer::styled()
        .render(
            Level::Error.title(label).snippet(
                Snippet::source(snippet_source)
                    .line_start(line_start)
                    .fold(false)
                    .annotations(vec![Level::Error
                        .span(error_line_start..span_end)
                        .label(&message)]),
            ),
        )
        .to_string();
    rendered
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_simple() {
        let module = parse_module("foo()").expect("parse error");
        assert_eq!(module.body.len(), 1);
    }

    #[test]
    fn test_module_with_mixed_statements() {
        let source = "import os\n\nresult = compute(1, 2)\nprint(result)\n";
        let module = parse_module(source).expect("parse error");
        // `import os` is outside the surface; the other two parse.
        assert_eq!(module.body.len(), 2);
        assert_eq!(module.body[0].start_line(), 3);
        assert_eq!(module.body[1].start_line(), 4);
    }

    #[test]
    fn test_reparse_is_deterministic() {
        let source = "obj = foo(bar(1), baz(2))\n";
        let first = parse_module(source).expect("parse error");
        let second = parse_module(source).expect("parse error");
        assert_eq!(first, second);
    }

    #[test]
    fn bol_offset_first_line() {
        assert_eq!(0, bol_offset("hello", 1));
        assert_eq!(0, bol_offset("hello", 0));
        assert_eq!(0, bol_offset("hello\nhello", 1));
    }

    #[test]
    fn bol_offset_second_line() {
        assert_eq!(6, bol_offset("hello\nhello", 2));
        assert_eq!(6, bol_offset("hello\nhello\nhello", 2));
    }

    #[test]
    fn bol_offset_past_end() {
        assert_eq!(5, bol_offset("hello", 3));
        assert_eq!(11, bol_offset("hello\nhello", 3));
    }

    #[test]
    fn prettify_error_includes_label_and_message() {
        let source = "x = 1\nfoo('oops\ny = 2\n";
        let err = parse_module(source).expect_err("should fail to tokenize");
        let formatted = prettify_error(&err, source, "snippet.py");
        assert!(formatted.contains("snippet.py"));
        assert!(formatted.contains("unterminated string"));
    }
}
