//! The toggle operation and its forced variants.
//!
//! A located call is in one of two shapes, classified fresh from the
//! current text on every invocation:
//!
//! - `SingleLine` — start line equals resolved end line
//! - `MultiLine` — anything else
//!
//! [`toggle`] flips the shape; [`expand`] and [`collapse`] force a
//! direction (re-rendering canonically when the call is already in the
//! requested shape). The only no-op outcome is "no call under cursor",
//! which returns the original text unchanged and no [`ChangedCall`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use callswap_core::text::{first_non_whitespace_column, join_lines, split_lines, LineSpan};
use callswap_python_cst::{parse_module, Codegen};

use crate::config::SwapConfig;
use crate::error::SwapError;
use crate::locate::find_nearest_call;
use crate::render::{render_multi_line, render_single_line};
use crate::splice::splice;

// ============================================================================
// Outcome Types
// ============================================================================

/// Which way a call was rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Single-line form was rewritten to multi-line.
    Expanded,
    /// Multi-line form was rewritten to single-line.
    Collapsed,
}

impl Direction {
    /// Stable lowercase name, as used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Expanded => "expanded",
            Direction::Collapsed => "collapsed",
        }
    }
}

/// Description of the call a rewrite changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedCall {
    /// Canonical callee text (e.g. `foo` or `obj.method`).
    pub callee: String,
    /// Direction of the rewrite.
    pub direction: Direction,
    /// Line span the render target occupied before the rewrite.
    pub old_span: LineSpan,
    /// Line span the render target occupies after the rewrite.
    pub new_span: LineSpan,
}

/// Result of a rewrite operation.
#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    /// The full document after the rewrite (identical to the input for
    /// the no-op outcome).
    pub text: String,
    /// The call that was changed, or `None` when no call was under the
    /// cursor.
    pub changed: Option<ChangedCall>,
    /// Suggested cursor position `(row, col)`, both 1-indexed: the first
    /// non-whitespace column of the changed call's starting line.
    pub cursor: Option<(usize, usize)>,
}

impl ToggleOutcome {
    fn unchanged(source: &str) -> Self {
        ToggleOutcome {
            text: source.to_string(),
            changed: None,
            cursor: None,
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Mode {
    Toggle,
    Expand,
    Collapse,
}

/// Flip the call under `cursor_row` between single-line and multi-line
/// form.
pub fn toggle(
    source: &str,
    cursor_row: usize,
    config: &SwapConfig,
) -> Result<ToggleOutcome, SwapError> {
    rewrite(source, cursor_row, config, Mode::Toggle)
}

/// Rewrite the call under `cursor_row` into multi-line form.
pub fn expand(
    source: &str,
    cursor_row: usize,
    config: &SwapConfig,
) -> Result<ToggleOutcome, SwapError> {
    rewrite(source, cursor_row, config, Mode::Expand)
}

/// Rewrite the call under `cursor_row` into canonical single-line form.
pub fn collapse(
    source: &str,
    cursor_row: usize,
    config: &SwapConfig,
) -> Result<ToggleOutcome, SwapError> {
    rewrite(source, cursor_row, config, Mode::Collapse)
}

fn rewrite(
    source: &str,
    cursor_row: usize,
    config: &SwapConfig,
    mode: Mode,
) -> Result<ToggleOutcome, SwapError> {
    let module = parse_module(source)?;
    let lines = split_lines(source);
    let Some(located) = find_nearest_call(&module, &lines, cursor_row)? else {
        debug!(cursor_row, "no call under cursor");
        return Ok(ToggleOutcome::unchanged(source));
    };

    let direction = match mode {
        Mode::Expand => Direction::Expanded,
        Mode::Collapse => Direction::Collapsed,
        Mode::Toggle => {
            if located.span.is_single_line() {
                Direction::Expanded
            } else {
                Direction::Collapsed
            }
        }
    };
    let rendered = match direction {
        Direction::Expanded => render_multi_line(&located, config),
        Direction::Collapsed => render_single_line(&located),
    };

    let new_lines = splice(&lines, located.span, &rendered);
    let new_span = LineSpan::new(
        located.span.start,
        located.span.start + rendered.split('\n').count() - 1,
    );
    let cursor_col = first_non_whitespace_column(&new_lines[located.span.start - 1]);
    let changed = ChangedCall {
        callee: located.call.func.to_code(),
        direction,
        old_span: located.span,
        new_span,
    };
    debug!(
        callee = %changed.callee,
        direction = changed.direction.as_str(),
        old_span = %changed.old_span,
        new_span = %changed.new_span,
        "rewrote call"
    );
    Ok(ToggleOutcome {
        text: join_lines(&new_lines),
        changed: Some(changed),
        cursor: Some((located.span.start, cursor_col)),
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn default_config() -> SwapConfig {
        SwapConfig::default()
    }

    mod toggling {
        use super::*;

        #[test]
        fn single_line_becomes_multi_line() {
            let outcome = toggle("foo(bar, thing=None)", 1, &default_config()).unwrap();
            assert_eq!(outcome.text, "foo(\n    bar,\n    thing=None,\n)");
            let changed = outcome.changed.unwrap();
            assert_eq!(changed.direction, Direction::Expanded);
            assert_eq!(changed.old_span, LineSpan::new(1, 1));
            assert_eq!(changed.new_span, LineSpan::new(1, 4));
        }

        #[test]
        fn multi_line_becomes_single_line() {
            let source = "foo(\n    thing,\n    bar,\n    fizz,\n    another,\n)";
            let outcome = toggle(source, 3, &default_config()).unwrap();
            assert_eq!(outcome.text, "foo(thing, bar, fizz, another)");
            assert_eq!(outcome.changed.unwrap().direction, Direction::Collapsed);
        }

        #[test]
        fn toggling_twice_returns_to_span_shape() {
            let source = "result = combine(first, second, mode='all')";
            let config = default_config();
            let once = toggle(source, 1, &config).unwrap();
            let twice = toggle(&once.text, 1, &config).unwrap();
            assert_eq!(twice.text, source);
        }

        #[test]
        fn toggle_classification_is_recomputed_each_call() {
            let config = default_config();
            let source = "foo(bar)";
            let expanded = toggle(source, 1, &config).unwrap();
            assert_eq!(
                expanded.changed.as_ref().unwrap().direction,
                Direction::Expanded
            );
            let collapsed = toggle(&expanded.text, 2, &config).unwrap();
            assert_eq!(
                collapsed.changed.as_ref().unwrap().direction,
                Direction::Collapsed
            );
        }
    }

    mod no_op {
        use super::*;

        #[test]
        fn no_call_under_cursor_returns_input_unchanged() {
            let source = "x = 1\nfoo(bar)\n";
            let outcome = toggle(source, 1, &default_config()).unwrap();
            assert_eq!(outcome.text, source);
            assert!(outcome.changed.is_none());
            assert!(outcome.cursor.is_none());
        }

        #[test]
        fn unsupported_statement_shape_is_a_no_op() {
            // A call inside a conditional expression is outside the
            // supported statement surface.
            let source = "x = foo(1) if flag else bar(2)";
            let outcome = toggle(source, 1, &default_config()).unwrap();
            assert_eq!(outcome.text, source);
            assert!(outcome.changed.is_none());
        }
    }

    mod assignments {
        use super::*;

        #[test]
        fn assignment_target_is_retained() {
            let outcome = toggle("obj = foo(bar, thing=None)", 1, &default_config()).unwrap();
            assert_eq!(outcome.text, "obj = foo(\n    bar,\n    thing=None,\n)");
        }

        #[test]
        fn assignment_collapses_back() {
            let source = "obj = foo(\n    bar,\n    thing=None,\n)";
            let outcome = toggle(source, 2, &default_config()).unwrap();
            assert_eq!(outcome.text, "obj = foo(bar, thing=None)");
        }
    }

    mod forced_modes {
        use super::*;

        #[test]
        fn expand_on_multi_line_rerenders_canonically() {
            let source = "foo(\n  bar,\n  fizz)";
            let outcome = expand(source, 2, &default_config()).unwrap();
            assert_eq!(outcome.text, "foo(\n    bar,\n    fizz,\n)");
        }

        #[test]
        fn collapse_on_single_line_normalizes_whitespace() {
            let outcome = collapse("foo(   bar,     thing=None  )", 1, &default_config()).unwrap();
            assert_eq!(outcome.text, "foo(bar, thing=None)");
        }
    }

    mod cursor_and_indent {
        use super::*;

        #[test]
        fn cursor_lands_on_first_non_whitespace_column() {
            let source = "def f():\n    obj = foo(bar, fizz)";
            let outcome = toggle(source, 2, &default_config()).unwrap();
            assert_eq!(outcome.cursor, Some((2, 5)));
        }

        #[test]
        fn every_spliced_line_keeps_base_indent() {
            let source = "class C:\n    def m(self):\n        foo(bar, thing=None)";
            let outcome = toggle(source, 3, &default_config()).unwrap();
            let lines: Vec<&str> = outcome.text.split('\n').collect();
            assert_eq!(lines[2], "        foo(");
            assert_eq!(lines[3], "            bar,");
            assert_eq!(lines[4], "            thing=None,");
            assert_eq!(lines[5], "        )");
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn zero_argument_call_is_stable_both_ways() {
            let config = default_config();
            let expanded = expand("foo()", 1, &config).unwrap();
            assert_eq!(expanded.text, "foo()");
            let collapsed = collapse("foo()", 1, &config).unwrap();
            assert_eq!(collapsed.text, "foo()");
        }

        #[test]
        fn trailing_comma_invariant() {
            let outcome = expand("foo(a, b, c)", 1, &default_config()).unwrap();
            for line in outcome
                .text
                .split('\n')
                .filter(|l| !l.ends_with('(') && *l != ")")
            {
                assert!(line.ends_with(','), "argument line {:?} lacks comma", line);
            }
        }

        #[test]
        fn exception_callee_never_expands() {
            let outcome = toggle("super(Base, self)", 1, &default_config()).unwrap();
            assert_eq!(outcome.text, "super(Base, self)");
        }

        #[test]
        fn malformed_source_propagates_without_partial_edit() {
            let result = toggle("foo('unterminated\n)", 1, &default_config());
            assert!(result.is_err());
        }

        #[test]
        fn trailing_newline_is_preserved() {
            let outcome = toggle("foo(bar)\n", 1, &default_config()).unwrap();
            assert_eq!(outcome.text, "foo(\n    bar,\n)\n");
        }
    }
}
