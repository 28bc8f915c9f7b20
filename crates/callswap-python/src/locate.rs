//! Call location.
//!
//! Finds the call expression whose span contains the cursor row. Among
//! nested candidates the innermost wins: smallest line span first, then
//! the deeper node, then pre-order position. Candidates are visited in
//! deterministic pre-order, so identical input always selects the same
//! node.
//!
//! The wrapping assignment is resolved here, once, rather than carried as
//! a parent pointer: a call is "wrapped" only when it is the direct
//! right-hand side of a single assignment statement.

use tracing::debug;

use callswap_core::text::LineSpan;
use callswap_python_cst::{Assign, Call, CallCollector, Expression, Module, Statement};

use crate::error::SwapError;
use crate::span::resolve_end_line;

/// A call located under the cursor, with its statement context.
#[derive(Debug, Clone, Copy)]
pub struct Located<'m, 'a> {
    /// The call to re-render.
    pub call: &'m Call<'a>,
    /// The assignment wrapping the call, when the call is the direct
    /// right-hand side of a single assignment.
    pub assignment: Option<&'m Assign<'a>>,
    /// Line span of the render target in the current text — the
    /// assignment's span when wrapped, the call's own span otherwise.
    pub span: LineSpan,
}

/// Find the call whose span contains `cursor_row`.
///
/// Returns `Ok(None)` when no call spans the row; this is the expected
/// "nothing under cursor" outcome, not an error.
pub fn find_nearest_call<'m, 'a>(
    module: &'m Module<'a>,
    lines: &[String],
    cursor_row: usize,
) -> Result<Option<Located<'m, 'a>>, SwapError> {
    for statement in &module.body {
        let statement_start = statement.start_line();
        let statement_end = resolve_end_line(statement_start, lines)?;
        let statement_span = LineSpan::new(statement_start, statement_end.max(statement_start));
        if !statement_span.contains_row(cursor_row) {
            continue;
        }

        let candidates = CallCollector::collect(statement.value());
        debug!(
            cursor_row,
            statement_start,
            candidates = candidates.len(),
            "statement under cursor"
        );

        let mut best: Option<(LineSpan, usize, &'m Call<'a>)> = None;
        for site in &candidates {
            let call_start = site.call.line;
            let call_end = resolve_end_line(call_start, lines)?;
            let span = LineSpan::new(call_start, call_end.max(call_start));
            if !span.contains_row(cursor_row) {
                continue;
            }
            let wins = match &best {
                None => true,
                Some((best_span, best_depth, _)) => {
                    span.len() < best_span.len()
                        || (span.len() == best_span.len() && site.depth > *best_depth)
                }
            };
            if wins {
                best = Some((span, site.depth, site.call));
            }
        }

        let Some((call_span, _, call)) = best else {
            // The statement contains the row but no call does.
            continue;
        };

        let assignment = match statement {
            Statement::Assign(assign) => match &assign.value {
                Expression::Call(value) if std::ptr::eq(value, call) => Some(assign),
                _ => None,
            },
            Statement::Expr(_) => None,
        };
        let span = if assignment.is_some() {
            statement_span
        } else {
            call_span
        };
        return Ok(Some(Located {
            call,
            assignment,
            span,
        }));
    }
    Ok(None)
}

// ============================================================================
// Tests
// ============================================================================
