//! CLI front door for editor and script integration.
//!
//! Provides the command-line helpers for callswap operations:
//! - `toggle` - flip the call under the cursor between forms
//! - `expand` - force multi-line form
//! - `collapse` - force single-line form
//!
//! ## Output Modes
//!
//! By default the rewritten document is printed to stdout. With `--apply`
//! the file is rewritten in place instead. With `--json` a structured
//! envelope ([`RewriteResponse`]) is emitted, carrying the changed-call
//! description, the suggested cursor position, and (unless `--apply`) the
//! full replacement text.
//!
//! ## Error Handling
//!
//! All functions return `Result<T, CallswapError>`. The error type
//! provides stable codes used both in JSON output and as process exit
//! codes. "No call under cursor" is not an error: the input is returned
//! unchanged and the exit code is 0.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use callswap_core::error::CallswapError;
use callswap_core::output::{emit_response, ChangedCallInfo, CursorPosition, RewriteResponse};
use callswap_python::{collapse, expand, toggle, SwapConfig, ToggleOutcome};

// ============================================================================
// Request Types
// ============================================================================

/// Which rewrite operation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOp {
    Toggle,
    Expand,
    Collapse,
}

/// A parsed rewrite invocation.
#[derive(Debug, Clone)]
pub struct RewriteRequest {
    /// The operation to run.
    pub op: RewriteOp,
    /// Location string in `file:row[:col]` format (row is 1-indexed).
    pub at: String,
    /// Rewrite the file in place instead of printing the result.
    pub apply: bool,
    /// Emit a JSON envelope instead of plain text.
    pub json: bool,
    /// Indentation unit for multi-line rendering.
    pub indent: String,
    /// Callee names that must stay single-line.
    pub single_line_exceptions: Vec<String>,
}

/// A `file:row[:col]` location. The column is accepted for host-surface
/// compatibility; call location is row-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: PathBuf,
    pub row: usize,
}

impl Location {
    /// Parse a `file:row[:col]` location string.
    pub fn parse(at: &str) -> Option<Location> {
        let mut parts = at.rsplitn(3, ':');
        let last = parts.next()?;
        let middle = parts.next()?;
        let (file, row_text) = match parts.next() {
            // file:row:col - the column is parsed but unused.
            Some(file) => {
                last.parse::<usize>().ok()?;
                (file, middle)
            }
            // file:row
            None => (middle, last),
        };
        let row = row_text.parse::<usize>().ok()?;
        if row == 0 || file.is_empty() {
            return None;
        }
        Some(Location {
            file: PathBuf::from(file),
            row,
        })
    }
}

// ============================================================================
// Command Execution
// ============================================================================

/// Run a rewrite request, writing any stdout payload to `writer`.
///
/// Returns the outcome so callers can inspect it (tests, editor glue).
pub fn run_rewrite(
    request: &RewriteRequest,
    writer: &mut impl Write,
) -> Result<ToggleOutcome, CallswapError> {
    let location = Location::parse(&request.at).ok_or_else(|| {
        CallswapError::invalid_args(format!(
            "invalid location format '{}', expected file:row[:col]",
            request.at
        ))
    })?;

    let source = fs::read_to_string(&location.file)
        .map_err(|_| CallswapError::file_not_found(location.file.display().to_string()))?;

    let config = SwapConfig::default()
        .with_indent_unit(request.indent.clone())
        .with_single_line_exceptions(request.single_line_exceptions.iter().cloned());

    let outcome = match request.op {
        RewriteOp::Toggle => toggle(&source, location.row, &config),
        RewriteOp::Expand => expand(&source, location.row, &config),
        RewriteOp::Collapse => collapse(&source, location.row, &config),
    }?;

    if request.apply && outcome.changed.is_some() {
        fs::write(&location.file, &outcome.text).map_err(|e| {
            CallswapError::internal(format!(
                "failed to write {}: {}",
                location.file.display(),
                e
            ))
        })?;
        info!(file = %location.file.display(), "rewrote file in place");
    }

    if request.json {
        let changed = outcome.changed.as_ref().map(|c| ChangedCallInfo {
            callee: c.callee.clone(),
            direction: c.direction.as_str().to_string(),
            old_span: c.old_span,
            new_span: c.new_span,
        });
        let cursor = outcome.cursor.map(|(row, col)| CursorPosition { row, col });
        let mut response = RewriteResponse::new(changed, cursor);
        if !request.apply {
            response = response.with_text(outcome.text.clone());
        }
        emit_response(writer, &response)
            .map_err(|e| CallswapError::internal(format!("failed to emit response: {}", e)))?;
    } else if !request.apply {
        write!(writer, "{}", outcome.text)
            .map_err(|e| CallswapError::internal(format!("failed to write output: {}", e)))?;
    }

    Ok(outcome)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod location_parsing {
        use super::*;

        #[test]
        fn file_and_row() {
            let location = Location::parse("src/app.py:12").unwrap();
            assert_eq!(location.file, PathBuf::from("src/app.py"));
            assert_eq!(location.row, 12);
        }

        #[test]
        fn file_row_and_col() {
            let location = Location::parse("src/app.py:12:5").unwrap();
            assert_eq!(location.file, PathBuf::from("src/app.py"));
            assert_eq!(location.row, 12);
        }

        #[test]
        fn rejects_malformed_locations() {
            assert_eq!(Location::parse("src/app.py"), None);
            assert_eq!(Location::parse("src/app.py:abc"), None);
            assert_eq!(Location::parse("src/app.py:0"), None);
            assert_eq!(Location::parse(":12"), None);
        }
    }
}
