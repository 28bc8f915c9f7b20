//! JSON output types and serialization for CLI responses.
//!
//! This module defines the JSON schema for CLI output. These types form the
//! contract with scripting hosts and editor integrations.
//!
//! ## Design Principles
//!
//! 1. **Structured JSON:** all structured CLI output is valid JSON; the
//!    default (non-`--json`) mode may print plain transformed text instead
//! 2. **Status first:** every response has `status` as its first field
//! 3. **Deterministic:** same input -> same output (field order, ordering)
//! 4. **Nullable vs absent:** absent field means "not applicable"
//! 5. **Versioned:** schema version in every response enables forward
//!    compatibility

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::CallswapError;
use crate::text::LineSpan;

/// Current schema version for all responses.
pub const SCHEMA_VERSION: &str = "1";

// ============================================================================
// Response Payloads
// ============================================================================

/// Description of the call a rewrite operation changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangedCallInfo {
    /// Callee text of the changed call (e.g. `foo` or `obj.method`).
    pub callee: String,
    /// Direction of the rewrite: `"expanded"` or `"collapsed"`.
    pub direction: String,
    /// Line span the call occupied before the rewrite.
    pub old_span: LineSpan,
    /// Line span the call occupies after the rewrite.
    pub new_span: LineSpan,
}

/// A 1-indexed cursor position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CursorPosition {
    /// 1-indexed row.
    pub row: usize,
    /// 1-indexed column.
    pub col: usize,
}

/// Response for `toggle` / `expand` / `collapse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteResponse {
    /// `"ok"` for both a rewrite and the no-op outcome.
    pub status: String,
    /// Response schema version.
    pub schema_version: String,
    /// The call that was changed; absent when no call was under the cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<ChangedCallInfo>,
    /// Suggested cursor position after the edit; absent for the no-op case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorPosition>,
    /// Full replacement text; absent when `--apply` wrote the file in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RewriteResponse {
    /// Create a response with the current schema version.
    pub fn new(changed: Option<ChangedCallInfo>, cursor: Option<CursorPosition>) -> Self {
        RewriteResponse {
            status: "ok".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            changed,
            cursor,
            text: None,
        }
    }

    /// Attach the full replacement text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

// ============================================================================
// Error Responses
// ============================================================================

/// Error details for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable numeric error code (also the process exit code).
    pub code: u8,
    /// Human-readable message.
    pub message: String,
}

/// Response emitted when an operation fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`.
    pub status: String,
    /// Response schema version.
    pub schema_version: String,
    /// Error details.
    pub error: ErrorInfo,
}

impl From<&CallswapError> for ErrorResponse {
    fn from(err: &CallswapError) -> Self {
        ErrorResponse {
            status: "error".to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            error: ErrorInfo {
                code: err.error_code().code(),
                message: err.to_string(),
            },
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// Serialize a response as pretty JSON followed by a newline.
pub fn emit_response<T: Serialize>(writer: &mut impl Write, response: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(response)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(writer, "{}", json)
}

// ============================================================================
// Tests
// ============================================================================
