//! Error types and error code constants for callswap.
//!
//! This module provides a unified error type (`CallswapError`) that bridges
//! domain-specific errors from the engine and CST subsystems into a common
//! format suitable for JSON output and process exit codes.
//!
//! ## Error Code Mapping
//!
//! - `2`: Invalid arguments (bad input from caller)
//! - `3`: Resolution errors (file not found, unreadable input)
//! - `4`: Malformed source (unbalanced brackets, tokenizer failure)
//! - `10`: Internal errors (bugs, unexpected state)
//!
//! ## Design
//!
//! - **Unified type**: `CallswapError` is the single error type for CLI output
//! - **Bridging**: `impl From<X> for CallswapError` lives in the crate that
//!   owns `X` (the engine crate bridges `SwapError`)
//! - **Code mapping**: `OutputErrorCode` provides stable integer codes

use std::fmt;

use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Error codes for JSON output and process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller (bad input, malformed request).
    InvalidArguments = 2,
    /// Resolution errors (file not found, unreadable input).
    ResolutionError = 3,
    /// Malformed source text (unbalanced brackets, tokenizer failure).
    MalformedSource = 4,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for CLI output.
///
/// This is the canonical error type that all subsystem errors are converted
/// to before being rendered as JSON output or mapped to an exit code.
#[derive(Debug, Error)]
pub enum CallswapError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// File not found or unreadable.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The source text could not be tokenized or its spans resolved.
    #[error("malformed source: {message}")]
    MalformedSource { message: String },

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    InternalError { message: String },
}

// ============================================================================
// Error Code Mapping
// ============================================================================

impl From<&CallswapError> for OutputErrorCode {
    fn from(err: &CallswapError) -> Self {
        match err {
            CallswapError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            CallswapError::FileNotFound { .. } => OutputErrorCode::ResolutionError,
            CallswapError::MalformedSource { .. } => OutputErrorCode::MalformedSource,
            CallswapError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<CallswapError> for OutputErrorCode {
    fn from(err: CallswapError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl CallswapError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        CallswapError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<String>) -> Self {
        CallswapError::FileNotFound { path: path.into() }
    }

    /// Create a malformed source error.
    pub fn malformed_source(message: impl Into<String>) -> Self {
        CallswapError::MalformedSource {
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        CallswapError::InternalError {
            message: message.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> OutputErrorCode {
        OutputErrorCode::from(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod error_code_mapping {
        use super::*;

        #[test]
        fn invalid_arguments_maps_to_invalid_arguments() {
            let err = CallswapError::invalid_args("missing required field");
            assert_eq!(
                OutputErrorCode::from(&err),
                OutputErrorCode::InvalidArguments
            );
            assert_eq!(err.error_code().code(), 2);
        }

        #[test]
        fn file_not_found_maps_to_resolution_error() {
            let err = CallswapError::file_not_found("missing.py");
            assert_eq!(OutputErrorCode::from(&err), OutputErrorCode::ResolutionError);
            assert_eq!(err.error_code().code(), 3);
        }

        #[test]
        fn malformed_source_maps_to_malformed_source() {
            let err = CallswapError::malformed_source("unbalanced brackets");
            assert_eq!(OutputErrorCode::from(&err), OutputErrorCode::MalformedSource);
            assert_eq!(err.error_code().code(), 4);
        }

        #[test]
        fn internal_error_maps_to_internal_error() {
            let err = CallswapError::internal("unexpected state");
            assert_eq!(OutputErrorCode::from(&err), OutputErrorCode::InternalError);
            assert_eq!(err.error_code().code(), 10);
        }
    }

    mod error_display {
        use super::*;

        #[test]
        fn file_not_found_display() {
            let err = CallswapError::file_not_found("test.py");
            assert_eq!(err.to_string(), "file not found: test.py");
        }

        #[test]
        fn malformed_source_display() {
            let err = CallswapError::malformed_source("bracket depth never closed");
            assert_eq!(
                err.to_string(),
                "malformed source: bracket depth never closed"
            );
        }
    }

    mod output_error_code {
        use super::*;

        #[test]
        fn code_values_are_stable() {
            assert_eq!(OutputErrorCode::InvalidArguments.code(), 2);
            assert_eq!(OutputErrorCode::ResolutionError.code(), 3);
            assert_eq!(OutputErrorCode::MalformedSource.code(), 4);
            assert_eq!(OutputErrorCode::InternalError.code(), 10);
        }

        #[test]
        fn display_shows_code() {
            assert_eq!(format!("{}", OutputErrorCode::InvalidArguments), "2");
            assert_eq!(format!("{}", OutputErrorCode::InternalError), "10");
        }
    }
}
