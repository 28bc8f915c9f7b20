//! Engine error types.
//!
//! "No call under cursor" is not an error — it is the null outcome of
//! [`crate::ops::toggle::ToggleOutcome`]. Everything here makes the whole
//! invocation fail, with no partial edit applied.

use thiserror::Error;

use callswap_core::error::CallswapError;
use callswap_python_cst::ParserError;

/// Errors that can occur while locating or rewriting a call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SwapError {
    /// The bracket-depth scan never returned to zero before the end of the
    /// document: the source is unbalanced and no span can be trusted.
    #[error("bracket depth never returned to zero for the span starting on line {start_line}")]
    MalformedSpan { start_line: usize },

    /// The document could not be parsed at all.
    #[error(transparent)]
    Parse(#[from] ParserError),
}

impl From<SwapError> for CallswapError {
    fn from(err: SwapError) -> Self {
        CallswapError::malformed_source(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_span_display() {
        let err = SwapError::MalformedSpan { start_line: 7 };
        assert_eq!(
            err.to_string(),
            "bracket depth never returned to zero for the span starting on line 7"
        );
    }

    #[test]
    fn bridges_to_malformed_source() {
        let err = SwapError::MalformedSpan { start_line: 1 };
        let bridged = CallswapError::from(err);
        assert_eq!(bridged.error_code().code(), 4);
    }
}
