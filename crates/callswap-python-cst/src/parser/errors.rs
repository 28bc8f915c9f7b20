// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Parser error types.

use thiserror::Error;

use crate::tokenizer::TokError;

/// Document-level parse failures.
///
/// Statements the parser declines to handle are not errors — they are
/// simply absent from the parsed module. Only failures that make the whole
/// document untrustworthy (tokenization failures) are reported.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParserError {
    /// The source could not be tokenized.
    #[error("tokenizer error: {0}")]
    TokenizerError(#[from] TokError),
}

impl ParserError {
    /// The 1-indexed line the failure was detected on.
    pub fn line(&self) -> usize {
        match self {
            ParserError::TokenizerError(err) => err.line(),
        }
    }
}
