// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Code generation trait for syntax nodes.
//!
//! Every node can print itself in canonical single-line form: no embedded
//! newlines, `", "` between sequence items, no space around keyword `=`.
//! The multi-line call form is not produced here — it is a rendering
//! concern layered on top by the engine.

use std::fmt;

/// Accumulates generated source text.
#[derive(Debug, Default)]
pub struct CodegenState {
    tokens: String,
}

impl CodegenState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token to the output.
    pub fn add_token(&mut self, token: &str) {
        self.tokens.push_str(token);
    }

    /// Consume the state, returning the generated text.
    pub fn into_string(self) -> String {
        self.tokens
    }
}

impl fmt::Display for CodegenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens)
    }
}

/// Canonical single-line code generation.
pub trait Codegen {
    /// Append this node's canonical form to `state`.
    fn codegen(&self, state: &mut CodegenState);

    /// Convenience: generate this node's canonical form as a fresh string.
    fn to_code(&self) -> String {
        let mut state = CodegenState::new();
        self.codegen(&mut state);
        state.into_string()
    }
}
