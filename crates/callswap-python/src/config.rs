//! Engine configuration.
//!
//! Built once at startup from the host's preferences and treated as
//! immutable afterwards; the engine itself keeps no state between calls.

use std::collections::BTreeSet;

/// Default indentation unit: four spaces.
pub const DEFAULT_INDENT_UNIT: &str = "    ";

/// Configuration for the rewriting engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapConfig {
    /// String applied once per nesting level in multi-line rendering.
    pub indent_unit: String,
    /// Callee names that are never rendered multi-line. Matched against
    /// plain-name callees only; attribute callees are never exempt.
    pub single_line_exceptions: BTreeSet<String>,
}

impl Default for SwapConfig {
    fn default() -> Self {
        SwapConfig {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
            single_line_exceptions: BTreeSet::from(["super".to_string()]),
        }
    }
}

impl SwapConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the indentation unit.
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Replace the single-line exception set.
    pub fn with_single_line_exceptions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.single_line_exceptions = names.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a plain callee name is exempt from multi-line rendering.
    pub fn is_single_line_exception(&self, name: &str) -> bool {
        self.single_line_exceptions.contains(name)
    }
}
