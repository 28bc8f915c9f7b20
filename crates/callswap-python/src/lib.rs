//! Call rewriting engine.
//!
//! This crate implements the core of callswap: given source text and a
//! cursor row, locate the nearest call expression and rewrite it between
//! single-line and multi-line form, preserving surrounding indentation and
//! any wrapping assignment target.
//!
//! The engine is synchronous and stateless: every operation parses the
//! input fresh and produces a full result before returning. The only
//! configuration is a read-only [`SwapConfig`] (indent unit plus the
//! single-line exception set).
//!
//! # Pipeline
//!
//! ```text
//! ops::toggle -> locate::find_nearest_call -> render -> splice -> text
//!                       |
//!                       v
//!                span::resolve_end_line
//! ```
//!
//! # Example
//!
//! ```
//! use callswap_python::{toggle, SwapConfig};
//!
//! let config = SwapConfig::default();
//! let outcome = toggle("foo(bar, thing=None)", 1, &config).expect("toggle error");
//! assert_eq!(outcome.text, "foo(\n    bar,\n    thing=None,\n)");
//! ```

pub mod config;
pub mod error;
pub mod locate;
pub mod ops;
pub mod render;
pub mod span;
pub mod splice;
pub mod test_support;

pub use config::SwapConfig;
pub use error::SwapError;
pub use locate::{find_nearest_call, Located};
pub use ops::toggle::{collapse, expand, toggle, ChangedCall, Direction, ToggleOutcome};
