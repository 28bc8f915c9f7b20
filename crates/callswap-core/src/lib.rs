//! Core infrastructure for callswap.
//!
//! This crate provides language-agnostic infrastructure:
//! - Error types and stable error codes for CLI output
//! - JSON output types for CLI responses
//! - Text utilities for line spans and indentation

pub mod error;
pub mod output;
pub mod text;
