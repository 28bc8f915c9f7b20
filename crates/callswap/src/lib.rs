//! Library surface of the callswap CLI.
//!
//! The binary in `main.rs` parses arguments and hands a
//! [`cli::RewriteRequest`] to [`cli::run_rewrite`]; keeping the logic here
//! makes the command driveable from tests and other hosts without
//! spawning a process.

pub mod cli;
