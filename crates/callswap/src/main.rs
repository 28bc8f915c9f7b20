//! Binary entry point for the callswap CLI.
//!
//! ## Usage
//!
//! ```bash
//! # Toggle the call on line 12 and print the rewritten file
//! callswap toggle --at src/app.py:12
//!
//! # Force multi-line form and rewrite the file in place
//! callswap expand --at src/app.py:12 --apply
//!
//! # Force single-line form, JSON envelope, two-space indent
//! callswap collapse --at src/app.py:12 --json --indent "  "
//! ```

use std::io;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use callswap::cli::{run_rewrite, RewriteOp, RewriteRequest};
use callswap_core::error::CallswapError;
use callswap_core::output::{emit_response, ErrorResponse};

// ============================================================================
// CLI Structure
// ============================================================================

/// Toggle Python call expressions between single-line and multi-line form.
#[derive(Parser, Debug)]
#[command(
    name = "callswap",
    version,
    about = "Toggle Python call expressions between single-line and multi-line form"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Global arguments shared by all subcommands.
#[derive(Args, Debug)]
struct GlobalArgs {
    /// Log level for tracing output.
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Flip the call under the cursor between single-line and multi-line.
    Toggle(RewriteArgs),
    /// Force the call under the cursor into multi-line form.
    Expand(RewriteArgs),
    /// Force the call under the cursor into single-line form.
    Collapse(RewriteArgs),
}

/// Arguments shared by the rewrite subcommands.
#[derive(Args, Debug)]
struct RewriteArgs {
    /// Location in `file:row[:col]` form (row is 1-indexed).
    #[arg(long)]
    at: String,

    /// Rewrite the file in place instead of printing the result.
    #[arg(long)]
    apply: bool,

    /// Emit a JSON envelope instead of plain text.
    #[arg(long)]
    json: bool,

    /// Indentation unit for multi-line rendering.
    #[arg(long, default_value = "    ")]
    indent: String,

    /// Callee name that must stay single-line (repeatable).
    #[arg(long = "single-line-exception", default_values_t = [String::from("super")])]
    single_line_exceptions: Vec<String>,
}

impl RewriteArgs {
    fn into_request(self, op: RewriteOp) -> RewriteRequest {
        RewriteRequest {
            op,
            at: self.at,
            apply: self.apply,
            json: self.json,
            indent: self.indent,
            single_line_exceptions: self.single_line_exceptions,
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.log_level);

    let request = match cli.command {
        Command::Toggle(args) => args.into_request(RewriteOp::Toggle),
        Command::Expand(args) => args.into_request(RewriteOp::Expand),
        Command::Collapse(args) => args.into_request(RewriteOp::Collapse),
    };

    let mut stdout = io::stdout();
    match run_rewrite(&request, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => report_error(&err, request.json),
    }
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn report_error(err: &CallswapError, json: bool) -> ExitCode {
    if json {
        let response = ErrorResponse::from(err);
        // Emission failure leaves only the exit code to report.
        let _ = emit_response(&mut io::stderr(), &response);
    } else {
        eprintln!("error: {}", err);
    }
    ExitCode::from(err.error_code().code())
}
