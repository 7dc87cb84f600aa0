//! Command-line interface wiring for the `policyocr` binary.
//!
//! This module owns the clap definitions and delegates execution to
//! specialized submodules that encapsulate each command family.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod audit;
pub mod check;
pub mod common;
pub mod report;
pub mod scan;
pub mod show;
pub mod utils;

/// Parsed CLI entrypoint for the `policyocr` binary.
#[derive(Parser, Debug)]
#[command(
    name = "policyocr",
    version,
    about = "Decode seven-segment policy number files and report their validity"
)]
pub struct Cli {
    /// Top-level command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// High-level commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    Scan(scan::ScanArgs),
    Report(report::ReportArgs),
    Check(check::CheckArgs),
    Show(show::ShowArgs),
    #[command(subcommand)]
    Audit(audit::AuditCommand),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Scan(args) => scan::handle(args),
        Command::Report(args) => report::handle(args),
        Command::Check(args) => check::handle(args),
        Command::Show(args) => show::handle(args),
        Command::Audit(cmd) => audit::handle(cmd),
    }
}
