//! Audit and hashing commands (`policyocr audit ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::cli::utils::load_batch;

/// Audit subcommands.
#[derive(Subcommand, Debug)]
pub enum AuditCommand {
    /// Compute SHA-256 hash over decoded batch content.
    Hash(AuditHashArgs),
}

/// Arguments for `policyocr audit hash`.
#[derive(Args, Debug)]
pub struct AuditHashArgs {
    /// Glyph file to hash (`-` for stdin).
    pub input: PathBuf,
}

/// Execute an audit command.
pub fn handle(command: AuditCommand) -> Result<()> {
    match command {
        AuditCommand::Hash(args) => hash(args),
    }
}

fn hash(args: AuditHashArgs) -> Result<()> {
    let batch = load_batch(args.input.as_path())?;
    println!("{}", batch.hash());
    Ok(())
}
