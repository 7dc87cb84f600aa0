//! Report file writing (`policyocr report ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::utils::{load_batch, write_output};

/// Arguments for `policyocr report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Glyph file to decode (`-` for stdin).
    pub input: PathBuf,
    /// Destination report file (`-` for stdout).
    #[arg(long, default_value = "-")]
    pub out: PathBuf,
}

/// Execute a report command.
pub fn handle(args: ReportArgs) -> Result<()> {
    let batch = load_batch(args.input.as_path())?;
    write_output(&args.out, &batch.report())?;
    if args.out.as_os_str() != "-" {
        println!("Wrote {} records to {}", batch.len(), args.out.display());
    }
    Ok(())
}
