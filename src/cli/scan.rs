//! Decode-and-print workflow (`policyocr scan ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use policyocr::ReportSummary;

use crate::cli::common::FormatArg;
use crate::cli::utils::load_batch;

/// Arguments for `policyocr scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Glyph file to decode (`-` for stdin).
    pub input: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

/// Execute a scan command.
pub fn handle(args: ScanArgs) -> Result<()> {
    let batch = load_batch(args.input.as_path())?;
    match args.format {
        FormatArg::Text => print!("{}", batch.report()),
        FormatArg::Json => {
            let summary = ReportSummary::from_batch(&batch);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}
