//! Glyph block display (`policyocr show ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::cli::utils::load_batch;

/// Arguments for `policyocr show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Glyph file to display (`-` for stdin).
    pub input: PathBuf,
}

/// Execute a show command.
pub fn handle(args: ShowArgs) -> Result<()> {
    let batch = load_batch(args.input.as_path())?;
    for record in &batch.records {
        // Batch-decoded records always retain their entry.
        if let Some(block) = record.render() {
            print!("{}", block);
        }
        println!("=> {}", record.report_line());
    }
    Ok(())
}
