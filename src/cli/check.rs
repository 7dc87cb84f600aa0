//! Checksum classification for bare digit strings (`policyocr check ...`).

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use policyocr::PolicyNumber;

use crate::cli::utils::read_text_arg;

/// Arguments for `policyocr check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Policy numbers to classify (9 characters of digits or `?`).
    pub numbers: Vec<String>,
    /// Read numbers from a file instead, one per line (`-` for stdin).
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
}

/// Execute a check command.
pub fn handle(args: CheckArgs) -> Result<()> {
    let numbers = if args.numbers.is_empty() {
        read_text_arg(None, args.from)?
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        args.numbers
    };

    for raw in numbers {
        let policy = PolicyNumber::new(raw, None)?;
        println!("{}", policy.report_line());
    }
    Ok(())
}
