//! Shared clap helper types for CLI commands.

use clap::ValueEnum;

/// Output format accepted by commands that can emit JSON.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}
