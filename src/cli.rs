//! Command-line argument parsing for the hotkeys tool
//!
//! Supports:
//! - Parsing and canonicalizing key-combination strings
//! - Formatting raw key codes
//! - Listing known actions and the active bindings
//! - Resolving a key press the way a running host would

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and test hotkey configuration
#[derive(Parser, Debug)]
#[command(name = "hotkeys", version, about = "Inspect and test hotkey configuration")]
pub struct CliArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where bindings come from
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Hotkey file layered over the defaults and the user file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore the embedded default bindings
    #[arg(long, global = true)]
    pub no_defaults: bool,

    /// Ignore the user hotkey file
    #[arg(long, global = true)]
    pub no_user: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Parse key-combination strings and print their codes
    Parse {
        /// Key strings such as "Ctrl+Shift+F1"
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Format raw key codes (decimal or 0x-prefixed hex)
    Format {
        #[arg(required = true, value_parser = parse_code)]
        codes: Vec<u32>,
    },
    /// List every known action
    Actions,
    /// List the bindings of one namespace
    Bindings {
        /// Show global instead of local bindings
        #[arg(short, long)]
        global: bool,
    },
    /// Resolve a key press to an action
    Resolve {
        /// Key string to press
        key: String,
        /// Deliver the press as a global key
        #[arg(short, long)]
        global: bool,
    },
    /// Print the embedded default hotkeys
    Defaults,
}

/// Parse a key code given as decimal or `0x` hex
pub fn parse_code(text: &str) -> Result<u32, String> {
    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid key code \"{}\": {}", text, e))
}
