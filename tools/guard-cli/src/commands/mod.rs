//! CLI command implementations.

pub mod check;
pub mod config;
pub mod render;

use clap::{Args, Subcommand};

/// Arguments for the check command.
#[derive(Args)]
pub struct CheckArgs {
    /// Field values to submit (use "" for an empty field).
    #[arg(required = true)]
    pub values: Vec<String>,

    /// Submit all values to one message surface in order, as on a single page.
    #[arg(long)]
    pub sequence: bool,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Write the markup to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Email field placeholder.
    #[arg(long)]
    pub placeholder: Option<String>,

    /// Submit button label.
    #[arg(long)]
    pub button: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
