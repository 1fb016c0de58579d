//! Guard CLI - Command line tool for the email form guard.
//!
//! Commands:
//! - `guard check` - Run values through the guard
//! - `guard render` - Render the guarded form markup
//! - `guard config` - Manage configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{CheckArgs, ConfigArgs, RenderArgs};

/// Guard CLI - Check, render and configure the email form guard
#[derive(Parser)]
#[command(name = "guard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run values through the guard and show the resulting message
    Check(CheckArgs),

    /// Render the guarded form markup
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    if let Err(e) = execute(cli, output.clone()) {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Load the context and run the selected command.
fn execute(cli: Cli, output: output::Output) -> Result<()> {
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    match cli.command {
        Commands::Check(args) => commands::check::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
