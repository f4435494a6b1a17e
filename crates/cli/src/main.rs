//! vjoyctl - Virtual Joystick Plugin CLI
//!
//! Inspect plugin capability descriptors, probe the serial DualShock adapter
//! and dry-run plugins through a host-style tick loop.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::*;

#[derive(Parser)]
#[command(name = "vjoyctl")]
#[command(about = "Virtual joystick plugin CLI - inspect, probe and dry-run plugins")]
#[command(version)]
#[command(long_about = "
vjoyctl drives virtual joystick plugins outside the host runtime.
It prints capability descriptors, polls the serial DualShock adapter once,
and runs a plugin's think loop at the host tick rate, printing each event
batch in wire form.

Use --json flag for machine-readable output suitable for scripting.
")]
struct Cli {
    /// Output format (human-readable or JSON)
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ~/.config/vjoy/plugin.json)
    #[arg(long, global = true, env = "VJOYCTL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the capability descriptor a plugin registers
    Caps {
        #[arg(long, value_enum, default_value_t = PluginKind::Psx)]
        plugin: PluginKind,
    },

    /// Poll the serial adapter once and print the decoded frame
    Probe,

    /// Run a plugin's think loop without a host
    Run {
        #[arg(long, value_enum, default_value_t = PluginKind::Psx)]
        plugin: PluginKind,
        /// Stop after this many ticks
        #[arg(long)]
        ticks: Option<u64>,
    },

    /// Configuration file management
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("vjoyctl={log_level},vjoy_plugins={log_level}").into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(error::exit_code(&e))
        }
    }
}

fn execute_command(cli: &Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Caps { plugin } => commands::caps::execute(*plugin, cli.json),
        Commands::Probe => {
            let config = load_config(config_path)?;
            commands::probe::execute(&config, cli.json)
        }
        Commands::Run { plugin, ticks } => {
            let config = load_config(config_path)?;
            commands::run::execute(&config, *plugin, *ticks, cli.json)
        }
        Commands::Config(cmd) => commands::config::execute(cmd, config_path, cli.json),
    }
}
