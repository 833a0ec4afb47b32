//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// deploylint - Line-accurate linting for deployment configuration files.
#[derive(Debug, Parser)]
#[command(name = "deploylint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint YAML or JSON configs, reporting structural or semantic issues
    Check(CheckArgs),

    /// Run the HTTP lint service
    Serve(ServeArgs),

    /// List the built-in lint rules
    Rules,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Configuration files to lint (`-` reads standard input)
    #[arg(required = true, value_name = "CONFIG")]
    pub paths: Vec<PathBuf>,

    /// Treat warnings as fatal
    #[arg(long)]
    pub strict: bool,

    /// Print suggested fixes under each issue
    #[arg(long)]
    pub fix_suggestions: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            strict: false,
            fix_suggestions: false,
            format: OutputFormat::Human,
        }
    }
}

/// Arguments for the `serve` command.
///
/// API keys are read from `CONFIG_LINTER_API_KEY` only.
#[derive(Debug, Clone, clap::Args)]
pub struct ServeArgs {
    /// Port to listen on [default: $LINTER_SERVER_PORT or 8080]
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Directory of static UI assets served for unmatched routes
    #[arg(long, env = "STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
