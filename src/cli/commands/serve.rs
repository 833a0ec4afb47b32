//! Serve command implementation.
//!
//! The `deploylint serve` command runs the HTTP lint service until the
//! process is stopped.

use anyhow::Context;

use crate::cli::args::ServeArgs;
use crate::error::{LintError, Result};
use crate::server::{self, ServerConfig};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The serve command implementation.
pub struct ServeCommand {
    args: ServeArgs,
}

impl ServeCommand {
    /// Create a new serve command.
    pub fn new(args: ServeArgs) -> Self {
        Self { args }
    }

    /// Resolve the service settings from arguments and environment.
    pub fn config(&self) -> Result<ServerConfig> {
        ServerConfig::from_args(&self.args)
    }
}

impl Command for ServeCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.config()?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")?;

        runtime.block_on(server::serve(config)).map_err(LintError::Other)?;

        Ok(CommandResult::success())
    }
}
