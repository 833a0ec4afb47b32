//! Rules command implementation.
//!
//! The `deploylint rules` command lists the built-in lint rules.

use crate::error::Result;
use crate::lint::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
#[derive(Debug, Default)]
pub struct RulesCommand {
    registry: RuleRegistry,
}

impl RulesCommand {
    /// Create a rules command over the built-in registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let width = self
            .registry
            .iter()
            .map(|rule| rule.id().0.len())
            .max()
            .unwrap_or(0);

        for rule in self.registry.iter() {
            ui.message(&format!(
                "{:width$}  {}: {}",
                rule.id().0,
                rule.name(),
                rule.description(),
                width = width
            ));
        }

        Ok(CommandResult::success())
    }
}
