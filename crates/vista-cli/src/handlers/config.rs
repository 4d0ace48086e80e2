//! Config command handler.

use anyhow::Result;
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::commands::ConfigCommand;
use crate::error::CliError;
use crate::presentation::{display_settings, print_json};

/// Execute the config command.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    let settings = match command {
        ConfigCommand::Show => ctx.app().settings().get().await?,
        ConfigCommand::Set(args) => {
            let update = args.into_update();
            if update.is_empty() {
                return Err(CliError::Arguments(
                    "No settings specified. Run 'vista config set --help' for options.".into(),
                )
                .into());
            }
            let updated = ctx.app().settings().update(update).await?;
            if !ctx.json {
                println!("✓ Settings updated.");
            }
            updated
        }
    };

    if ctx.json {
        return print_json(&json!(settings));
    }
    display_settings(&settings);
    Ok(())
}
