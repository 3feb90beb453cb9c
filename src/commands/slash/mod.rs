//! # Slash Commands (/)
//!
//! Discord-native definitions for the text commands, so `/start`, `/status`
//! and `/question` show up in the client's command picker. Invocations are
//! routed through the same dispatcher as typed text.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use anyhow::Result;
use log::info;
use serenity::builder::CreateApplicationCommand;
use serenity::model::application::command::Command;
use serenity::model::id::GuildId;
use serenity::prelude::Context;

/// (name, description) of every slash command
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("start", "Підписатися на щоденні нагадування та відкрити меню"),
    ("status", "План реабілітації на сьогодні"),
    ("question", "Поставити запитання про реабілітацію"),
];

/// Creates all slash command definitions
pub fn create_slash_commands() -> Vec<CreateApplicationCommand> {
    SLASH_COMMANDS
        .iter()
        .map(|(name, description)| {
            let mut command = CreateApplicationCommand::default();
            command.name(*name).description(*description);
            command
        })
        .collect()
}

/// Registers all slash commands globally
pub async fn register_global_commands(ctx: &Context) -> Result<()> {
    let slash_commands = create_slash_commands();
    let count = slash_commands.len();

    Command::set_global_application_commands(&ctx.http, |commands| {
        for command in slash_commands {
            commands.add_application_command(command);
        }
        commands
    })
    .await?;

    info!("Global slash commands registered successfully ({count} commands)");
    Ok(())
}

/// Registers all slash commands for a specific guild (faster for testing)
pub async fn register_guild_commands(ctx: &Context, guild_id: GuildId) -> Result<()> {
    let slash_commands = create_slash_commands();
    let count = slash_commands.len();

    guild_id
        .set_application_commands(&ctx.http, |commands| {
            for command in slash_commands {
                commands.add_application_command(command);
            }
            commands
        })
        .await?;

    info!("Guild slash commands registered for {guild_id} ({count} commands)");
    Ok(())
}
