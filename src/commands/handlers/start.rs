//! `/start` - subscribe the chat to daily reminders and show the menu

use log::info;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::gateway::{Inbound, Reply};

pub const WELCOME_MESSAGE: &str = "Привіт! 🤖\nЯ допоможу тобі з реабілітацією після операції.\n\
     Натисни /status, щоб отримати план на сьогодні.";

pub struct StartHandler;

impl TextCommandHandler for StartHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["start"]
    }

    fn handle(&self, ctx: &CommandContext, inbound: &Inbound) -> Reply {
        if ctx.recipients.register(inbound.sender) {
            info!(
                "Registered recipient {} for daily reminders ({} total)",
                inbound.sender,
                ctx.recipients.len()
            );
        }
        Reply::plain(WELCOME_MESSAGE).with_menu()
    }
}
