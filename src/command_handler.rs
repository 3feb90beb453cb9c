//! Inbound message dispatcher
//!
//! Every inbound text gets exactly one reply: a registered `/command` goes to
//! its handler, anything else (unknown commands included) to the keyword
//! responder.

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;
use uuid::Uuid;

use crate::commands::context::CommandContext;
use crate::commands::handlers::create_all_handlers;
use crate::commands::registry::CommandRegistry;
use crate::features::keywords;
use crate::gateway::{Inbound, MessageGateway, Reply};

/// Extract a lowercase command name from `/name[@bot] args...`
pub fn parse_command(text: &str) -> Option<String> {
    let rest = text.trim_start().strip_prefix('/')?;
    let token = rest.split_whitespace().next()?;
    let name = token.split('@').next().unwrap_or(token);
    if name.is_empty() {
        return None;
    }
    Some(name.to_lowercase())
}

#[derive(Clone)]
pub struct CommandHandler {
    context: Arc<CommandContext>,
    registry: CommandRegistry,
}

impl CommandHandler {
    pub fn new(context: CommandContext) -> Self {
        let mut registry = CommandRegistry::new();
        for handler in create_all_handlers() {
            registry.register(handler);
        }
        Self {
            context: Arc::new(context),
            registry,
        }
    }

    /// Produce the reply for one inbound message
    pub fn dispatch(&self, inbound: &Inbound) -> Reply {
        let request_id = Uuid::new_v4();
        info!(
            "[{}] 📥 Message received | Chat: {} | Content: '{}'",
            request_id,
            inbound.sender,
            inbound.text.chars().take(100).collect::<String>()
        );

        if let Some(name) = parse_command(&inbound.text) {
            if let Some(handler) = self.registry.get(&name) {
                debug!("[{request_id}] ⚙️ Dispatching /{name}");
                return handler.handle(&self.context, inbound);
            }
            debug!("[{request_id}] Unknown command /{name}, using keyword answers");
        }

        let day = self.context.day_number();
        debug!(
            "[{request_id}] 🔍 Keyword rule: {:?} (day {day})",
            keywords::matched_rule(&inbound.text)
        );
        Reply::plain(keywords::respond(&inbound.text, day)).replying_to(inbound.message_id)
    }

    /// Dispatch a message and deliver the reply through the gateway
    pub async fn handle_message(&self, gateway: &dyn MessageGateway, inbound: &Inbound) -> Result<()> {
        let reply = self.dispatch(inbound);
        gateway.send(inbound.sender, &reply).await
    }
}
