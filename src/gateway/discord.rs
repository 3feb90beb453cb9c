//! Discord implementation of the messaging gateway
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Channel sends, slash command replies, menu buttons

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use serenity::http::Http;
use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::model::id::{ChannelId, MessageId};
use serenity::prelude::Context;
use std::sync::Arc;

use super::{Inbound, MessageGateway, RecipientId, Reply, TextFormat};
use crate::command_handler::CommandHandler;
use crate::core::response::{chunk_for_message, escape_markdown};
use crate::message_components::main_menu;

/// Render a reply into message-sized chunks
pub fn render_chunks(reply: &Reply) -> Vec<String> {
    let text = match reply.format {
        TextFormat::Plain => escape_markdown(&reply.text),
        TextFormat::Markdown => reply.text.clone(),
    };
    chunk_for_message(&text)
}

/// Sends replies into Discord channels (guild channels and DMs alike)
#[derive(Clone)]
pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MessageGateway for DiscordGateway {
    async fn send(&self, recipient: RecipientId, reply: &Reply) -> Result<()> {
        let channel = ChannelId(recipient.0);
        let chunks = render_chunks(reply);
        let last = chunks.len().saturating_sub(1);

        for (idx, chunk) in chunks.iter().enumerate() {
            channel
                .send_message(&self.http, |m| {
                    m.content(chunk);
                    if idx == 0 {
                        if let Some(message_id) = reply.in_reply_to {
                            m.reference_message((channel, MessageId(message_id)));
                        }
                    }
                    if idx == last && reply.menu {
                        m.set_components(main_menu());
                    }
                    m
                })
                .await?;
        }

        debug!("📤 Sent {} chunk(s) to channel {}", chunks.len(), recipient);
        Ok(())
    }
}

/// Post the chunks that did not fit into an interaction response
///
/// The menu, if requested, rides on the final chunk.
pub(crate) async fn send_remaining_chunks(
    http: &Http,
    channel: ChannelId,
    chunks: &[String],
    menu: bool,
) -> Result<()> {
    let last = chunks.len().saturating_sub(1);
    for (idx, chunk) in chunks.iter().enumerate() {
        channel
            .send_message(http, |m| {
                m.content(chunk);
                if idx == last && menu {
                    m.set_components(main_menu());
                }
                m
            })
            .await?;
    }
    Ok(())
}

/// Route a slash command through the text dispatcher and answer it
pub async fn handle_slash_command(
    handler: &CommandHandler,
    ctx: &Context,
    command: &ApplicationCommandInteraction,
) -> Result<()> {
    info!(
        "Slash command /{} from user {} in channel {}",
        command.data.name, command.user.id, command.channel_id
    );

    let inbound = Inbound::new(
        RecipientId(command.channel_id.0),
        format!("/{}", command.data.name),
    );
    let reply = handler.dispatch(&inbound);
    let chunks = render_chunks(&reply);
    let Some((first, rest)) = chunks.split_first() else {
        return Ok(());
    };

    command
        .create_interaction_response(&ctx.http, |response| {
            response
                .kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|data| {
                    data.content(first);
                    if reply.menu && rest.is_empty() {
                        data.set_components(main_menu());
                    }
                    data
                })
        })
        .await?;

    send_remaining_chunks(&ctx.http, command.channel_id, rest, reply.menu).await
}
