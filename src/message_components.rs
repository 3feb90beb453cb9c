//! Main menu buttons and their interaction handling
//!
//! The menu mirrors a reply keyboard: each button stands for a line of text
//! the user could have typed, and pressing it goes through the same
//! dispatcher as a typed message.

use anyhow::Result;
use log::{info, warn};
use serenity::builder::CreateComponents;
use serenity::model::application::component::ButtonStyle;
use serenity::model::application::interaction::message_component::MessageComponentInteraction;
use serenity::model::application::interaction::InteractionResponseType;
use serenity::prelude::Context;

use crate::command_handler::CommandHandler;
use crate::gateway::discord::{render_chunks, send_remaining_chunks};
use crate::gateway::{Inbound, RecipientId};

pub const MENU_STATUS_ID: &str = "menu_status";
pub const MENU_QUESTION_ID: &str = "menu_question";
pub const MENU_CONTACT_ID: &str = "menu_contact";

/// Button layout: (custom id, label, text sent on press), one slice per row
const MENU_ROWS: &[&[(&str, &str, &str)]] = &[
    &[
        (MENU_STATUS_ID, "/status", "/status"),
        (MENU_QUESTION_ID, "/питання", "/питання"),
    ],
    &[(
        MENU_CONTACT_ID,
        "ℹ️ Контакт з реабілітологом",
        "ℹ️ Контакт з реабілітологом",
    )],
];

/// Build the main menu attached to the welcome message
pub fn main_menu() -> CreateComponents {
    let mut components = CreateComponents::default();
    for row_buttons in MENU_ROWS {
        components.create_action_row(|row| {
            for (custom_id, label, _) in row_buttons.iter() {
                row.create_button(|btn| {
                    btn.custom_id(*custom_id)
                        .label(*label)
                        .style(ButtonStyle::Secondary)
                });
            }
            row
        });
    }
    components
}

/// Text a menu button stands for
pub fn menu_button_text(custom_id: &str) -> Option<&'static str> {
    MENU_ROWS
        .iter()
        .flat_map(|row| row.iter())
        .find(|(id, _, _)| *id == custom_id)
        .map(|(_, _, text)| *text)
}

/// Handler for menu button presses
pub struct MessageComponentHandler {
    command_handler: CommandHandler,
}

impl MessageComponentHandler {
    pub fn new(command_handler: CommandHandler) -> Self {
        Self { command_handler }
    }

    pub async fn handle_component_interaction(
        &self,
        ctx: &Context,
        interaction: &MessageComponentInteraction,
    ) -> Result<()> {
        let custom_id = &interaction.data.custom_id;
        info!(
            "Processing component interaction: {custom_id} from user: {}",
            interaction.user.id
        );

        let Some(text) = menu_button_text(custom_id) else {
            warn!("Unknown component id: {custom_id}");
            interaction
                .create_interaction_response(&ctx.http, |response| {
                    response
                        .kind(InteractionResponseType::ChannelMessageWithSource)
                        .interaction_response_data(|message| {
                            message.content("Unknown component interaction.")
                        })
                })
                .await?;
            return Ok(());
        };

        let inbound = Inbound::new(RecipientId(interaction.channel_id.0), text);
        let reply = self.command_handler.dispatch(&inbound);
        let chunks = render_chunks(&reply);
        let Some((first, rest)) = chunks.split_first() else {
            return Ok(());
        };

        interaction
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

        send_remaining_chunks(&ctx.http, interaction.channel_id, rest, reply.menu).await
    }
}
