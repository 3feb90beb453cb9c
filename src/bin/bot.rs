use anyhow::Result;
use dotenvy::dotenv;
use log::{error, info};
use serenity::async_trait;
use serenity::model::application::interaction::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;

use rehab_bot::commands::{
    register_global_commands, register_guild_commands, CommandContext, CommandHandler,
};
use rehab_bot::core::{Config, SystemClock};
use rehab_bot::features::reminders::{watch_scheduler, ReminderScheduler};
use rehab_bot::features::RecipientRegistry;
use rehab_bot::gateway::discord::handle_slash_command;
use rehab_bot::gateway::{DiscordGateway, Inbound, RecipientId};
use rehab_bot::message_components::MessageComponentHandler;

struct Handler {
    command_handler: Arc<CommandHandler>,
    component_handler: Arc<MessageComponentHandler>,
    guild_id: Option<GuildId>,
}

impl Handler {
    fn new(
        command_handler: CommandHandler,
        component_handler: MessageComponentHandler,
        guild_id: Option<GuildId>,
    ) -> Self {
        Handler {
            command_handler: Arc::new(command_handler),
            component_handler: Arc::new(component_handler),
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot || msg.content.trim().is_empty() {
            return;
        }

        let inbound = Inbound::new(RecipientId(msg.channel_id.0), msg.content.clone())
            .with_message_id(msg.id.0);
        let gateway = DiscordGateway::new(ctx.http.clone());

        if let Err(e) = self.command_handler.handle_message(&gateway, &inbound).await {
            error!("Error handling message: {e}");
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());

        // Guild commands update instantly; global ones can take up to an hour
        if let Some(guild_id) = self.guild_id {
            info!("🔧 Development mode: Registering commands for guild {guild_id}");
            if let Err(e) = register_guild_commands(&ctx, guild_id).await {
                error!("❌ Failed to register guild slash commands: {e}");
            }
        } else {
            info!("🌍 Production mode: Registering commands globally");
            if let Err(e) = register_global_commands(&ctx).await {
                error!("❌ Failed to register global slash commands: {e}");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                if let Err(e) = handle_slash_command(&self.command_handler, &ctx, &command).await {
                    error!(
                        "Error handling slash command '{}': {}",
                        command.data.name, e
                    );
                }
            }
            Interaction::MessageComponent(component) => {
                if let Err(e) = self
                    .component_handler
                    .handle_component_interaction(&ctx, &component)
                    .await
                {
                    error!(
                        "Error handling component interaction '{}': {}",
                        component.data.custom_id, e
                    );
                }
            }
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Бот запущено...");
    info!(
        "Surgery date: {} | Daily reminder at {}",
        config.surgery_date,
        config.reminder_time.format("%H:%M")
    );

    let recipients = RecipientRegistry::new();
    let clock = Arc::new(SystemClock);

    let context = CommandContext::new(recipients.clone(), clock.clone(), config.surgery_date);
    let command_handler = CommandHandler::new(context);
    let component_handler = MessageComponentHandler::new(command_handler.clone());

    // Guild-scoped command registration for development mode
    let guild_id = config.discord_guild_id.map(GuildId);

    let handler = Handler::new(command_handler, component_handler, guild_id);

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    // Start the reminder scheduler
    let gateway = Arc::new(DiscordGateway::new(client.cache_and_http.http.clone()));
    let scheduler = ReminderScheduler::new(
        recipients,
        gateway,
        clock,
        config.reminder_time,
        config.reminder_poll_interval,
    );
    tokio::spawn(watch_scheduler(scheduler.start()));

    info!("Establishing WebSocket connection to Discord gateway...");
    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
