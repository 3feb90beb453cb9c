//! # Messaging Gateway
//!
//! Narrow boundary between the bot's logic and the chat platform. Inbound
//! traffic arrives as [`Inbound`]; everything the bot says leaves as a
//! [`Reply`] through a [`MessageGateway`].
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod discord;

use anyhow::Result;
use async_trait::async_trait;

pub use crate::features::recipients::RecipientId;
pub use discord::DiscordGateway;

/// How reply text should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    /// Rendered literally; markup characters are escaped
    Plain,
    /// Bold/italic emphasis is honoured
    Markdown,
}

/// One outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    /// Attach the main menu keyboard
    pub menu: bool,
    /// Platform message id to quote
    pub in_reply_to: Option<u64>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            menu: false,
            in_reply_to: None,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            format: TextFormat::Markdown,
            ..Self::plain(text)
        }
    }

    pub fn with_menu(mut self) -> Self {
        self.menu = true;
        self
    }

    pub fn replying_to(mut self, message_id: Option<u64>) -> Self {
        self.in_reply_to = message_id;
        self
    }
}

/// One inbound text message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    /// Chat the message came from; replies go back here
    pub sender: RecipientId,
    pub text: String,
    /// Platform message id, absent for button presses and slash commands
    pub message_id: Option<u64>,
}

impl Inbound {
    pub fn new(sender: RecipientId, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            message_id: None,
        }
    }

    pub fn with_message_id(mut self, message_id: u64) -> Self {
        self.message_id = Some(message_id);
        self
    }
}

/// Outbound side of the chat platform
#[async_trait]
pub trait MessageGateway: Send + Sync {
    async fn send(&self, recipient: RecipientId, reply: &Reply) -> Result<()>;
}
