// Core layer - config, clock and outbound text helpers
pub mod core;

// Features layer - rehab plan, keyword answers, recipients, reminders
pub mod features;

// Gateway layer - chat platform boundary
pub mod gateway;

// UI components
pub mod message_components;

// Application layer
pub mod command_handler;
pub mod commands;

pub use crate::core::Config;

pub use features::{
    // Keyword answers
    keywords::respond,
    // Recipients
    RecipientId, RecipientRegistry,
    // Rehab plan
    rehab::{get_phase_content, render_status},
    // Reminders
    ReminderScheduler,
};

pub use gateway::{DiscordGateway, Inbound, MessageGateway, Reply, TextFormat};
