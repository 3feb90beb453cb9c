//! # Reminders Feature
//!
//! Daily reminder broadcast to every registered recipient.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod scheduler;

pub use scheduler::{
    broadcast, watch_scheduler, BroadcastReport, DailyTrigger, ReminderScheduler, DAILY_REMINDER,
};
