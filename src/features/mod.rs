//! # Features
//!
//! Domain features of the rehabilitation bot.

pub mod keywords;
pub mod recipients;
pub mod rehab;
pub mod reminders;

pub use recipients::{RecipientId, RecipientRegistry};
pub use reminders::ReminderScheduler;
