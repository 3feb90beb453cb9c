//! # Core Module
//!
//! Configuration, time source and outbound text helpers shared by every
//! feature.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod clock;
pub mod config;
pub mod response;

pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use response::{chunk_for_message, chunk_text, escape_markdown, MESSAGE_LIMIT};
