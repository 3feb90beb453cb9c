//! # Feature: Keyword Answers
//!
//! First-match keyword rules for free-text questions.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod responder;

pub use responder::{matched_rule, respond, FALLBACK_ANSWER};
