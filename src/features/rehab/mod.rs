//! # Feature: Rehabilitation Plan
//!
//! Phase content table and day-number arithmetic behind `/status`.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod phases;

pub use phases::{day_number, get_phase_content, render_status, status_header, Phase};
