//! Shared context for command handlers
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Recipient registry, clock and surgery date

use chrono::NaiveDate;
use std::sync::Arc;

use crate::core::clock::Clock;
use crate::features::recipients::RecipientRegistry;
use crate::features::rehab;

/// Shared context for all command handlers
///
/// Contains the state every handler may need:
/// - RecipientRegistry shared with the reminder scheduler
/// - Clock for computing today's day number
/// - The surgery date day numbers count from
#[derive(Clone)]
pub struct CommandContext {
    pub recipients: RecipientRegistry,
    pub clock: Arc<dyn Clock>,
    pub surgery_date: NaiveDate,
}

impl CommandContext {
    pub fn new(recipients: RecipientRegistry, clock: Arc<dyn Clock>, surgery_date: NaiveDate) -> Self {
        Self {
            recipients,
            clock,
            surgery_date,
        }
    }

    /// Today's day number relative to the surgery date
    pub fn day_number(&self) -> i64 {
        rehab::day_number(self.surgery_date, self.clock.today())
    }
}
