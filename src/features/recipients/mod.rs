//! # Feature: Recipient Registry
//!
//! Process-wide set of chats that issued `start` and receive the daily
//! reminder. Uses DashSet for lock-free concurrent access from the message
//! loop and the reminder scheduler. In-memory only; restarting the bot
//! forgets every recipient.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use dashmap::DashSet;
use std::fmt;
use std::sync::Arc;

/// Opaque id of a chat that can receive messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipientId(pub u64);

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cloneable handle to the shared recipient set
#[derive(Clone, Default)]
pub struct RecipientRegistry {
    recipients: Arc<DashSet<RecipientId>>,
}

impl RecipientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipient; returns true if it was not registered before
    pub fn register(&self, id: RecipientId) -> bool {
        self.recipients.insert(id)
    }

    pub fn contains(&self, id: RecipientId) -> bool {
        self.recipients.contains(&id)
    }

    /// Snapshot of every registered recipient, sorted for stable fan-out order
    pub fn all_recipients(&self) -> Vec<RecipientId> {
        let mut ids: Vec<RecipientId> = self.recipients.iter().map(|entry| *entry).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}
