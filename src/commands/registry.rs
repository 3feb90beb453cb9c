//! Name → handler lookup for slash-style text commands
//!
//! Names are stored lowercase without the leading `/`, which is what
//! [`crate::command_handler::parse_command`] produces.

use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

use super::handler::TextCommandHandler;

/// Command table shared by every dispatcher clone
///
/// One handler is stored under each of its names, so `/question` and
/// `/питання` resolve to the same instance.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    handlers: HashMap<&'static str, Arc<dyn TextCommandHandler>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler under all of its names; a later handler claiming a
    /// taken name replaces the earlier one
    pub fn register(&mut self, handler: Arc<dyn TextCommandHandler>) {
        for name in handler.command_names() {
            if self.handlers.insert(name, Arc::clone(&handler)).is_some() {
                warn!("Command /{name} registered twice, keeping the latest handler");
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn TextCommandHandler>> {
        self.handlers.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
