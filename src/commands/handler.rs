//! Text command handler trait
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation for `/command` dispatch

use super::context::CommandContext;
use crate::gateway::{Inbound, Reply};

/// Trait for `/command` handlers
///
/// Each handler answers one or more command names. Handlers are registered
/// with a CommandRegistry and dispatched by name. Handling is infallible:
/// every command produces exactly one reply.
///
/// # Example
///
/// ```ignore
/// pub struct PingHandler;
///
/// impl TextCommandHandler for PingHandler {
///     fn command_names(&self) -> &'static [&'static str] {
///         &["ping"]
///     }
///
///     fn handle(&self, _ctx: &CommandContext, _inbound: &Inbound) -> Reply {
///         Reply::plain("pong")
///     }
/// }
/// ```
pub trait TextCommandHandler: Send + Sync {
    /// Command name(s) this handler processes, lowercase, without the slash
    fn command_names(&self) -> &'static [&'static str];

    /// Produce the reply for an inbound command
    fn handle(&self, ctx: &CommandContext, inbound: &Inbound) -> Reply;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe (can be used with dyn)
    fn _assert_object_safe(_: &dyn TextCommandHandler) {}
}
