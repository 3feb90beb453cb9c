//! `/question` (`/питання`) - invite a free-text question

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::gateway::{Inbound, Reply};

pub const QUESTION_PROMPT: &str =
    "Напиши своє запитання: наприклад, **«чи можна згинати ногу?»**";

pub struct QuestionHandler;

impl TextCommandHandler for QuestionHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["question", "питання"]
    }

    fn handle(&self, _ctx: &CommandContext, _inbound: &Inbound) -> Reply {
        Reply::markdown(QUESTION_PROMPT)
    }
}
