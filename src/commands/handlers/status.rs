//! `/status` - today's rehabilitation plan

use log::debug;

use crate::commands::context::CommandContext;
use crate::commands::handler::TextCommandHandler;
use crate::features::rehab;
use crate::gateway::{Inbound, Reply};

pub struct StatusHandler;

impl TextCommandHandler for StatusHandler {
    fn command_names(&self) -> &'static [&'static str] {
        &["status"]
    }

    fn handle(&self, ctx: &CommandContext, _inbound: &Inbound) -> Reply {
        let day = ctx.day_number();
        debug!("Rendering status for day {day} ({:?})", rehab::Phase::for_day(day));
        Reply::markdown(rehab::render_status(day))
    }
}
