// cmdchain-core/src/controller/handlers/basic_command_handler.rs
// Informational commands: help, version, about

use std::io::Write;

use tracing::{info, instrument, trace};

use crate::controller::traits::CommandHandler;
use crate::error::CmdResult;
use crate::model::Tokenizer;

pub const BASIC_COMMAND_MESSAGE: &str = "Basic command!";

/// Accepts when the current token is `help`, `version` or `about`.
#[derive(Debug, Default, Clone)]
pub struct BasicCommandHandler;

impl BasicCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

impl CommandHandler for BasicCommandHandler {
    fn can_handle(&self, tokens: &Tokenizer) -> bool {
        match tokens.current() {
            Ok(keyword) => keyword.is_basic(),
            Err(e) => {
                trace!("Basic handler skipped: {}", e);
                false
            }
        }
    }

    #[instrument(level = "debug", name = "basic_command", skip_all)]
    fn perform(&mut self, tokens: &Tokenizer, out: &mut dyn Write) -> CmdResult<bool> {
        let keyword = tokens.current()?;
        info!(marker = "BASIC_COMMAND", %keyword, "Running basic command");

        writeln!(out, "{BASIC_COMMAND_MESSAGE}")?;
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "basic"
    }
}
