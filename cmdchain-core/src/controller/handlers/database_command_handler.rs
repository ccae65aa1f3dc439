// cmdchain-core/src/controller/handlers/database_command_handler.rs
// Commands whose object is a database: `create database`, `drop database`

use std::io::Write;

use tracing::{info, instrument};

use crate::controller::traits::CommandHandler;
use crate::error::CmdResult;
use crate::model::{Keyword, Tokenizer};

pub const DATABASE_COMMAND_MESSAGE: &str = "Database command!";

/// Accepts when the token after the cursor is `database`.
#[derive(Debug, Default, Clone)]
pub struct DatabaseCommandHandler;

impl DatabaseCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

impl CommandHandler for DatabaseCommandHandler {
    fn can_handle(&self, tokens: &Tokenizer) -> bool {
        tokens.peek_equals(Keyword::Database)
    }

    #[instrument(level = "debug", name = "database_command", skip_all)]
    fn perform(&mut self, tokens: &Tokenizer, out: &mut dyn Write) -> CmdResult<bool> {
        let verb = tokens.current()?;
        info!(marker = "DATABASE_COMMAND", %verb, "Running database command");

        writeln!(out, "{DATABASE_COMMAND_MESSAGE}")?;
        Ok(true)
    }

    fn name(&self) -> &'static str {
        "database"
    }
}
