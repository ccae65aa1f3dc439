pub mod basic_command_handler;
pub mod database_command_handler;

pub use basic_command_handler::BasicCommandHandler;
pub use database_command_handler::DatabaseCommandHandler;
