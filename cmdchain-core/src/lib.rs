pub mod error;

pub mod config;

pub mod cli;

pub mod model {
    pub mod keyword;
    pub use keyword::Keyword;

    pub mod tokenizer;
    pub use tokenizer::Tokenizer;
}

pub mod controller {
    pub mod traits;
    pub use traits::CommandHandler;

    pub mod handler_registry;
    pub use handler_registry::{DispatchOutcome, HandlerRegistry, HandlerStats};

    pub mod handlers;
}

pub mod logging;
pub use logging::{LoggerBuilder, LoggerConfig};

pub use error::{CmdError, CmdResult};

pub use model::{Keyword, Tokenizer};
