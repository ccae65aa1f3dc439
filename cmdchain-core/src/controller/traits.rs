use std::io::Write;

use crate::error::CmdResult;
use crate::model::Tokenizer;

/// A link in the command chain.
pub trait CommandHandler: Send + Sync {
    /// Check if this handler accepts the current sequence state.
    ///
    /// Must be free of side effects; the registry may call it without
    /// following up with `perform`.
    fn can_handle(&self, tokens: &Tokenizer) -> bool;

    /// Run the handler's action, writing any output to `out`.
    ///
    /// Returns whether the action succeeded.
    fn perform(&mut self, tokens: &Tokenizer, out: &mut dyn Write) -> CmdResult<bool>;

    /// Handler name for diagnostics and enable/disable lookups.
    fn name(&self) -> &'static str;
}
