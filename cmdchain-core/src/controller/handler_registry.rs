//! HandlerRegistry: the ordered command chain
//!
//! Owns every registered handler and walks them in registration order:
//! - First enabled handler whose `can_handle` accepts the sequence performs
//! - Registration order is the only priority
//! - Empty registry and "nobody accepted" are distinct outcomes
//! - Per-handler dispatch counts and timings

use std::io::Write;
use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use super::{
    handlers::{BasicCommandHandler, DatabaseCommandHandler},
    traits::CommandHandler,
};

use crate::config::Config;
use crate::error::CmdResult;
use crate::model::Tokenizer;

/// Result of walking the chain once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler accepted the sequence and performed its action.
    Matched {
        handler: &'static str,
        succeeded: bool,
    },

    /// Handlers are registered but none accepted the sequence.
    NoMatch,

    /// No handler has been registered.
    EmptyRegistry,
}

impl DispatchOutcome {
    /// True iff a handler accepted and its action succeeded.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(
            self,
            DispatchOutcome::Matched {
                succeeded: true,
                ..
            }
        )
    }

    /// Name of the handler that accepted, if any.
    #[must_use]
    pub fn handler(&self) -> Option<&'static str> {
        match *self {
            DispatchOutcome::Matched { handler, .. } => Some(handler),
            _ => None,
        }
    }
}

/// Handler registration metadata
#[derive(Debug, Default)]
pub struct HandlerRegistration {
    pub is_enabled: bool,
    pub dispatch_count: u64,
    pub total_processing_time: u64, // nanoseconds
}

/// Handler performance statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerStats {
    pub name: &'static str,
    pub is_enabled: bool,
    pub dispatch_count: u64,
    pub average_processing_time_ns: u64,
}

/// Entry for each registered handler
struct HandlerEntry {
    handler: Box<dyn CommandHandler>,
    metadata: HandlerRegistration,
}

/// Ordered handler chain, built once and passed to whoever dispatches.
pub struct HandlerRegistry {
    // Registration order is dispatch order
    handlers: Vec<HandlerEntry>,
}

impl HandlerRegistry {
    /// Create new empty handler registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Create registry with the built-in handlers: basic first, then database
    pub fn with_default_handlers() -> Self {
        let mut registry = Self::new();

        registry.register::<BasicCommandHandler>();
        registry.register::<DatabaseCommandHandler>();

        info!(
            "HandlerRegistry initialized with {} handlers",
            registry.handlers.len()
        );

        registry
    }

    /// Default handlers with the config's `disabled_handlers` switched off.
    ///
    /// Names that match no registered handler are logged and ignored.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::with_default_handlers();

        for name in &config.disabled_handlers {
            if !registry.set_handler_enabled(name, false) {
                warn!("Config disables unknown handler {:?}", name);
            }
        }

        registry
    }

    /// Construct a fresh `H` and append it to the chain
    pub fn register<H>(&mut self)
    where
        H: CommandHandler + Default + 'static,
    {
        self.register_handler(Box::new(H::default()));
    }

    /// Append an already built handler to the chain
    pub fn register_handler(&mut self, handler: Box<dyn CommandHandler>) {
        let name = handler.name();

        if self.handlers.iter().any(|e| e.handler.name() == name) {
            warn!("Handler name {:?} registered more than once", name);
        }

        self.handlers.push(HandlerEntry {
            handler,
            metadata: HandlerRegistration {
                is_enabled: true,
                ..HandlerRegistration::default()
            },
        });

        info!(position = self.handlers.len() - 1, "Registered {} handler", name);
    }

    /// Walk the chain and let the first accepting handler perform.
    #[instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
    pub fn dispatch(
        &mut self,
        tokens: &Tokenizer,
        out: &mut dyn Write,
    ) -> CmdResult<DispatchOutcome> {
        if self.handlers.is_empty() {
            warn!("Dispatch on empty handler registry");
            return Ok(DispatchOutcome::EmptyRegistry);
        }

        let Some(entry) = self
            .handlers
            .iter_mut()
            .find(|entry| entry.metadata.is_enabled && entry.handler.can_handle(tokens))
        else {
            warn!(input = ?tokens.keywords(), "No handler accepted input");
            return Ok(DispatchOutcome::NoMatch);
        };

        let name = entry.handler.name();
        let process_start = Instant::now();

        debug!("Handler {} accepted input", name);

        // Failed performs are counted too
        let result = entry.handler.perform(tokens, out);
        let elapsed = process_start.elapsed().as_nanos() as u64;

        entry.metadata.dispatch_count += 1;
        entry.metadata.total_processing_time += elapsed;

        let succeeded = result?;

        debug!(
            "Handler {} finished in {:?} (succeeded: {})",
            name,
            process_start.elapsed(),
            succeeded
        );

        Ok(DispatchOutcome::Matched {
            handler: name,
            succeeded,
        })
    }

    /// Locate the handler that would accept `tokens` without performing it
    pub fn find(&self, tokens: &Tokenizer) -> Option<&dyn CommandHandler> {
        self.handlers
            .iter()
            .find(|entry| entry.metadata.is_enabled && entry.handler.can_handle(tokens))
            .map(|entry| entry.handler.as_ref())
    }

    /// Enable/disable every handler registered under `name`.
    ///
    /// Returns `false` if no such handler.
    pub fn set_handler_enabled(&mut self, name: &str, enabled: bool) -> bool {
        let mut toggled = 0usize;

        for entry in self
            .handlers
            .iter_mut()
            .filter(|e| e.handler.name() == name)
        {
            entry.metadata.is_enabled = enabled;
            toggled += 1;
        }

        if toggled == 0 {
            warn!("Cannot toggle unknown handler {:?}", name);
            return false;
        }

        info!(
            toggled,
            "Handler {} {}",
            name,
            if enabled { "enabled" } else { "disabled" }
        );

        true
    }

    /// Get performance report for all handlers, in dispatch order
    pub fn performance_report(&self) -> Vec<HandlerStats> {
        self.handlers
            .iter()
            .map(|entry| {
                let dispatch_count = entry.metadata.dispatch_count;

                let avg_time = if dispatch_count > 0 {
                    entry.metadata.total_processing_time / dispatch_count
                } else {
                    0
                };

                HandlerStats {
                    name: entry.handler.name(),
                    is_enabled: entry.metadata.is_enabled,
                    dispatch_count,
                    average_processing_time_ns: avg_time,
                }
            })
            .collect()
    }

    /// Handler names in dispatch order
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.handler.name()).collect()
    }

    /// Get handler count
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Check if handlers are registered
    pub fn has_handlers(&self) -> bool {
        !self.handlers.is_empty()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.handler_names())
            .finish()
    }
}
