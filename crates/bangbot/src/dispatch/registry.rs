//! Name-keyed table of command handlers.
//!
//! The registry is shared between the dispatcher and anything that lists
//! commands (the `help` command). Registration and removal are driven by the
//! host and may happen while messages are being dispatched, so the table sits
//! behind a lock; lookups clone the handler's `Arc` and release it before the
//! handler runs.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::command_line::is_valid_command_name;
use super::errors::RegistrationError;
use super::handler::CommandHandler;
use super::router::DISPATCH_TARGET;

type Entry = (String, Arc<dyn CommandHandler>);

/// Registered command handlers in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    entries: RwLock<Vec<Entry>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`.
    ///
    /// Re-registering a name replaces its handler and keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidName`] when `name` could never be
    /// extracted from message text.
    pub fn register(
        &self,
        name: impl Into<String>,
        handler: Arc<dyn CommandHandler>,
    ) -> Result<(), RegistrationError> {
        let name = name.into();
        if !is_valid_command_name(&name) {
            return Err(RegistrationError::InvalidName { name });
        }
        self.insert(name, handler);
        Ok(())
    }

    /// Registers a handler under a name known to be valid.
    pub(crate) fn insert(&self, name: String, handler: Arc<dyn CommandHandler>) {
        let mut entries = self.write();
        match entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = handler,
            None => entries.push((name.clone(), handler)),
        }
        debug!(target: DISPATCH_TARGET, command = %name, "command registered");
    }

    /// Removes the handler registered under `name`, returning it.
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        let mut entries = self.write();
        let position = entries.iter().position(|(key, _)| key == name)?;
        let (_, handler) = entries.remove(position);
        debug!(target: DISPATCH_TARGET, command = %name, "command unregistered");
        Some(handler)
    }

    /// Looks up a handler by exact, case-sensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.read()
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, handler)| Arc::clone(handler))
    }

    /// Registered names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.read().iter().map(|(name, _)| name.clone()).collect()
    }

    /// A snapshot of every registration in registration order.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Arc<dyn CommandHandler>)> {
        self.read()
            .iter()
            .map(|(name, handler)| (name.clone(), Arc::clone(handler)))
            .collect()
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no command is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writers never leave the table half-updated, so a poisoned lock still
    // guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Entry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Entry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
