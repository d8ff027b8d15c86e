//! Registry associating link types with their handlers.

use std::collections::{hash_map::Entry, HashMap};

use crate::{
    error::{Completion, DltError, DltResult, Warning},
    handler::{Handler, LinkHandler},
    linktype::LinkType,
    raw::RawHandler,
};

/// Registry of link-type handlers, keyed by [`LinkType`].
///
/// Populated once at startup and read-only during packet processing: for
/// each packet, the capture's link-type tag selects the handler whose
/// decode and encode operations are invoked. Lookups are O(1); duplicate
/// registration is a programming error and is rejected.
#[derive(Debug, Default)]
pub struct DltRegistry {
    handlers: HashMap<LinkType, Handler>,
}

impl DltRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in handler registered.
    pub fn with_builtin_handlers() -> Self {
        let mut registry = Self::new();
        registry
            .add(RawHandler::new())
            .expect("built-in link types are distinct");
        registry
    }

    /// Registers a handler under its link type.
    ///
    /// Performs no per-packet allocation. Fails with
    /// [`DltError::DuplicateHandler`] if a handler for the same link type
    /// is already present.
    pub fn add(&mut self, handler: impl Into<Handler>) -> DltResult<()> {
        let handler = handler.into();
        let link_type = handler.link_type();

        match self.handlers.entry(link_type) {
            Entry::Occupied(_) => Err(DltError::DuplicateHandler(link_type)),
            Entry::Vacant(entry) => {
                let handler = entry.insert(handler);
                tracing::trace!(%link_type, name = handler.name(), "registered handler");
                Ok(Completion::Ok(()))
            }
        }
    }

    /// Looks up the handler registered for a link type.
    pub fn get(&self, link_type: LinkType) -> Result<&Handler, DltError> {
        self.handlers
            .get(&link_type)
            .ok_or(DltError::UnregisteredLinkType(link_type))
    }

    /// Looks up the handler registered for a link type, mutably.
    pub fn get_mut(&mut self, link_type: LinkType) -> Result<&mut Handler, DltError> {
        self.handlers
            .get_mut(&link_type)
            .ok_or(DltError::UnregisteredLinkType(link_type))
    }

    /// Initializes the handler for a link type, allocating its
    /// configuration and scratch.
    ///
    /// Fails with [`DltError::UnregisteredLinkType`] if no handler was
    /// registered for the link type.
    pub fn init(&mut self, link_type: LinkType) -> DltResult<()> {
        self.get_mut(link_type)?.init()
    }

    /// Releases the configuration and scratch of the handler for a link
    /// type, idempotently.
    ///
    /// Cleaning up a handler that was never initialized succeeds with a
    /// warning; cleaning up an unregistered link type is an error.
    pub fn cleanup(&mut self, link_type: LinkType) -> DltResult<()> {
        let handler = self.get_mut(link_type)?;

        if !handler.is_initialized() {
            tracing::debug!(%link_type, "cleanup of a handler that was never initialized");
            return Ok(Completion::Warn(
                (),
                Warning::new(format!("handler {} was never initialized", handler.name())),
            ));
        }

        handler.cleanup()
    }

    /// Returns the link types with a registered handler.
    pub fn link_types(&self) -> impl Iterator<Item = LinkType> + '_ {
        self.handlers.keys().copied()
    }

    /// The number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handler has been registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
