//! Connector registry - the host-owned table of compiled-in connectors.
//!
//! Registration is an explicit startup composition step: the host calls
//! [`ConnectorRegistry::builtin`] (or registers descriptors by hand) once
//! before request handling begins. The registry is append-only during that
//! step and read-only for the rest of the process lifetime, so no locking
//! is needed afterwards.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::connector::ConnectorDescriptor;
use crate::connectors::github;

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A connector with this id was already registered.
    DuplicateId(&'static str),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateId(id) => {
                write!(f, "connector '{}' is already registered", id)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Append-only registry of connector descriptors, keyed by connector id.
///
/// The dispatcher consults this to discover which connectors are compiled
/// in and to obtain their config instances for flag parsing.
#[derive(Default)]
pub struct ConnectorRegistry {
    connectors: BTreeMap<&'static str, ConnectorDescriptor>,
}

impl ConnectorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every compiled-in connector.
    ///
    /// The single composition point a host calls at startup; adding a new
    /// provider means adding its `describe()` here.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register(github::describe())
            .expect("builtin connector ids are unique");
        registry
    }

    /// Inserts a descriptor. Duplicate ids are an error rather than a
    /// silent overwrite, so registration presence stays testable.
    pub fn register(&mut self, descriptor: ConnectorDescriptor) -> Result<(), RegistryError> {
        if self.connectors.contains_key(descriptor.id) {
            return Err(RegistryError::DuplicateId(descriptor.id));
        }
        debug!(connector = descriptor.id, "registered connector");
        self.connectors.insert(descriptor.id, descriptor);
        Ok(())
    }

    /// Looks up a connector by id.
    pub fn get(&self, id: &str) -> Option<&ConnectorDescriptor> {
        self.connectors.get(id)
    }

    /// Registered connector ids, in stable order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.connectors.keys().copied().collect()
    }

    /// Iterates over all registered descriptors, in stable id order.
    pub fn iter(&self) -> impl Iterator<Item = &ConnectorDescriptor> {
        self.connectors.values()
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }
}

impl fmt::Debug for ConnectorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}
