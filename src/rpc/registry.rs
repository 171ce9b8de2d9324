//! Endpoint registry.
//!
//! Maps endpoint names to boolean handlers.  Filled once during startup,
//! then sealed: after [`Registry::seal`] every registration is refused and
//! the table is read-only for the lifetime of the firmware.

use heapless::Vec;

use crate::error::BridgeError;

use super::message::{EndpointName, MAX_NAME_LEN};

/// Maximum number of endpoints.
pub const MAX_ENDPOINTS: usize = 8;

/// Boolean actuator callback.
pub type Handler = Box<dyn FnMut(bool)>;

struct Entry {
    name: EndpointName,
    handler: Handler,
}

pub struct Registry {
    entries: Vec<Entry, MAX_ENDPOINTS>,
    sealed: bool,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            sealed: false,
        }
    }

    /// Add `handler` under `name`. Names are unique.
    pub fn register(&mut self, name: &str, handler: Handler) -> Result<(), BridgeError> {
        if self.sealed {
            return Err(BridgeError::Sealed);
        }
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(BridgeError::InvalidName);
        }
        if self.contains(name) {
            return Err(BridgeError::DuplicateEndpoint);
        }

        let mut key = EndpointName::new();
        key.push_str(name).map_err(|()| BridgeError::InvalidName)?;
        self.entries
            .push(Entry { name: key, handler })
            .map_err(|_| BridgeError::RegistryFull)
    }

    /// Freeze the table.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name.as_str() == name)
    }

    /// Run the handler for `name`. Returns `false` if no such endpoint.
    pub fn invoke(&mut self, name: &str, state: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.name.as_str() == name) {
            Some(entry) => {
                (entry.handler)(state);
                true
            }
            None => false,
        }
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
