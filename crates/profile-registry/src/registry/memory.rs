//! In-memory registry implementation.

use super::Client;

/// In-memory device registry.
///
/// Entries are kept in insertion order; a replace moves the entry to the end.
/// Every lookup is a linear scan.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    clients: Vec<Client>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
        }
    }

    /// Find a client matching both the client id and the MAC address.
    pub fn find(&self, client_id: &str, mac_address: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.is(client_id, mac_address))
    }

    /// Check whether any entry already uses this client id OR this MAC address.
    pub fn exists_conflict(&self, client_id: &str, mac_address: &str) -> bool {
        self.clients
            .iter()
            .any(|c| c.client_id == client_id || c.mac_address == mac_address)
    }

    /// Append a client. Callers check `exists_conflict` first.
    pub fn insert(&mut self, client: Client) {
        self.clients.push(client);
    }

    /// Remove the entry matching (client id, MAC address) and append `client`.
    ///
    /// Does nothing when no entry matches.
    pub fn replace(&mut self, client_id: &str, mac_address: &str, client: Client) {
        if self.remove(client_id, mac_address) {
            self.clients.push(client);
        }
    }

    /// Remove the first entry matching (client id, MAC address).
    pub fn remove(&mut self, client_id: &str, mac_address: &str) -> bool {
        match self
            .clients
            .iter()
            .position(|c| c.is(client_id, mac_address))
        {
            Some(index) => {
                self.clients.remove(index);
                true
            }
            None => false,
        }
    }

    /// Snapshot of every client in store order.
    pub fn all(&self) -> Vec<Client> {
        self.clients.clone()
    }

    /// Number of stored clients.
    pub fn count(&self) -> usize {
        self.clients.len()
    }
}
