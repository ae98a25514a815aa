//! Device profile registry and its wire types.

mod memory;

pub use memory::Registry;

use serde::{Deserialize, Serialize};

/// An application installed on a device.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
    pub version: String,
}

impl Application {
    pub fn new(application_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            version: version.into(),
        }
    }
}

/// The set of applications a device declares as installed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    #[serde(default)]
    pub applications: Vec<Application>,
}

impl Profile {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}

/// Request body for create and update: `{"profile": {...}}`.
///
/// Identity fields a caller may include alongside `profile` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub profile: Profile,
}

impl From<Profile> for ProfileEnvelope {
    fn from(profile: Profile) -> Self {
        Self { profile }
    }
}

/// A registered device.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub profile: Profile,
    pub mac_address: String,
    pub client_id: String,
}

impl Client {
    pub fn new(client_id: impl Into<String>, mac_address: impl Into<String>, profile: Profile) -> Self {
        Self {
            profile,
            mac_address: mac_address.into(),
            client_id: client_id.into(),
        }
    }

    /// Exact match on both halves of the identity.
    pub fn is(&self, client_id: &str, mac_address: &str) -> bool {
        self.client_id == client_id && self.mac_address == mac_address
    }
}
