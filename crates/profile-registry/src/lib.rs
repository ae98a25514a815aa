//! Device Profile Registry - in-memory store of installed applications per device.
//!
//! Each device is identified by a client id (sent in the `x-client-id` header)
//! and a MAC address (the last path segment). The service:
//! - Creates, reads, replaces and deletes device profiles over HTTP
//! - Rejects a create whose client id or MAC address is already taken
//! - Rejects an update that would leave a device with no applications

pub mod api;
pub mod config;
pub mod error;
pub mod registry;

pub use config::Config;
pub use error::ProfileError;
pub use registry::{Application, Client, Profile, ProfileEnvelope, Registry};
