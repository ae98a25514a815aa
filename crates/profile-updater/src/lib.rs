//! Batch profile updater for the device profile registry.

mod client;
pub mod config;
mod error;
mod source;
mod updater;

pub use client::RegistryClient;
pub use config::Config;
pub use error::UpdaterError;
pub use source::CsvMacSource;
pub use updater::{default_profile, BatchReport, BatchUpdater, DEFAULT_HEADER_SENTINEL};
