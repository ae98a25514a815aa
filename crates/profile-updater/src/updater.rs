//! Sequential batch update of device profiles.

use crate::client::RegistryClient;
use crate::error::UpdaterError;
use profile_registry::{Application, Profile};
use tracing::{info, warn};

/// First-column title that marks a header row.
pub const DEFAULT_HEADER_SENTINEL: &str = "mac_addresses";

/// The profile pushed to every device.
pub fn default_profile() -> Profile {
    Profile::new(vec![
        Application::new("music_app", "v1.4.10"),
        Application::new("diagnostic_app", "v1.2.6"),
        Application::new("settings_app", "v1.1.5"),
    ])
}

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub updated: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.updated + self.failed + self.skipped
    }
}

/// Issues one update per MAC address, strictly one after another.
pub struct BatchUpdater {
    client: RegistryClient,
    profile: Profile,
    header_sentinel: String,
}

impl BatchUpdater {
    /// Create an updater that pushes the default profile.
    pub fn new(client: RegistryClient, header_sentinel: impl Into<String>) -> Self {
        Self {
            client,
            profile: default_profile(),
            header_sentinel: header_sentinel.into(),
        }
    }

    /// Push `profile` instead of the default one.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Update every MAC address produced by `records`.
    ///
    /// A failed update is logged and counted; the run carries on with the
    /// next record. A record source error ends the run.
    pub async fn run<I>(&self, records: I) -> Result<BatchReport, UpdaterError>
    where
        I: IntoIterator<Item = Result<String, UpdaterError>>,
    {
        let mut report = BatchReport::default();

        for record in records {
            let mac = record?;
            if mac.is_empty() || mac == self.header_sentinel {
                report.skipped += 1;
                continue;
            }

            match self.client.update_profile(&mac, &self.profile).await {
                Ok(client) => {
                    info!(
                        mac = %mac,
                        applications = client.profile.applications.len(),
                        "Device updated"
                    );
                    report.updated += 1;
                }
                Err(e) => {
                    warn!(mac = %mac, error = %e, "Device update failed");
                    report.failed += 1;
                }
            }
        }

        info!(
            updated = report.updated,
            failed = report.failed,
            skipped = report.skipped,
            "Batch update finished"
        );

        Ok(report)
    }
}
