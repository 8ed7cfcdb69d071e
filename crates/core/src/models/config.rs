use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::CoreError;

/// Simulated round-trip latency per repository operation, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyProfile {
    pub get_all_ms: u64,
    pub get_by_id_ms: u64,
    pub create_ms: u64,
    pub update_ms: u64,
    pub delete_ms: u64,
    /// Filtered reads: by category/platform/status and search
    pub query_ms: u64,
    pub stats_ms: u64,
}

impl LatencyProfile {
    /// Timings of the deal repository.
    pub fn deals() -> Self {
        Self {
            get_all_ms: 300,
            get_by_id_ms: 200,
            create_ms: 400,
            update_ms: 350,
            delete_ms: 250,
            query_ms: 300,
            stats_ms: 200,
        }
    }

    /// Timings of the category and platform repositories.
    pub fn reference_data() -> Self {
        Self {
            get_all_ms: 250,
            get_by_id_ms: 200,
            create_ms: 300,
            update_ms: 300,
            delete_ms: 200,
            query_ms: 0,
            stats_ms: 0,
        }
    }

    /// No delay at all.
    pub fn instant() -> Self {
        Self {
            get_all_ms: 0,
            get_by_id_ms: 0,
            create_ms: 0,
            update_ms: 0,
            delete_ms: 0,
            query_ms: 0,
            stats_ms: 0,
        }
    }

    pub fn get_all(&self) -> Duration {
        Duration::from_millis(self.get_all_ms)
    }

    pub fn get_by_id(&self) -> Duration {
        Duration::from_millis(self.get_by_id_ms)
    }

    pub fn create(&self) -> Duration {
        Duration::from_millis(self.create_ms)
    }

    pub fn update(&self) -> Duration {
        Duration::from_millis(self.update_ms)
    }

    pub fn delete(&self) -> Duration {
        Duration::from_millis(self.delete_ms)
    }

    pub fn query(&self) -> Duration {
        Duration::from_millis(self.query_ms)
    }

    pub fn stats(&self) -> Duration {
        Duration::from_millis(self.stats_ms)
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::deals()
    }
}

/// Settings for building a `DealVault`. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    pub deal_latency: LatencyProfile,
    pub category_latency: LatencyProfile,
    pub platform_latency: LatencyProfile,

    /// Seed the stores from the bundled static datasets.
    pub seed_bundled_data: bool,

    /// How many deals the dashboard lists under "Recent Deals".
    pub recent_deals_limit: usize,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            deal_latency: LatencyProfile::deals(),
            category_latency: LatencyProfile::reference_data(),
            platform_latency: LatencyProfile::reference_data(),
            seed_bundled_data: true,
            recent_deals_limit: 5,
        }
    }
}

impl VaultConfig {
    /// Defaults with every latency set to zero.
    pub fn instant() -> Self {
        Self {
            deal_latency: LatencyProfile::instant(),
            category_latency: LatencyProfile::instant(),
            platform_latency: LatencyProfile::instant(),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed_bundled_data: bool) -> Self {
        self.seed_bundled_data = seed_bundled_data;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::Deserialization(format!("Invalid vault config: {e}")))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize vault config: {e}")))
    }
}
