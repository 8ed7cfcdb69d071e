use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::category::{Category, CategoryInput, CategoryPatch};
use crate::models::deal::{Deal, DealInput, DealPatch, DealStatus};
use crate::models::platform::{Platform, PlatformInput, PlatformPatch};
use crate::models::stats::DealStats;

/// Data access for deals.
///
/// Every call is asynchronous so an in-memory store and a networked or
/// disk-backed one are interchangeable. Reads return owned snapshots taken
/// when the call resolves; mutating a snapshot never touches the store.
/// Only `get_by_id`, `update` and `delete` fail, with `CoreError::NotFound`.
#[async_trait]
pub trait DealRepository: Send + Sync {
    /// All deals in insertion order.
    async fn get_all(&self) -> Result<Vec<Deal>, CoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Deal, CoreError>;

    /// Assign an id and creation timestamp, append, and return the stored record.
    async fn create(&self, input: DealInput) -> Result<Deal, CoreError>;

    /// Merge `patch` into the record and stamp `updated_at`.
    async fn update(&self, id: &str, patch: DealPatch) -> Result<Deal, CoreError>;

    async fn delete(&self, id: &str) -> Result<(), CoreError>;

    /// Exact match on `Deal::category`.
    async fn get_by_category(&self, category: &str) -> Result<Vec<Deal>, CoreError>;

    /// Exact match on `Deal::platform`.
    async fn get_by_platform(&self, platform: &str) -> Result<Vec<Deal>, CoreError>;

    async fn get_by_status(&self, status: DealStatus) -> Result<Vec<Deal>, CoreError>;

    /// Case-insensitive substring over product name, description, category and platform.
    async fn search(&self, query: &str) -> Result<Vec<Deal>, CoreError>;

    /// Dashboard metrics over the whole store (all zero when empty).
    async fn get_stats(&self) -> Result<DealStats, CoreError>;
}

/// Data access for categories. `deal_count` is stored as given, never recomputed.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, CoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Category, CoreError>;
    async fn create(&self, input: CategoryInput) -> Result<Category, CoreError>;
    async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Category, CoreError>;
    async fn delete(&self, id: &str) -> Result<(), CoreError>;
}

/// Data access for platforms. `deal_count`/`total_spent` are stored as given.
#[async_trait]
pub trait PlatformRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Platform>, CoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Platform, CoreError>;
    async fn create(&self, input: PlatformInput) -> Result<Platform, CoreError>;
    async fn update(&self, id: &str, patch: PlatformPatch) -> Result<Platform, CoreError>;
    async fn delete(&self, id: &str) -> Result<(), CoreError>;
}
