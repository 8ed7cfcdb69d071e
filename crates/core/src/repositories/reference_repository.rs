use async_trait::async_trait;
use tracing::{debug, info};

use super::store::{simulate_latency, MemoryStore};
use super::traits::{CategoryRepository, PlatformRepository};
use crate::errors::CoreError;
use crate::models::category::{Category, CategoryInput, CategoryPatch};
use crate::models::config::LatencyProfile;
use crate::models::platform::{Platform, PlatformInput, PlatformPatch};

/// Category repository backed by an in-memory vector.
pub struct InMemoryCategoryRepository {
    store: MemoryStore<Category>,
    latency: LatencyProfile,
}

impl InMemoryCategoryRepository {
    pub fn new(seed: Vec<Category>, latency: LatencyProfile) -> Self {
        Self {
            store: MemoryStore::new(seed),
            latency,
        }
    }

    pub fn instant() -> Self {
        Self::new(Vec::new(), LatencyProfile::instant())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all(&self) -> Result<Vec<Category>, CoreError> {
        simulate_latency(self.latency.get_all()).await;
        let categories = self.store.snapshot().await;
        debug!(count = categories.len(), "loaded categories");
        Ok(categories)
    }

    async fn get_by_id(&self, id: &str) -> Result<Category, CoreError> {
        simulate_latency(self.latency.get_by_id()).await;
        self.store.find(id).await
    }

    async fn create(&self, input: CategoryInput) -> Result<Category, CoreError> {
        simulate_latency(self.latency.create()).await;
        let category = self
            .store
            .insert_with(|id| Category::from_input(id, input))
            .await;
        info!(id = %category.id, name = %category.name, "created category");
        Ok(category)
    }

    async fn update(&self, id: &str, patch: CategoryPatch) -> Result<Category, CoreError> {
        simulate_latency(self.latency.update()).await;
        let category = self.store.modify(id, |c| patch.apply(c)).await?;
        info!(id = %category.id, "updated category");
        Ok(category)
    }

    /// Deals that name this category are left untouched.
    async fn delete(&self, id: &str) -> Result<(), CoreError> {
        simulate_latency(self.latency.delete()).await;
        let removed = self.store.remove(id).await?;
        info!(id = %removed.id, name = %removed.name, "deleted category");
        Ok(())
    }
}

/// Platform repository backed by an in-memory vector.
pub struct InMemoryPlatformRepository {
    store: MemoryStore<Platform>,
    latency: LatencyProfile,
}

impl InMemoryPlatformRepository {
    pub fn new(seed: Vec<Platform>, latency: LatencyProfile) -> Self {
        Self {
            store: MemoryStore::new(seed),
            latency,
        }
    }

    pub fn instant() -> Self {
        Self::new(Vec::new(), LatencyProfile::instant())
    }
}

#[async_trait]
impl PlatformRepository for InMemoryPlatformRepository {
    async fn get_all(&self) -> Result<Vec<Platform>, CoreError> {
        simulate_latency(self.latency.get_all()).await;
        let platforms = self.store.snapshot().await;
        debug!(count = platforms.len(), "loaded platforms");
        Ok(platforms)
    }

    async fn get_by_id(&self, id: &str) -> Result<Platform, CoreError> {
        simulate_latency(self.latency.get_by_id()).await;
        self.store.find(id).await
    }

    async fn create(&self, input: PlatformInput) -> Result<Platform, CoreError> {
        simulate_latency(self.latency.create()).await;
        let platform = self
            .store
            .insert_with(|id| Platform::from_input(id, input))
            .await;
        info!(id = %platform.id, name = %platform.name, "created platform");
        Ok(platform)
    }

    async fn update(&self, id: &str, patch: PlatformPatch) -> Result<Platform, CoreError> {
        simulate_latency(self.latency.update()).await;
        let platform = self.store.modify(id, |p| patch.apply(p)).await?;
        info!(id = %platform.id, "updated platform");
        Ok(platform)
    }

    async fn delete(&self, id: &str) -> Result<(), CoreError> {
        simulate_latency(self.latency.delete()).await;
        let removed = self.store.remove(id).await?;
        info!(id = %removed.id, name = %removed.name, "deleted platform");
        Ok(())
    }
}
