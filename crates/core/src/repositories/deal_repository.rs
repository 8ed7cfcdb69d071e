use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use super::store::{simulate_latency, MemoryStore};
use super::traits::DealRepository;
use crate::errors::CoreError;
use crate::models::config::LatencyProfile;
use crate::models::deal::{Deal, DealInput, DealPatch, DealStatus};
use crate::models::stats::DealStats;
use crate::services::filter_service::FilterService;
use crate::services::stats_service::StatsService;

/// Deal repository backed by an in-memory vector.
///
/// Each call waits out its simulated latency first and then touches the
/// store, so writes are visible to any read that resolves after them.
pub struct InMemoryDealRepository {
    store: MemoryStore<Deal>,
    latency: LatencyProfile,
    filter_service: FilterService,
    stats_service: StatsService,
}

impl InMemoryDealRepository {
    pub fn new(seed: Vec<Deal>, latency: LatencyProfile) -> Self {
        Self {
            store: MemoryStore::new(seed),
            latency,
            filter_service: FilterService::new(),
            stats_service: StatsService::new(),
        }
    }

    /// Empty store, no delay.
    pub fn instant() -> Self {
        Self::new(Vec::new(), LatencyProfile::instant())
    }

    /// Current number of stored deals, without simulated delay.
    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }
}

#[async_trait]
impl DealRepository for InMemoryDealRepository {
    async fn get_all(&self) -> Result<Vec<Deal>, CoreError> {
        simulate_latency(self.latency.get_all()).await;
        let deals = self.store.snapshot().await;
        debug!(count = deals.len(), "loaded deals");
        Ok(deals)
    }

    async fn get_by_id(&self, id: &str) -> Result<Deal, CoreError> {
        simulate_latency(self.latency.get_by_id()).await;
        self.store.find(id).await
    }

    async fn create(&self, input: DealInput) -> Result<Deal, CoreError> {
        simulate_latency(self.latency.create()).await;
        let created_at = Utc::now();
        let deal = self
            .store
            .insert_with(|id| {
                let mut deal = Deal::from_input(id, input);
                deal.created_at = Some(created_at);
                deal
            })
            .await;
        info!(id = %deal.id, product = %deal.product_name, "created deal");
        Ok(deal)
    }

    async fn update(&self, id: &str, patch: DealPatch) -> Result<Deal, CoreError> {
        simulate_latency(self.latency.update()).await;
        let deal = self
            .store
            .modify(id, |deal| {
                patch.apply(deal);
                deal.updated_at = Some(Utc::now());
            })
            .await?;
        info!(id = %deal.id, "updated deal");
        Ok(deal)
    }

    async fn delete(&self, id: &str) -> Result<(), CoreError> {
        simulate_latency(self.latency.delete()).await;
        let removed = self.store.remove(id).await?;
        info!(id = %removed.id, product = %removed.product_name, "deleted deal");
        Ok(())
    }

    async fn get_by_category(&self, category: &str) -> Result<Vec<Deal>, CoreError> {
        simulate_latency(self.latency.query()).await;
        let deals = self.store.snapshot().await;
        Ok(self.filter_service.by_category(&deals, category))
    }

    async fn get_by_platform(&self, platform: &str) -> Result<Vec<Deal>, CoreError> {
        simulate_latency(self.latency.query()).await;
        let deals = self.store.snapshot().await;
        Ok(self.filter_service.by_platform(&deals, platform))
    }

    async fn get_by_status(&self, status: DealStatus) -> Result<Vec<Deal>, CoreError> {
        simulate_latency(self.latency.query()).await;
        let deals = self.store.snapshot().await;
        Ok(self.filter_service.by_status(&deals, status))
    }

    async fn search(&self, query: &str) -> Result<Vec<Deal>, CoreError> {
        simulate_latency(self.latency.query()).await;
        let deals = self.store.snapshot().await;
        let hits = self.filter_service.search(&deals, query);
        debug!(query, hits = hits.len(), "searched deals");
        Ok(hits)
    }

    async fn get_stats(&self) -> Result<DealStats, CoreError> {
        simulate_latency(self.latency.stats()).await;
        let deals = self.store.snapshot().await;
        Ok(self.stats_service.compute(&deals))
    }
}
