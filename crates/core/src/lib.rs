pub mod errors;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

use errors::CoreError;
use models::{
    category::CategoryPatch,
    config::VaultConfig,
    deal::{Deal, DealInput},
    filter::DealFilter,
    platform::PlatformPatch,
    stats::{CategoryStats, Dashboard, DealStats, PlatformStats},
};
use repositories::{
    deal_repository::InMemoryDealRepository,
    reference_repository::{InMemoryCategoryRepository, InMemoryPlatformRepository},
    traits::{CategoryRepository, DealRepository, PlatformRepository},
};
use seed::SeedData;
use services::{
    calendar_service::CalendarService,
    filter_service::FilterService,
    stats_service::StatsService,
    validation_service::{DealDraft, ValidationService},
};

/// Default number of deals listed on the dashboard.
const DEFAULT_RECENT_DEALS: usize = 5;

/// Result of [`DealVault::refresh_denormalized_counts`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Categories whose stored `deal_count` changed
    pub categories_updated: usize,
    /// Platforms whose stored `deal_count` or `total_spent` changed
    pub platforms_updated: usize,
}

/// Main entry point for the DealVault core library.
///
/// The composition root: owns the three repositories and the pure services
/// that derive views from their snapshots. Build one per application (or per
/// test); there is no global instance.
#[must_use]
pub struct DealVault {
    deals: Arc<dyn DealRepository>,
    categories: Arc<dyn CategoryRepository>,
    platforms: Arc<dyn PlatformRepository>,
    stats_service: StatsService,
    filter_service: FilterService,
    calendar_service: CalendarService,
    validation_service: ValidationService,
    recent_deals_limit: usize,
}

impl std::fmt::Debug for DealVault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DealVault")
            .field("recent_deals_limit", &self.recent_deals_limit)
            .finish_non_exhaustive()
    }
}

impl DealVault {
    /// Build in-memory repositories from `config`, seeded with the bundled
    /// datasets unless `config.seed_bundled_data` is off.
    pub fn new(config: VaultConfig) -> Result<Self, CoreError> {
        let seed = if config.seed_bundled_data {
            SeedData::bundled()?
        } else {
            SeedData::empty()
        };
        Ok(Self::with_seed(config, seed))
    }

    /// Build in-memory repositories holding `seed`.
    pub fn with_seed(config: VaultConfig, seed: SeedData) -> Self {
        info!(
            deals = seed.deals.len(),
            categories = seed.categories.len(),
            platforms = seed.platforms.len(),
            "initialising in-memory vault"
        );
        let deals = InMemoryDealRepository::new(seed.deals, config.deal_latency);
        let categories = InMemoryCategoryRepository::new(seed.categories, config.category_latency);
        let platforms = InMemoryPlatformRepository::new(seed.platforms, config.platform_latency);

        Self::with_repositories(Arc::new(deals), Arc::new(categories), Arc::new(platforms))
            .with_recent_deals_limit(config.recent_deals_limit)
    }

    /// Wire up externally constructed repositories (any backend).
    pub fn with_repositories(
        deals: Arc<dyn DealRepository>,
        categories: Arc<dyn CategoryRepository>,
        platforms: Arc<dyn PlatformRepository>,
    ) -> Self {
        Self {
            deals,
            categories,
            platforms,
            stats_service: StatsService::new(),
            filter_service: FilterService::new(),
            calendar_service: CalendarService::new(),
            validation_service: ValidationService::new(),
            recent_deals_limit: DEFAULT_RECENT_DEALS,
        }
    }

    pub fn with_recent_deals_limit(mut self, limit: usize) -> Self {
        self.recent_deals_limit = limit;
        self
    }

    // ── Repositories ────────────────────────────────────────────────

    #[must_use]
    pub fn deals(&self) -> &Arc<dyn DealRepository> {
        &self.deals
    }

    #[must_use]
    pub fn categories(&self) -> &Arc<dyn CategoryRepository> {
        &self.categories
    }

    #[must_use]
    pub fn platforms(&self) -> &Arc<dyn PlatformRepository> {
        &self.platforms
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Headline metrics over every stored deal.
    pub async fn stats(&self) -> Result<DealStats, CoreError> {
        self.deals.get_stats().await
    }

    /// Metrics plus the most recent purchases, fetched side by side.
    pub async fn dashboard(&self) -> Result<Dashboard, CoreError> {
        let (stats, deals) = tokio::try_join!(self.deals.get_stats(), self.deals.get_all())?;
        Ok(Dashboard {
            stats,
            recent_deals: self
                .stats_service
                .recent_deals(&deals, self.recent_deals_limit),
        })
    }

    /// Newest purchases first, up to the configured limit.
    pub async fn recent_deals(&self) -> Result<Vec<Deal>, CoreError> {
        let deals = self.deals.get_all().await?;
        Ok(self
            .stats_service
            .recent_deals(&deals, self.recent_deals_limit))
    }

    // ── Deal list ───────────────────────────────────────────────────

    /// The deal list narrowed by `filter` (all set criteria must hold).
    pub async fn filtered_deals(&self, filter: &DealFilter) -> Result<Vec<Deal>, CoreError> {
        let deals = self.deals.get_all().await?;
        Ok(self.filter_service.filter(&deals, filter))
    }

    /// Free-text search across name, description, category and platform.
    pub async fn search_deals(&self, query: &str) -> Result<Vec<Deal>, CoreError> {
        self.deals.search(query).await
    }

    /// Validate a form submission and store it as a new deal.
    pub async fn add_deal(&self, draft: &DealDraft) -> Result<Deal, CoreError> {
        let input = self.validation_service.validate_draft(draft)?;
        self.deals.create(input).await
    }

    /// Validate typed input and store it as a new deal.
    pub async fn add_deal_input(&self, input: DealInput) -> Result<Deal, CoreError> {
        self.validation_service.validate_input(&input)?;
        self.deals.create(input).await
    }

    /// Delete a deal. Category and platform counters are not touched.
    pub async fn remove_deal(&self, id: &str) -> Result<(), CoreError> {
        self.deals.delete(id).await
    }

    // ── Categories & Platforms ──────────────────────────────────────

    /// Per-category figures computed from the current deals.
    pub async fn category_overview(&self) -> Result<Vec<CategoryStats>, CoreError> {
        let (categories, deals) = tokio::try_join!(self.categories.get_all(), self.deals.get_all())?;
        Ok(self.stats_service.category_breakdown(&categories, &deals))
    }

    /// Per-platform figures computed from the current deals.
    pub async fn platform_overview(&self) -> Result<Vec<PlatformStats>, CoreError> {
        let (platforms, deals) = tokio::try_join!(self.platforms.get_all(), self.deals.get_all())?;
        Ok(self.stats_service.platform_breakdown(&platforms, &deals))
    }

    /// Rewrite the stored category/platform aggregates from the deal collection.
    ///
    /// Repositories never do this on their own; call it after deal mutations
    /// when the stored figures must match. Only changed records are written.
    pub async fn refresh_denormalized_counts(&self) -> Result<RefreshSummary, CoreError> {
        let (categories, platforms, deals) = tokio::try_join!(
            self.categories.get_all(),
            self.platforms.get_all(),
            self.deals.get_all()
        )?;
        let mut summary = RefreshSummary::default();

        for stats in self.stats_service.category_breakdown(&categories, &deals) {
            let deal_count = saturating_u32(stats.deal_count);
            let stale = categories
                .iter()
                .any(|c| c.id == stats.category_id && c.deal_count != deal_count);
            if stale {
                let patch = CategoryPatch {
                    deal_count: Some(deal_count),
                    ..CategoryPatch::default()
                };
                self.categories.update(&stats.category_id, patch).await?;
                summary.categories_updated += 1;
            }
        }

        for stats in self.stats_service.platform_breakdown(&platforms, &deals) {
            let deal_count = saturating_u32(stats.deal_count);
            let stale = platforms.iter().any(|p| {
                p.id == stats.platform_id
                    && (p.deal_count != deal_count || p.total_spent != stats.total_spent)
            });
            if stale {
                let patch = PlatformPatch {
                    deal_count: Some(deal_count),
                    total_spent: Some(stats.total_spent),
                    ..PlatformPatch::default()
                };
                self.platforms.update(&stats.platform_id, patch).await?;
                summary.platforms_updated += 1;
            }
        }

        info!(
            categories = summary.categories_updated,
            platforms = summary.platforms_updated,
            "refreshed denormalized counters"
        );
        Ok(summary)
    }

    // ── Calendar ────────────────────────────────────────────────────

    /// Dates with at least one purchase, ascending.
    pub async fn purchase_dates(&self) -> Result<Vec<NaiveDate>, CoreError> {
        let deals = self.deals.get_all().await?;
        Ok(self.calendar_service.purchase_dates(&deals))
    }

    /// Deals purchased on `date`.
    pub async fn deals_on(&self, date: NaiveDate) -> Result<Vec<Deal>, CoreError> {
        let deals = self.deals.get_all().await?;
        Ok(self.calendar_service.deals_on(&deals, date))
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all deals as a JSON array (canonical schema).
    pub async fn export_deals_to_json(&self) -> Result<String, CoreError> {
        let deals = self.deals.get_all().await?;
        serde_json::to_string_pretty(&deals)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize deals to JSON: {e}")))
    }

    /// Ingest a JSON array of deals written in either schema
    /// (`purchasePrice`/`regularPrice` or `salePrice`/`totalPrice`).
    ///
    /// Each entry becomes a new deal with a fresh id; ids in the input are
    /// ignored. Imported records are stored as-is, without form validation.
    /// The whole array must parse before anything is stored.
    pub async fn import_legacy_deals(&self, json: &str) -> Result<Vec<Deal>, CoreError> {
        let inputs: Vec<DealInput> = serde_json::from_str(json)?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            created.push(self.deals.create(input).await?);
        }
        info!(count = created.len(), "imported deals");
        Ok(created)
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
