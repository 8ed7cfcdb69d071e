use crate::models::category::Category;
use crate::models::deal::{whole_percentage, Deal, DealStatus};
use crate::models::platform::Platform;
use crate::models::stats::{CategoryStats, DealStats, PlatformStats};

/// Derives summary metrics from a deal collection.
///
/// Pure computation with no I/O or stored state. An empty collection yields
/// all-zero figures; no ratio is ever computed over a zero denominator.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Dashboard metrics for `deals`.
    ///
    /// - `total_saved = Σ regular_price − total_spent`
    /// - `savings_percentage = round(total_saved / Σ regular_price × 100)`
    /// - `average_deal_value = total_spent / total_deals`
    pub fn compute(&self, deals: &[Deal]) -> DealStats {
        if deals.is_empty() {
            return DealStats::default();
        }

        let totals = Totals::of(deals.iter());
        let count_status = |status: DealStatus| deals.iter().filter(|d| d.status == status).count();

        DealStats {
            total_spent: totals.spent,
            total_saved: totals.saved(),
            savings_percentage: whole_percentage(totals.saved(), totals.regular),
            active_deals: count_status(DealStatus::Active),
            pending_deals: count_status(DealStatus::Pending),
            total_deals: deals.len(),
            average_deal_value: totals.average(),
            unused_ltds: count_status(DealStatus::Expired),
            failed_ltds: count_status(DealStatus::Cancelled),
            refund_rate: None,
        }
    }

    /// Figures per category, joined on `deal.category == category.name`.
    /// Follows the order of `categories`; a category with no deals gets zeros.
    pub fn category_breakdown(&self, categories: &[Category], deals: &[Deal]) -> Vec<CategoryStats> {
        categories
            .iter()
            .map(|category| {
                let members = || deals.iter().filter(|d| d.category == category.name);
                let totals = Totals::of(members());
                CategoryStats {
                    category_id: category.id.clone(),
                    name: category.name.clone(),
                    color: category.color.clone(),
                    deal_count: totals.count,
                    total_spent: totals.spent,
                    total_saved: totals.saved(),
                    average_deal_value: totals.average(),
                    active_deals: members().filter(|d| d.status == DealStatus::Active).count(),
                }
            })
            .collect()
    }

    /// Figures per platform, joined on `deal.platform == platform.name`.
    pub fn platform_breakdown(&self, platforms: &[Platform], deals: &[Deal]) -> Vec<PlatformStats> {
        platforms
            .iter()
            .map(|platform| {
                let totals = Totals::of(deals.iter().filter(|d| d.platform == platform.name));
                PlatformStats {
                    platform_id: platform.id.clone(),
                    name: platform.name.clone(),
                    deal_count: totals.count,
                    total_spent: totals.spent,
                    total_saved: totals.saved(),
                }
            })
            .collect()
    }

    /// Newest purchases first, at most `limit`. Ties keep collection order.
    pub fn recent_deals(&self, deals: &[Deal], limit: usize) -> Vec<Deal> {
        let mut sorted = deals.to_vec();
        sorted.sort_by(|a, b| b.purchase_date.cmp(&a.purchase_date));
        sorted.truncate(limit);
        sorted
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Running sums over a subset of deals.
struct Totals {
    count: usize,
    spent: f64,
    regular: f64,
}

impl Totals {
    fn of<'a>(deals: impl Iterator<Item = &'a Deal>) -> Self {
        deals.fold(
            Totals {
                count: 0,
                spent: 0.0,
                regular: 0.0,
            },
            |mut acc, deal| {
                acc.count += 1;
                acc.spent += deal.purchase_price;
                acc.regular += deal.regular_price;
                acc
            },
        )
    }

    fn saved(&self) -> f64 {
        self.regular - self.spent
    }

    fn average(&self) -> f64 {
        if self.count > 0 {
            self.spent / self.count as f64
        } else {
            0.0
        }
    }
}
