use serde::{Deserialize, Serialize};

use super::deal::Deal;

/// Dashboard metrics over a deal collection.
///
/// All-zero (`Default`) for an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealStats {
    /// Sum of purchase prices
    pub total_spent: f64,

    /// Sum of regular prices minus `total_spent`
    pub total_saved: f64,

    /// `total_saved` as a whole percentage of the summed regular prices
    pub savings_percentage: i64,

    pub active_deals: usize,

    pub pending_deals: usize,

    pub total_deals: usize,

    /// `total_spent / total_deals`, 0 for an empty collection
    pub average_deal_value: f64,

    /// Deals whose status is `expired`
    #[serde(rename = "unusedLTDs")]
    pub unused_ltds: usize,

    /// Deals whose status is `cancelled`
    #[serde(rename = "failedLTDs")]
    pub failed_ltds: usize,

    /// Not derivable from deal data; always `None` until refunds are tracked.
    #[serde(default)]
    pub refund_rate: Option<f64>,
}

/// Per-category figures for the categories overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category_id: String,
    pub name: String,
    pub color: String,
    /// Counted from the deal collection, not the stored `Category::deal_count`
    pub deal_count: usize,
    pub total_spent: f64,
    pub total_saved: f64,
    pub average_deal_value: f64,
    pub active_deals: usize,
}

/// Per-platform figures computed from the deal collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub platform_id: String,
    pub name: String,
    pub deal_count: usize,
    pub total_spent: f64,
    pub total_saved: f64,
}

/// What the dashboard page shows: headline metrics plus the newest purchases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DealStats,
    pub recent_deals: Vec<Deal>,
}
