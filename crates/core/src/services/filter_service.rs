use crate::models::deal::{Deal, DealStatus};
use crate::models::filter::DealFilter;

/// Derives list views from a deal collection.
///
/// Stateless: the output depends only on the collection and the criteria
/// passed in, and always preserves collection order.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Deals satisfying every set criterion of `filter`.
    /// The text query is matched against product name, description and platform.
    pub fn filter(&self, deals: &[Deal], filter: &DealFilter) -> Vec<Deal> {
        if filter.is_empty() {
            return deals.to_vec();
        }

        let query = filter.normalized_query();
        let category = filter.category_criterion();
        let platform = filter.platform_criterion();

        deals
            .iter()
            .filter(|deal| {
                query.as_deref().map_or(true, |q| {
                    contains_ci(&deal.product_name, q)
                        || contains_ci(&deal.description, q)
                        || contains_ci(&deal.platform, q)
                })
            })
            .filter(|deal| category.map_or(true, |c| deal.category == c))
            .filter(|deal| platform.map_or(true, |p| deal.platform == p))
            .filter(|deal| filter.status.map_or(true, |s| deal.status == s))
            .cloned()
            .collect()
    }

    /// Repository-style search: case-insensitive substring over product name,
    /// description, category and platform. An empty query matches everything.
    pub fn search(&self, deals: &[Deal], query: &str) -> Vec<Deal> {
        let q = query.to_lowercase();
        deals
            .iter()
            .filter(|deal| matches_search(deal, &q))
            .cloned()
            .collect()
    }

    pub fn by_category(&self, deals: &[Deal], category: &str) -> Vec<Deal> {
        deals.iter().filter(|d| d.category == category).cloned().collect()
    }

    pub fn by_platform(&self, deals: &[Deal], platform: &str) -> Vec<Deal> {
        deals.iter().filter(|d| d.platform == platform).cloned().collect()
    }

    pub fn by_status(&self, deals: &[Deal], status: DealStatus) -> Vec<Deal> {
        deals.iter().filter(|d| d.status == status).cloned().collect()
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}

/// `lowered_query` must already be lowercase.
fn matches_search(deal: &Deal, lowered_query: &str) -> bool {
    contains_ci(&deal.product_name, lowered_query)
        || contains_ci(&deal.description, lowered_query)
        || contains_ci(&deal.category, lowered_query)
        || contains_ci(&deal.platform, lowered_query)
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
