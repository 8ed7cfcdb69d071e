use serde::{Deserialize, Serialize};

use super::deal::DealStatus;

/// Criteria for the deal list view. Every criterion is optional; an unset or
/// empty criterion imposes no constraint, and set criteria are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealFilter {
    /// Case-insensitive substring over product name, description and platform
    pub query: Option<String>,
    /// Exact category name
    pub category: Option<String>,
    /// Exact platform name
    pub platform: Option<String>,
    pub status: Option<DealStatus>,
}

impl DealFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_status(mut self, status: DealStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// The query lowercased as typed, or `None` when unset or empty.
    /// Whitespace is kept: `" pro"` only matches text containing `" pro"`.
    #[must_use]
    pub fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    #[must_use]
    pub fn category_criterion(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    #[must_use]
    pub fn platform_criterion(&self) -> Option<&str> {
        self.platform.as_deref().filter(|p| !p.is_empty())
    }

    /// `true` when no criterion constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized_query().is_none()
            && self.category_criterion().is_none()
            && self.platform_criterion().is_none()
            && self.status.is_none()
    }
}
