use serde::{Deserialize, Serialize};

/// A grouping deals refer to by name (`Deal::category`).
///
/// `deal_count` is a stored display figure. The repository never recomputes
/// it; see `DealVault::refresh_denormalized_counts` for an explicit resync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,

    /// Unique display key, the join target of `Deal::category`
    pub name: String,

    /// Display hint (e.g. "#8B5CF6")
    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub deal_count: u32,
}

/// Fields supplied when creating a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub deal_count: Option<u32>,
}

impl CategoryInput {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            deal_count: None,
        }
    }
}

impl Category {
    pub fn from_input(id: impl Into<String>, input: CategoryInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            color: input.color,
            deal_count: input.deal_count.unwrap_or(0),
        }
    }
}

/// Partial category update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub deal_count: Option<u32>,
}

impl CategoryPatch {
    pub fn apply(self, category: &mut Category) {
        if let Some(v) = self.name {
            category.name = v;
        }
        if let Some(v) = self.color {
            category.color = v;
        }
        if let Some(v) = self.deal_count {
            category.deal_count = v;
        }
    }
}
