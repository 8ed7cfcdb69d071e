use serde::de::DeserializeOwned;

use crate::errors::CoreError;
use crate::models::category::Category;
use crate::models::deal::Deal;
use crate::models::platform::Platform;

const DEALS_JSON: &str = include_str!("../data/deals.json");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const PLATFORMS_JSON: &str = include_str!("../data/platforms.json");

/// Static reference data the stores start from on every launch.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub deals: Vec<Deal>,
    pub categories: Vec<Category>,
    pub platforms: Vec<Platform>,
}

impl SeedData {
    /// The datasets compiled into the library.
    pub fn bundled() -> Result<Self, CoreError> {
        Ok(Self {
            deals: parse_dataset("deals", DEALS_JSON)?,
            categories: parse_dataset("categories", CATEGORIES_JSON)?,
            platforms: parse_dataset("platforms", PLATFORMS_JSON)?,
        })
    }

    /// Nothing at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

fn parse_dataset<T: DeserializeOwned>(name: &str, json: &str) -> Result<Vec<T>, CoreError> {
    serde_json::from_str(json)
        .map_err(|e| CoreError::Deserialization(format!("Bundled {name} dataset is invalid: {e}")))
}
