use serde::{Deserialize, Serialize};

/// A marketplace deals are bought on (AppSumo, PitchGround, ...).
///
/// `deal_count` and `total_spent` are stored aggregates and drift from the
/// deal collection unless explicitly refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: String,

    /// Join target of `Deal::platform`
    pub name: String,

    #[serde(default)]
    pub deal_count: u32,

    #[serde(default)]
    pub total_spent: f64,
}

/// Fields supplied when creating a platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformInput {
    pub name: String,
    #[serde(default)]
    pub deal_count: Option<u32>,
    #[serde(default)]
    pub total_spent: Option<f64>,
}

impl PlatformInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deal_count: None,
            total_spent: None,
        }
    }
}

impl Platform {
    pub fn from_input(id: impl Into<String>, input: PlatformInput) -> Self {
        Self {
            id: id.into(),
            name: input.name,
            deal_count: input.deal_count.unwrap_or(0),
            total_spent: input.total_spent.unwrap_or(0.0),
        }
    }
}

/// Partial platform update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformPatch {
    pub name: Option<String>,
    pub deal_count: Option<u32>,
    pub total_spent: Option<f64>,
}

impl PlatformPatch {
    pub fn apply(self, platform: &mut Platform) {
        if let Some(v) = self.name {
            platform.name = v;
        }
        if let Some(v) = self.deal_count {
            platform.deal_count = v;
        }
        if let Some(v) = self.total_spent {
            platform.total_spent = v;
        }
    }
}
