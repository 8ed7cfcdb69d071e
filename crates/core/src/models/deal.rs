use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::date::{optional_purchase_date, purchase_date};
use crate::errors::CoreError;

/// Lifecycle state of a purchased deal.
///
/// Covers both status sets seen in stored data: `active | pending | expired`
/// and the older `active | expired | cancelled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DealStatus {
    #[default]
    Active,
    Pending,
    Expired,
    Cancelled,
}

impl DealStatus {
    pub const ALL: [DealStatus; 4] = [
        DealStatus::Active,
        DealStatus::Pending,
        DealStatus::Expired,
        DealStatus::Cancelled,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DealStatus::Active => "active",
            DealStatus::Pending => "pending",
            DealStatus::Expired => "expired",
            DealStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for DealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DealStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        DealStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == lower)
            .ok_or_else(|| CoreError::InvalidStatus(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for DealStatus {
    /// Same leniency as `FromStr`: `"Active"` and `" expired "` are accepted.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Round a ratio to a whole percentage, halves rounding up.
/// Returns 0 when the denominator is not positive.
pub(crate) fn whole_percentage(numerator: f64, denominator: f64) -> i64 {
    if denominator > 0.0 {
        ((numerator / denominator) * 100.0 + 0.5).floor() as i64
    } else {
        0
    }
}

/// A recorded lifetime purchase of a software product.
///
/// `savings` and `savings_percentage` are derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Unique within its repository
    pub id: String,

    pub product_name: String,

    /// Joins to `Platform::name`
    pub platform: String,

    /// Joins to `Category::name`
    pub category: String,

    /// What was actually paid (`salePrice` in older data)
    #[serde(alias = "salePrice")]
    pub purchase_price: f64,

    /// List price the purchase is compared against (`totalPrice` in older data)
    #[serde(alias = "totalPrice")]
    pub regular_price: f64,

    #[serde(with = "purchase_date")]
    pub purchase_date: NaiveDate,

    #[serde(default)]
    pub status: DealStatus,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Deal {
    /// Build a stored deal from creation input. Timestamps are stamped by the repository.
    pub fn from_input(id: impl Into<String>, input: DealInput) -> Self {
        Self {
            id: id.into(),
            product_name: input.product_name,
            platform: input.platform,
            category: input.category,
            purchase_price: input.purchase_price,
            regular_price: input.regular_price,
            purchase_date: input.purchase_date,
            status: input.status,
            description: input.description,
            access_url: non_empty(input.access_url),
            notes: non_empty(input.notes),
            logo_url: non_empty(input.logo_url),
            created_at: None,
            updated_at: None,
        }
    }

    /// `regular_price - purchase_price`
    #[must_use]
    pub fn savings(&self) -> f64 {
        self.regular_price - self.purchase_price
    }

    /// Savings as a whole percentage of the regular price (0 if the regular price is 0).
    #[must_use]
    pub fn savings_percentage(&self) -> i64 {
        whole_percentage(self.savings(), self.regular_price)
    }
}

/// Fields supplied when creating a deal. The id is assigned by the repository.
///
/// Deserializes from either schema (`purchasePrice`/`regularPrice` or
/// `salePrice`/`totalPrice`), which is what legacy import relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInput {
    pub product_name: String,
    pub platform: String,
    pub category: String,
    #[serde(alias = "salePrice")]
    pub purchase_price: f64,
    #[serde(alias = "totalPrice")]
    pub regular_price: f64,
    #[serde(with = "purchase_date")]
    pub purchase_date: NaiveDate,
    #[serde(default)]
    pub status: DealStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub access_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl DealInput {
    /// Minimal input; optional fields empty and status `active`.
    pub fn new(
        product_name: impl Into<String>,
        platform: impl Into<String>,
        category: impl Into<String>,
        purchase_price: f64,
        regular_price: f64,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            platform: platform.into(),
            category: category.into(),
            purchase_price,
            regular_price,
            purchase_date,
            status: DealStatus::Active,
            description: String::new(),
            access_url: None,
            notes: None,
            logo_url: None,
        }
    }

    pub fn with_status(mut self, status: DealStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update merged into an existing deal. `None` leaves a field untouched;
/// an empty string clears an optional text field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealPatch {
    pub product_name: Option<String>,
    pub platform: Option<String>,
    pub category: Option<String>,
    #[serde(alias = "salePrice")]
    pub purchase_price: Option<f64>,
    #[serde(alias = "totalPrice")]
    pub regular_price: Option<f64>,
    #[serde(with = "optional_purchase_date")]
    pub purchase_date: Option<NaiveDate>,
    pub status: Option<DealStatus>,
    pub description: Option<String>,
    pub access_url: Option<String>,
    pub notes: Option<String>,
    pub logo_url: Option<String>,
}

impl DealPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the supplied fields into `deal`. Does not touch `id` or timestamps.
    pub fn apply(self, deal: &mut Deal) {
        if let Some(v) = self.product_name {
            deal.product_name = v;
        }
        if let Some(v) = self.platform {
            deal.platform = v;
        }
        if let Some(v) = self.category {
            deal.category = v;
        }
        if let Some(v) = self.purchase_price {
            deal.purchase_price = v;
        }
        if let Some(v) = self.regular_price {
            deal.regular_price = v;
        }
        if let Some(v) = self.purchase_date {
            deal.purchase_date = v;
        }
        if let Some(v) = self.status {
            deal.status = v;
        }
        if let Some(v) = self.description {
            deal.description = v;
        }
        if let Some(v) = self.access_url {
            deal.access_url = non_empty(Some(v));
        }
        if let Some(v) = self.notes {
            deal.notes = non_empty(Some(v));
        }
        if let Some(v) = self.logo_url {
            deal.logo_url = non_empty(Some(v));
        }
    }
}

/// Savings shown next to the price fields before a deal is saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SavingsPreview {
    pub amount: f64,
    pub percentage: i64,
}

impl SavingsPreview {
    /// Zero unless both prices are positive.
    #[must_use]
    pub fn from_prices(purchase_price: f64, regular_price: f64) -> Self {
        if purchase_price > 0.0 && regular_price > 0.0 {
            let amount = regular_price - purchase_price;
            Self {
                amount,
                percentage: whole_percentage(amount, regular_price),
            }
        } else {
            Self::default()
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
