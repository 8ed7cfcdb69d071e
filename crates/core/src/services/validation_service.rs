use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::date::{parse_purchase_date, to_display};
use crate::models::deal::{DealInput, DealStatus, SavingsPreview};

/// Raw add-deal form contents, every field as typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DealDraft {
    pub product_name: String,
    pub platform: String,
    pub category: String,
    pub purchase_price: String,
    pub regular_price: String,
    /// `MM/DD/YYYY` or `YYYY-MM-DD`
    pub purchase_date: String,
    pub status: String,
    pub description: String,
    pub access_url: String,
    pub notes: String,
    pub logo_url: String,
}

impl Default for DealDraft {
    /// An empty form: today's date and status `active` prefilled.
    fn default() -> Self {
        Self {
            product_name: String::new(),
            platform: String::new(),
            category: String::new(),
            purchase_price: String::new(),
            regular_price: String::new(),
            purchase_date: to_display(Utc::now().date_naive()),
            status: DealStatus::Active.to_string(),
            description: String::new(),
            access_url: String::new(),
            notes: String::new(),
            logo_url: String::new(),
        }
    }
}

impl DealDraft {
    /// Savings shown live while the price fields are being edited.
    #[must_use]
    pub fn savings_preview(&self) -> SavingsPreview {
        SavingsPreview::from_prices(
            parse_price(&self.purchase_price).unwrap_or(0.0),
            parse_price(&self.regular_price).unwrap_or(0.0),
        )
    }
}

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Form field name, camelCase (`purchasePrice`, `accessUrl`, ...)
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Checks add-deal input before it reaches a repository.
///
/// Rules:
/// - product name, platform and category are required
/// - both prices must be positive numbers, purchase below regular
/// - purchase date is required and must parse
/// - access URL, if given, must be an absolute URL
/// - status must be a known status
///
/// Repositories do not re-check stored records; this is the only gate.
pub struct ValidationService;

impl ValidationService {
    pub fn new() -> Self {
        Self
    }

    /// All problems with `draft`, at most one per field. Empty means valid.
    pub fn check_draft(&self, draft: &DealDraft) -> Vec<FieldError> {
        self.parse_draft(draft).err().unwrap_or_default()
    }

    /// Convert a form into creation input, or fail with every field error joined.
    pub fn validate_draft(&self, draft: &DealDraft) -> Result<DealInput, CoreError> {
        self.parse_draft(draft).map_err(join_errors)
    }

    /// Field checks for input that is already typed (e.g. built in code or imported).
    pub fn check_input(&self, input: &DealInput) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require_text(&mut errors, "productName", &input.product_name, "Product name is required");
        require_text(&mut errors, "platform", &input.platform, "Platform is required");
        require_text(&mut errors, "category", &input.category, "Category is required");
        check_prices(
            &mut errors,
            Some(input.purchase_price),
            Some(input.regular_price),
        );
        if let Some(url) = input.access_url.as_deref() {
            check_url(&mut errors, url);
        }
        errors
    }

    pub fn validate_input(&self, input: &DealInput) -> Result<(), CoreError> {
        let errors = self.check_input(input);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(join_errors(errors))
        }
    }

    fn parse_draft(&self, draft: &DealDraft) -> Result<DealInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        require_text(&mut errors, "productName", &draft.product_name, "Product name is required");
        require_text(&mut errors, "platform", &draft.platform, "Platform is required");
        require_text(&mut errors, "category", &draft.category, "Category is required");

        let purchase_price = parse_price(&draft.purchase_price);
        let regular_price = parse_price(&draft.regular_price);
        check_prices(&mut errors, purchase_price, regular_price);

        let purchase_date = parse_date_field(&mut errors, &draft.purchase_date);

        let status = if draft.status.trim().is_empty() {
            Some(DealStatus::Active)
        } else {
            match draft.status.parse::<DealStatus>() {
                Ok(status) => Some(status),
                Err(_) => {
                    errors.push(FieldError::new(
                        "status",
                        "Status must be one of active, pending, expired, cancelled",
                    ));
                    None
                }
            }
        };

        let access_url = draft.access_url.trim();
        if !access_url.is_empty() {
            check_url(&mut errors, access_url);
        }

        match (purchase_price, regular_price, purchase_date, status) {
            (Some(purchase_price), Some(regular_price), Some(purchase_date), Some(status))
                if errors.is_empty() =>
            {
                Ok(DealInput {
                    product_name: draft.product_name.trim().to_string(),
                    platform: draft.platform.trim().to_string(),
                    category: draft.category.trim().to_string(),
                    purchase_price,
                    regular_price,
                    purchase_date,
                    status,
                    description: draft.description.trim().to_string(),
                    access_url: optional(access_url),
                    notes: optional(&draft.notes),
                    logo_url: optional(&draft.logo_url),
                })
            }
            _ => Err(errors),
        }
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::new()
    }
}

fn require_text(errors: &mut Vec<FieldError>, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

/// A purchase-below-regular violation replaces any purchase-price error.
fn check_prices(errors: &mut Vec<FieldError>, purchase: Option<f64>, regular: Option<f64>) {
    let purchase_ok = purchase.is_some_and(|p| p > 0.0);
    let regular_ok = regular.is_some_and(|r| r > 0.0);

    if let (Some(p), Some(r)) = (purchase, regular) {
        if p >= r {
            errors.push(FieldError::new(
                "purchasePrice",
                "Purchase price must be less than regular price",
            ));
        } else if !purchase_ok {
            errors.push(FieldError::new("purchasePrice", "Valid purchase price is required"));
        }
    } else if !purchase_ok {
        errors.push(FieldError::new("purchasePrice", "Valid purchase price is required"));
    }

    if !regular_ok {
        errors.push(FieldError::new("regularPrice", "Valid regular price is required"));
    }
}

fn parse_date_field(errors: &mut Vec<FieldError>, raw: &str) -> Option<NaiveDate> {
    if raw.trim().is_empty() {
        errors.push(FieldError::new("purchaseDate", "Purchase date is required"));
        return None;
    }
    match parse_purchase_date(raw) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError::new(
                "purchaseDate",
                "Purchase date must be MM/DD/YYYY or YYYY-MM-DD",
            ));
            None
        }
    }
}

fn check_url(errors: &mut Vec<FieldError>, raw: &str) {
    if url::Url::parse(raw.trim()).is_err() {
        errors.push(FieldError::new("accessUrl", "Please enter a valid URL"));
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .trim_start_matches('$')
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn join_errors(errors: Vec<FieldError>) -> CoreError {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    CoreError::ValidationError(joined)
}
