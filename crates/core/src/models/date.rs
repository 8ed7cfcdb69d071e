use chrono::{DateTime, NaiveDate};

use crate::errors::CoreError;

/// Canonical wire format for purchase dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format used by the add-deal form (e.g. "01/15/2024").
pub const DISPLAY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a purchase date from any of the accepted spellings:
/// ISO (`2024-01-15`), display (`01/15/2024`) or an RFC 3339 timestamp
/// (`2024-01-15T10:30:00.000Z`, date part kept).
pub fn parse_purchase_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidDate("purchase date is empty".into()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DISPLAY_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.date_naive());
    }

    Err(CoreError::InvalidDate(format!(
        "'{trimmed}' is not YYYY-MM-DD, MM/DD/YYYY or an RFC 3339 timestamp"
    )))
}

/// Render a date the way the add-deal form shows it.
#[must_use]
pub fn to_display(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Serde adapter: read any accepted spelling, always write ISO.
pub mod purchase_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_purchase_date, ISO_DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(ISO_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_purchase_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Same as [`purchase_date`] for optional fields (patches).
pub mod optional_purchase_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_purchase_date, ISO_DATE_FORMAT};

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_some(&d.format(ISO_DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| parse_purchase_date(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
