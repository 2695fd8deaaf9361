//! Shared value types used across resources.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form string metadata attached to accounts and transfers.
pub type Metadata = BTreeMap<String, String>;

/// A monetary amount in the currency's minor unit.
///
/// `value` is an integer count of cents (for USD) to avoid floating point drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// ISO 4217 currency code, e.g. `"USD"`.
    pub currency: String,
    /// Quantity in the smallest unit of the currency.
    pub value: i64,
}

impl Amount {
    /// Create a USD amount from cents.
    #[must_use]
    pub fn usd(cents: i64) -> Self {
        Self {
            currency: "USD".to_string(),
            value: cents,
        }
    }
}

/// A monetary amount with up to nine decimal places.
///
/// Used where sub-cent precision matters (issuing authorizations, fees).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountDecimal {
    /// ISO 4217 currency code.
    pub currency: String,
    /// Decimal value in whole currency units, e.g. `"12.987654321"`.
    pub value_decimal: String,
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// First address line.
    pub address_line1: String,
    /// Second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    /// City.
    pub city: String,
    /// Two-letter state or province code.
    pub state_or_province: String,
    /// Postal code.
    pub postal_code: String,
    /// Two-letter country code.
    pub country: String,
}

/// A phone number split into country code and national number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// National number.
    pub number: String,
    /// Country calling code, e.g. `1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Skip/count paging for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Number of items to skip.
    pub skip: Option<u32>,
    /// Maximum number of items to return.
    pub count: Option<u32>,
}

impl Pagination {
    /// Request a single page of `count` items after skipping `skip`.
    #[must_use]
    pub const fn page(skip: u32, count: u32) -> Self {
        Self {
            skip: Some(skip),
            count: Some(count),
        }
    }

    /// Render as query parameters, omitting unset values.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Some(skip) = self.skip {
            params.push(("skip", skip.to_string()));
        }
        if let Some(count) = self.count {
            params.push(("count", count.to_string()));
        }
        params
    }
}

/// Serialize a unit enum to its wire string, for use in query parameters.
pub(crate) fn wire_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => String::new(),
    }
}

/// Format a timestamp the way list filters expect it.
pub(crate) fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
