//! Product and tariff types.
//!
//! Decoded as-is from the catalogue endpoints; the nested tariff tables keep
//! the service's own keying (GSP group id, then payment method).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nested tariff tables keyed by GSP group id and then by payment method
pub type TariffTable = HashMap<String, HashMap<String, Tariff>>;

/// An energy product.
///
/// Listing endpoints return a reduced payload, so every field falls back to
/// its default when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub code: String,
    /// "IMPORT" or "EXPORT"
    pub direction: String,
    pub full_name: String,
    pub display_name: String,
    pub description: String,
    pub is_variable: bool,
    pub is_green: bool,
    pub is_tracker: bool,
    pub is_prepay: bool,
    pub is_business: bool,
    pub is_restricted: bool,
    /// Contract length in months, if fixed-term
    pub term: Option<u32>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub links: Vec<Link>,
    pub single_register_electricity_tariffs: TariffTable,
    pub dual_register_electricity_tariffs: TariffTable,
    pub single_register_gas_tariffs: TariffTable,
}

/// A hyperlink attached to a product or tariff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub method: String,
    pub rel: String,
}

/// Charges and discounts of a tariff, with and without VAT
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tariff {
    pub code: String,
    pub standing_charge_exc_vat: f64,
    pub standing_charge_inc_vat: f64,
    pub online_discount_exc_vat: f64,
    pub online_discount_inc_vat: f64,
    pub dual_fuel_discount_exc_vat: f64,
    pub dual_fuel_discount_inc_vat: f64,
    pub exit_fees_exc_vat: f64,
    pub exit_fees_inc_vat: f64,
    pub links: Vec<Link>,
    pub standard_unit_rate_exc_vat: f64,
    pub standard_unit_rate_inc_vat: f64,
}
