//! Meter point and consumption types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::GridSupplyPoint;

/// Profile class descriptions, indexed by class code
// https://en.wikipedia.org/wiki/Meter_Point_Administration_Number#Profile_Class_(PC)
pub const PROFILE_CLASS_DESCRIPTIONS: [&str; 9] = [
    "Half-hourly supply (import and export)",
    "Domestic unrestricted",
    "Domestic Economy meter of two or more rates",
    "Non-domestic unrestricted",
    "Non-domestic Economy 7",
    "Non-domestic, with maximum demand (MD) recording capability and with load factor (LF) less than or equal to 20%",
    "Non-domestic, with MD recording capability and with LF less than or equal to 30% and greater than 20%",
    "Non-domestic, with MD recording capability and with LF less than or equal to 40% and greater than 30%",
    "Non-domestic, with MD recording capability and with LF greater than 40% (also all non-half-hourly export MSIDs)",
];

/// Describe a profile class code, if it is one of the defined classes 0-8
pub fn profile_class_description(profile_class: u8) -> Option<&'static str> {
    PROFILE_CLASS_DESCRIPTIONS
        .get(usize::from(profile_class))
        .copied()
}

/// An electricity meter point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeterPoint {
    /// Meter Point Administration Number
    pub mpan: String,
    /// Profile class code of the meter
    pub profile_class: u8,
    /// Grid supply point the meter belongs to
    pub gsp: GridSupplyPoint,
}

impl MeterPoint {
    /// Human-readable description of the meter's profile class
    pub fn profile_description(&self) -> Option<&'static str> {
        profile_class_description(self.profile_class)
    }
}

/// A consumption reading for one interval.
///
/// The unit of `value` depends on the meter: kWh for electricity meters and
/// SMETS1 gas meters, cubic metres for SMETS2 gas meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consumption {
    #[serde(rename = "consumption")]
    pub value: f64,
    pub interval_start: DateTime<Utc>,
    pub interval_end: DateTime<Utc>,
}
