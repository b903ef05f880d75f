//! Core data types for the Octopus Energy API.
//!
//! This module provides the fundamental types used throughout the client:
//! - Grid supply point reference data
//! - Meter point and consumption types
//! - Product and tariff types

pub mod gsp;
pub mod meter;
pub mod product;

// Re-export all public types
pub use gsp::{GridSupplyPoint, GRID_SUPPLY_POINTS};
pub use meter::{profile_class_description, Consumption, MeterPoint, PROFILE_CLASS_DESCRIPTIONS};
pub use product::{Link, Product, Tariff, TariffTable};
