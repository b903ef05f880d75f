//! Octopus Energy API client
//!
//! This crate provides HTTP client functionality for the Octopus Energy REST
//! API: meter point lookup, grid supply point resolution by postcode,
//! half-hourly consumption retrieval and the product catalogue.
//!
//! Authentication uses the service's scheme of HTTP Basic with the API key as
//! username and an empty password; the key is embedded into the base URL at
//! construction time.
//!
//! ## Quick example
//!
//! ```no_run
//! # async fn run() -> octopus_client::OctopusResult<()> {
//! use octopus_client::Client;
//!
//! let client = Client::new("sk_live_abc123", reqwest::Client::new())?;
//!
//! let meter = client.get_meter_point("2000012345678").await?;
//! println!("{} is supplied via {}", meter.mpan, meter.gsp.name);
//!
//! let gsp = client.get_grid_supply_point("SW1A 1AA").await?;
//! println!("operated by {}", gsp.operator);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;

// Re-export main types
pub use client::{Client, ConsumptionOptions};
pub use octopus_core::error::{OctopusError, OctopusResult};
pub use octopus_core::types::{
    Consumption, GridSupplyPoint, Link, MeterPoint, Product, Tariff, TariffTable,
    GRID_SUPPLY_POINTS,
};
