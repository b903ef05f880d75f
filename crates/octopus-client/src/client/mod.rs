//! HTTP client for the Octopus Energy REST API.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use octopus_core::error::{OctopusError, OctopusResult};
use octopus_core::types::{Consumption, GridSupplyPoint, MeterPoint, Product};
use octopus_core::utils::{is_valid_postcode, normalize_postcode};

use crate::api::{GroupIdResult, MeterPointResponse, Page};

/// Production API endpoint
const DEFAULT_BASE_URL: &str = "https://api.octopus.energy/v1";

/// Timestamp format of the `period_from`/`period_to` filters
/// (e.g. `2020-01-02T12:23:34.000+0000`)
const PERIOD_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f+0000";

/// Hard cap on pages followed by the pagination walker. The service paginates
/// in the hundreds at most; a chain longer than this is treated as
/// non-terminating.
const MAX_PAGES: usize = 1_000;

/// Optional filters for consumption queries.
///
/// Unset fields are omitted from the request. Page sizes above the service
/// limit are rejected server-side; the client passes them through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumptionOptions {
    /// Include readings starting at or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Include readings starting before this instant
    pub to: Option<DateTime<Utc>>,
    /// Number of readings per page
    pub page_size: Option<u32>,
    /// Interval ordering, passed through verbatim (e.g. "period", "-period")
    pub order_by: Option<String>,
    /// Aggregation bucket, e.g. "hour", "day", "week"
    pub group_by: Option<String>,
}

impl ConsumptionOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(order_by) = &self.order_by {
            pairs.push(("order_by", order_by.clone()));
        }
        if let Some(group_by) = &self.group_by {
            pairs.push(("group_by", group_by.clone()));
        }
        if let Some(from) = self.from {
            pairs.push(("period_from", from.format(PERIOD_FORMAT).to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("period_to", to.format(PERIOD_FORMAT).to_string()));
        }
        pairs
    }
}

/// Client for the Octopus Energy API
#[derive(Debug, Clone)]
pub struct Client {
    /// Underlying HTTP client, supplied by the caller
    http: reqwest::Client,
    /// Base URL with the API key embedded as userinfo
    base_url: String,
}

impl Client {
    /// Create a client against the production endpoint
    pub fn new(api_key: &str, http: reqwest::Client) -> OctopusResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, http)
    }

    /// Create a client against a custom endpoint (e.g. a test server)
    pub fn with_base_url(
        base_url: &str,
        api_key: &str,
        http: reqwest::Client,
    ) -> OctopusResult<Self> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(OctopusError::EmptyApiKey);
        }

        let base_url = embed_api_key(base_url, api_key)?;
        Ok(Self {
            http,
            // Paths below carry their own leading slash.
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Retrieve the meter point registered for an MPAN.
    ///
    /// The group id reported by the service is resolved against the static
    /// grid supply point table; a miss means the service and the industry
    /// reference data disagree and is returned as an error.
    pub async fn get_meter_point(&self, mpan: &str) -> OctopusResult<MeterPoint> {
        let url = format!("{}/electricity-meter-points/{}/", self.base_url, mpan);
        let data: MeterPointResponse = self.get_json(&url, &[]).await?;

        let gsp = GridSupplyPoint::by_group_id(&data.gsp).ok_or_else(|| {
            OctopusError::UnknownGridSupplyPoint {
                group_id: data.gsp.clone(),
            }
        })?;

        Ok(MeterPoint {
            mpan: data.mpan,
            profile_class: data.profile_class,
            gsp,
        })
    }

    /// Resolve a postcode to its grid supply point.
    ///
    /// The postcode must be a well-formed UK postcode; spaces are stripped
    /// before it is sent. The industry lookup must return exactly one match.
    pub async fn get_grid_supply_point(&self, postcode: &str) -> OctopusResult<GridSupplyPoint> {
        if !is_valid_postcode(postcode) {
            return Err(OctopusError::InvalidPostcode {
                postcode: postcode.to_string(),
            });
        }

        let url = format!("{}/industry/grid-supply-points/", self.base_url);
        let query = [("postcode", normalize_postcode(postcode))];
        let page: Page<GroupIdResult> = self.get_json(&url, &query).await?;

        if page.results.len() != 1 {
            return Err(OctopusError::AmbiguousGridSupplyPoint {
                count: page.results.len(),
            });
        }

        let group_id = &page.results[0].group_id;
        GridSupplyPoint::by_group_id(group_id).ok_or_else(|| {
            OctopusError::UnknownGridSupplyPoint {
                group_id: group_id.clone(),
            }
        })
    }

    /// Retrieve consumption readings for a meter, in service order.
    ///
    /// Returns a single page; callers wanting more re-invoke with the
    /// filter's paging fields adjusted.
    pub async fn get_meter_consumption(
        &self,
        mpan: &str,
        serial_number: &str,
        options: &ConsumptionOptions,
    ) -> OctopusResult<Vec<Consumption>> {
        let url = format!(
            "{}/electricity-meter-points/{}/meters/{}/consumption/",
            self.base_url, mpan, serial_number
        );
        let page: Page<Consumption> = self.get_json(&url, &options.query_pairs()).await?;
        Ok(page.results)
    }

    /// List every product in the catalogue, following pagination
    pub async fn list_products(&self) -> OctopusResult<Vec<Product>> {
        self.get_paginated(format!("{}/products/", self.base_url))
            .await
    }

    /// Retrieve a single product by its code
    pub async fn get_product(&self, product_code: &str) -> OctopusResult<Product> {
        let url = format!("{}/products/{}/", self.base_url, product_code);
        self.get_json(&url, &[]).await
    }

    /// Perform one authenticated GET and decode the JSON body into `T`
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> OctopusResult<T> {
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| OctopusError::transport(url, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(OctopusError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| OctopusError::transport(url, e))?;
        serde_json::from_str(&body).map_err(|e| OctopusError::decode(url, e))
    }

    /// Follow `next` links from `first_url`, accumulating results in service
    /// order. A failure on any page fails the whole walk.
    async fn get_paginated<T: DeserializeOwned>(&self, first_url: String) -> OctopusResult<Vec<T>> {
        let mut results = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(first_url);

        while let Some(url) = next {
            // A cyclic or runaway `next` chain must not hang the caller.
            if !visited.insert(url.clone()) || visited.len() > MAX_PAGES {
                return Err(OctopusError::PaginationOverflow {
                    pages: visited.len(),
                    url,
                });
            }

            let page: Page<T> = self.get_json(&url, &[]).await?;
            tracing::debug!(
                %url,
                results = page.results.len(),
                count = ?page.count,
                "fetched page"
            );

            results.extend(page.results);
            next = page.next.filter(|next| !next.is_empty());
        }

        Ok(results)
    }
}

/// Embed the API key as the username of `base_url`.
///
/// The service authenticates with HTTP Basic where the key is the username
/// and the password is empty; reqwest promotes URL userinfo to an
/// Authorization header on each request.
fn embed_api_key(base_url: &str, api_key: &str) -> OctopusResult<String> {
    let mut url = Url::parse(base_url).map_err(|e| OctopusError::InvalidBaseUrl {
        url: base_url.to_string(),
        message: e.to_string(),
    })?;

    url.set_username(api_key)
        .map_err(|()| OctopusError::InvalidBaseUrl {
            url: base_url.to_string(),
            message: "URL cannot carry credentials".to_string(),
        })?;

    Ok(url.into())
}
