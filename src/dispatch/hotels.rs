//! Hotel search over a credential failover set.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::generation::http::{shared_client, status_to_error};

use super::{dispatch, CredentialSet};

/// Only the first few search results are ever shown.
const MAX_RESULTS: usize = 5;

/// A hotel search result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub name: String,
    pub location: Option<String>,
    pub rating: Option<f64>,
    pub price: Option<String>,
}

/// Client for the hotel search service.
pub struct HotelSearchClient {
    base_url: String,
    api_host: Option<String>,
    credentials: CredentialSet,
}

impl HotelSearchClient {
    pub fn new(base_url: impl Into<String>, credentials: CredentialSet) -> Self {
        let base_url = base_url.into();
        let api_host = reqwest::Url::parse(&base_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
        Self {
            base_url,
            api_host,
            credentials,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.hotel_base_url.clone(), config.hotel_api_keys.clone())
    }

    /// Search for hotels matching a free-text query.
    ///
    /// Credentials are tried in configured order; only exhaustion of the
    /// whole set surfaces as an error. Results are filtered to hotel
    /// entries and truncated to the first [`MAX_RESULTS`].
    pub async fn search(&self, query: &str) -> Result<Vec<Hotel>> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));

        dispatch(&self.credentials, |key| {
            let url = url.clone();
            let api_host = self.api_host.clone();
            async move {
                let mut req = shared_client()
                    .get(&url)
                    .query(&[("query", query)])
                    .header("x-api-key", &key);
                if let Some(host) = &api_host {
                    req = req.header("x-api-host", host);
                }

                let resp = req.send().await?;
                let status = resp.status().as_u16();
                if !(200..300).contains(&status) {
                    let body = resp.text().await.unwrap_or_default();
                    return Err(status_to_error(status, &body));
                }

                let data: SearchResponse = resp.json().await?;
                Ok(data
                    .data
                    .into_iter()
                    .filter(|entry| entry.result_type == "hotel")
                    .take(MAX_RESULTS)
                    .map(|entry| Hotel {
                        name: entry.name,
                        location: entry.location,
                        rating: entry.rating,
                        price: entry.price,
                    })
                    .collect())
            }
        })
        .await
    }
}

// Wire types. Unknown entry kinds deserialize fine and are filtered out
// by the discriminator.

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchEntry>,
}

#[derive(Deserialize)]
struct SearchEntry {
    #[serde(default)]
    result_type: String,
    #[serde(default)]
    name: String,
    location: Option<String>,
    rating: Option<f64>,
    price: Option<String>,
}
