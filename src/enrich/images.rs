//! Place image lookup via an encyclopedia REST page-summary endpoint.

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::generation::http::{shared_client, status_to_error};

/// Look up a representative image URL for a place.
///
/// Returns `None` on any failure; the error is logged at debug level
/// only, since a missing image must not degrade the rest of the plan.
pub async fn place_image(base_url: &str, place: &str) -> Option<String> {
    match fetch_thumbnail(base_url, place).await {
        Ok(url) => url,
        Err(err) => {
            debug!(place, error = %err, "place image lookup failed");
            None
        }
    }
}

async fn fetch_thumbnail(base_url: &str, place: &str) -> Result<Option<String>> {
    let title = place.trim().replace(' ', "_");
    let url = format!("{}/page/summary/{}", base_url.trim_end_matches('/'), title);

    let resp = shared_client().get(&url).send().await?;
    let status = resp.status().as_u16();
    if !(200..300).contains(&status) {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_to_error(status, &body));
    }

    let summary: PageSummary = resp.json().await?;
    Ok(summary
        .thumbnail
        .or(summary.originalimage)
        .map(|img| img.source))
}

#[derive(Deserialize)]
struct PageSummary {
    thumbnail: Option<ImageRef>,
    originalimage: Option<ImageRef>,
}

#[derive(Deserialize)]
struct ImageRef {
    source: String,
}
