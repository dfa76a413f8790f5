use crate::models::{RetrievalFacts, RobotsStatus};
use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use url::Url;

/// Fetches the page body and probes robots.txt concurrently, then folds the
/// transport-level observations into `RetrievalFacts`.
///
/// The robots probe has no dependency on page content, so the two requests
/// run in parallel. Only the page fetch can fail; a failed probe degrades to
/// `RobotsStatus::Unavailable`.
pub async fn retrieve(client: &Client, url: &Url) -> Result<(String, RetrievalFacts)> {
    let (html, robots_status) = tokio::join!(fetch_page(client, url), probe_robots(client, url));

    let facts = RetrievalFacts {
        is_secure_transport: url.scheme() == "https",
        robots_status,
    };

    Ok((html?, facts))
}

/// Fetches the target page as text. All failure causes collapse into one
/// generic error; callers never see the analysis engine run on this path.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .context("Page unreachable or blocked")?;

    tracing::debug!(url = %url, status = %response.status(), "fetched page");

    response
        .text()
        .await
        .context("Page unreachable or blocked")
}

/// The well-known robots.txt location for the page's origin.
pub fn robots_url(base_url: &Url) -> Url {
    let mut url = base_url.clone();
    url.set_path("/robots.txt");
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Header-only probe of `<origin>/robots.txt`.
///
/// Mapping: any success is `Present`, 404 is `Absent`, 403 is `Restricted`,
/// and every other status or transport failure is `Unavailable`. This never
/// returns an error, so a broken probe cannot abort the analysis.
pub async fn probe_robots(client: &Client, base_url: &Url) -> RobotsStatus {
    let url = robots_url(base_url);

    match client.head(url.as_str()).send().await {
        Ok(response) => match response.status() {
            status if status.is_success() => RobotsStatus::Present,
            StatusCode::NOT_FOUND => RobotsStatus::Absent,
            StatusCode::FORBIDDEN => RobotsStatus::Restricted,
            status => {
                tracing::info!(url = %url, status = %status, "unexpected robots.txt status");
                RobotsStatus::Unavailable
            }
        },
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "robots.txt probe failed");
            RobotsStatus::Unavailable
        }
    }
}
