use anyhow::Result;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;

const ACCEPT: &str = "text/html,application/xhtml+xml,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Creates a reqwest client with browser-like headers shared by the page
/// fetch and the robots.txt probe.
pub fn build_http_client(timeout_secs: u64) -> Result<Client> {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::ACCEPT, ACCEPT.parse()?);
    headers.insert(header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE.parse()?);

    let client = ClientBuilder::new()
        .user_agent(format!(
            "Mozilla/5.0 (compatible; pagegrade/{})",
            env!("CARGO_PKG_VERSION")
        ))
        .default_headers(headers)
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;

    Ok(client)
}
