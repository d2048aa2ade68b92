//! Fetch a page body for tokenizing.

use anyhow::{bail, Context};
use tracing::info;
use url::Url;

/// Parse `raw` and require an http(s) scheme.
pub fn parse_page_url(raw: &str) -> anyhow::Result<Url> {
    let mut url = Url::parse(raw).with_context(|| format!("invalid url {raw:?}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("unsupported url scheme {:?}", url.scheme());
    }
    url.set_fragment(None);
    Ok(url)
}

async fn fetch_page_async(client: &reqwest::Client, url: Url) -> anyhow::Result<String> {
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let body = response.text().await?;
    info!(%url, bytes = body.len(), "fetched page");
    Ok(body)
}

/// Download the markup at `raw_url`.
pub fn fetch_html(raw_url: &str) -> anyhow::Result<String> {
    let url = parse_page_url(raw_url)?;
    let client = reqwest::Client::new();
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(fetch_page_async(&client, url))
}
