//! Where a chart app gets its medal CSV from.

use anyhow::{anyhow, bail};
use oly_medals::MedalRecord;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataSource {
    /// CSV embedded at compile time (see the apps' `build.rs`).
    Embedded(&'static str),
    /// CSV fetched from a URL relative to the page, once, at startup.
    Fetch(&'static str),
}

impl DataSource {
    pub async fn load_text(self) -> anyhow::Result<String> {
        match self {
            DataSource::Embedded(csv) => Ok(csv.to_string()),
            DataSource::Fetch(url) => fetch_text(url).await,
        }
    }

    /// Load and parse the medal records. Fails on unreadable data or on any
    /// row with a non-numeric year.
    pub async fn load_records(self) -> anyhow::Result<Vec<MedalRecord>> {
        let text = self.load_text().await?;
        Ok(oly_medals::load_records(&text)?)
    }
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    log::info!("[OLY] fetching {}", url);
    let window = web_sys::window().ok_or_else(|| anyhow!("no browser window available"))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch of {} failed: {:?}", url, e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch of {} did not return a Response", url))?;
    if !response.ok() {
        bail!("fetch of {} failed with HTTP status {}", url, response.status());
    }

    let body = response
        .text()
        .map_err(|e| anyhow!("reading body of {} failed: {:?}", url, e))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| anyhow!("reading body of {} failed: {:?}", url, e))?;
    text.as_string()
        .ok_or_else(|| anyhow!("body of {} is not text", url))
}
