use chrono::Local;
use reqwest::Client;

use crate::{info_time, Result};

/// Requests the page and returns a `Result<String>` containing the HTML.
/// Any transport error or non-2xx status is returned as `Error::Reqwest`.
/// The body is decoded using the charset from `Content-Type`, UTF-8 otherwise.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let start_time = Local::now();
    info_time!("Requesting page: {url}");

    let res = client.get(url).send().await?.error_for_status()?;
    let html = res.text().await?;

    info_time!(start_time, "Fetched {} bytes", html.len());
    Ok(html)
}
