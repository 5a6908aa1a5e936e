use std::io::Write;
use std::path::Path;

use chrono::Local;

use crate::model::{Category, ExtractProfile};
use crate::parse::parse_html;
use crate::request::fetch_page;
use crate::write::write_predictions;
use crate::{info_time, Result, FILE_PATH, ODDS_URL, PROFILE, SUCCESS_MESSAGE};

/// Scrapes the odds page with the crate's fixed URL, output path and profile,
/// confirming on stdout.
pub async fn process_site() -> Result<Vec<Category>> {
    run(ODDS_URL, FILE_PATH, PROFILE, &mut std::io::stdout()).await
}

/// fetch -> parse -> write, one after another, then the confirmation line goes to `out`.
/// Nothing is written (file or `out`) if fetching or parsing fails.
pub async fn run(
    url: &str,
    path: impl AsRef<Path>,
    profile: ExtractProfile,
    out: &mut (impl Write + Send),
) -> Result<Vec<Category>> {
    let start_time = Local::now();
    info_time!("Started scraping");

    let client = reqwest::Client::new();
    let html = fetch_page(&client, url).await?;
    let categories = parse_html(html, profile).await?;
    write_predictions(path, &categories).await?;

    writeln!(out, "{SUCCESS_MESSAGE}")?;
    out.flush()?;
    info_time!(start_time, "Finished scraping.");
    Ok(categories)
}
