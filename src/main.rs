use chrono::Local;
use oscar_odds::{info_time, process::process_site, warn_time, Result, FILE_PATH};

#[tokio::main]
async fn main() -> Result<()> {
    let start_time = Local::now();
    let categories = process_site().await?;

    let empty: Vec<_> = categories
        .iter()
        .filter(|c| c.nominees.is_empty())
        .map(|c| c.title.as_str())
        .collect();
    if !empty.is_empty() {
        warn_time!("{} categories in {FILE_PATH} have no predictions: {:?}", empty.len(), empty);
    }
    info_time!(start_time, "Scraped {} categories", categories.len());

    Ok(())
}
