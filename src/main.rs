// Interactive link fetcher
//
// Lists "read more" article links for a featured topic and the downloadable
// files linked from any page. Set RUST_LOG=linkharvest=debug to trace requests.

use anyhow::Result;
use linkharvest::{LinkScraper, ScrapeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let scraper = LinkScraper::new(ScrapeConfig::default())?;
    linkharvest::shell::run(&scraper).await
}
