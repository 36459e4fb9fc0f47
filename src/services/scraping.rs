use crate::domain::Category;
use crate::error::Result;
use crate::infrastructure::MatchListScraper;
use crate::services::dates::DateKey;
use reqwest::Client;
use scraper::Html;
use tracing::info;

/// Fetches the scores page for a date and runs the match-list extraction.
pub struct ScrapingService {
    client: Client,
    scraper: MatchListScraper,
}

impl ScrapingService {
    pub fn new(client: Client) -> Result<Self> {
        Ok(Self {
            client,
            scraper: MatchListScraper::new()?,
        })
    }

    pub async fn scrape_day(&self, date: &DateKey) -> Result<Vec<Category>> {
        let url = date.fixtures_url();
        info!("Scraping fixtures from {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(self.extract_from_html(&body))
    }

    /// Extraction entry point for raw HTML, used by tests and by anything
    /// that already holds a page body.
    pub fn extract_from_html(&self, body: &str) -> Vec<Category> {
        let document = Html::parse_document(body);
        self.scraper.extract(&document)
    }
}
