use crate::domain::storage::Storage;
use crate::domain::{Category, DayRecord};
use crate::error::Result;
use crate::services::dates::DateKey;
use crate::services::scorers::{attach_scorers, ScorerService};
use crate::services::scraping::ScrapingService;
use crate::services::sorting::sort_categories;
use std::sync::Arc;
use tracing::{info, warn};

/// Orchestrates the per-date pipeline: scrape, enrich with scorers, sort,
/// and (on the background path) persist into the date-keyed pool.
pub struct FixtureService {
    scraping: ScrapingService,
    scorers: ScorerService,
    store: Arc<dyn Storage>,
}

impl FixtureService {
    pub fn new(
        scraping: ScrapingService,
        scorers: ScorerService,
        store: Arc<dyn Storage + 'static>,
    ) -> Self {
        Self {
            scraping,
            scorers,
            store,
        }
    }

    /// Query path: resolve a tab selector and return sorted categories.
    /// "Today" is served from the pool when a record exists there; everything
    /// else is scraped fresh.
    pub async fn matches_for_tab(&self, tab: &str) -> Result<Vec<Category>> {
        let date = DateKey::resolve(tab)?;

        if date == DateKey::today() {
            if let Some(pooled) = self.pooled_day(&date)? {
                info!("Serving {} from the pool", date);
                return Ok(sort_categories(pooled));
            }
        }

        self.matches_for_date(&date).await
    }

    pub async fn matches_for_date(&self, date: &DateKey) -> Result<Vec<Category>> {
        let categories = self.scrape_and_enrich(date).await?;
        Ok(sort_categories(categories))
    }

    /// Background path: refresh one date and fully replace its pool record.
    pub async fn refresh_day(&self, date: &DateKey) -> Result<()> {
        let categories = self.scrape_and_enrich(date).await?;
        let record = DayRecord::new(date.as_string(), &categories)?;
        self.store.upsert_day(&record)?;
        info!("Upserted {} categories for {}", categories.len(), date);
        Ok(())
    }

    fn pooled_day(&self, date: &DateKey) -> Result<Option<Vec<Category>>> {
        self.store
            .load_day(&date.as_string())?
            .map(|record| record.categories())
            .transpose()
    }

    /// A scorer-feed failure degrades to un-enriched categories; losing the
    /// goal scorers must not lose the fixtures.
    async fn scrape_and_enrich(&self, date: &DateKey) -> Result<Vec<Category>> {
        let categories = self.scraping.scrape_day(date).await?;

        let events = match self.scorers.events_for(date).await {
            Ok(events) => events,
            Err(e) => {
                warn!("Scorer feed unavailable for {}: {}", date, e);
                Vec::new()
            }
        };

        Ok(attach_scorers(categories, &events))
    }
}
