pub(crate) mod dates;
pub(crate) mod fixture_service;
pub(crate) mod refresh;
pub(crate) mod scorers;
pub(crate) mod scraping;
pub(crate) mod sorting;
pub(crate) mod status;

pub use dates::DateKey;
pub use fixture_service::FixtureService;
pub use refresh::RefreshScheduler;
pub use scorers::ScorerService;
pub use scraping::ScrapingService;
