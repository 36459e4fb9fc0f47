mod clients;
mod scrapers;
mod storage;

pub use clients::push_feed::{flatten_events, Event, PushFeed, PushFeedClient, TeamSide};
pub use scrapers::MatchListScraper;
pub use storage::fs_store::FileSystemStore;
