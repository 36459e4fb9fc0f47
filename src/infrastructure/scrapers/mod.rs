mod match_list;

pub use match_list::MatchListScraper;

use crate::error::{FootballError, Result};
use scraper::Selector;

/// CSS selectors for the BBC scores/fixtures markup, parsed once. Any
/// upstream class rename shows up here first.
pub struct Selectors {
    pub match_block: Selector,
    pub heading: Selector,
    pub match_list: Selector,
    pub fixture: Selector,
    pub wrapper: Selector,
    pub abbr: Selector,
    pub status: Selector,
    pub kickoff_time: Selector,
    pub home_score: Selector,
    pub away_score: Selector,
    pub win_message: Selector,
    pub group_header: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            match_block: parse(".qa-match-block")?,
            heading: parse(".sp-c-match-list-heading")?,
            match_list: parse(".gs-o-list-ui")?,
            fixture: parse(".sp-c-fixture")?,
            wrapper: parse(".sp-c-fixture__wrapper")?,
            abbr: parse("abbr")?,
            status: parse(".sp-c-fixture__status")?,
            kickoff_time: parse(".sp-c-fixture__number--time")?,
            home_score: parse(".sp-c-fixture__number--home")?,
            away_score: parse(".sp-c-fixture__number--away")?,
            win_message: parse(".sp-c-fixture__win-message")?,
            group_header: parse(".gs-u-mt")?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| FootballError::Selector(e.to_string()))
}
