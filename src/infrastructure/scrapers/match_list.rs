use super::Selectors;
use crate::domain::{Category, Match};
use crate::error::Result;
use crate::services::status::resolve_status;
use scraper::{ElementRef, Html, Selector};

/// Walks the match-block -> list -> fixture structure of the scores page and
/// produces one `Category` per competition heading. Missing sub-nodes degrade
/// to empty fields; the markup drifts often enough that raising would make
/// every upstream rewrite an outage.
pub struct MatchListScraper {
    selectors: Selectors,
}

impl MatchListScraper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: Selectors::new()?,
        })
    }

    pub fn extract(&self, document: &Html) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();

        for block in document.select(&self.selectors.match_block) {
            let heading = text_of(block, &self.selectors.heading);
            let groups = self.collect_groups(block);

            let mut matches = Vec::new();
            for list in block.select(&self.selectors.match_list) {
                for fixture in list.select(&self.selectors.fixture) {
                    matches.push(self.extract_fixture(fixture, &groups));
                }
            }

            // Duplicate headings collapse into one category per run.
            match categories.iter_mut().find(|c| c.heading == heading) {
                Some(existing) => existing.matches.extend(matches),
                None => categories.push(Category { heading, matches }),
            }
        }

        categories
    }

    fn extract_fixture(&self, fixture: ElementRef, groups: &[GroupBlock]) -> Match {
        let (home_team, away_team) = self.team_pair(fixture);
        let status = text_of(fixture, &self.selectors.status);
        let kickoff_time = text_of(fixture, &self.selectors.kickoff_time);
        let win_message = text_of(fixture, &self.selectors.win_message);

        let resolved = resolve_status(&kickoff_time, &status);

        let group = groups
            .iter()
            .find(|g| {
                g.pairs
                    .iter()
                    .any(|(home, away)| *home == home_team && *away == away_team)
            })
            .map(|g| g.name.clone())
            .unwrap_or_default();

        Match {
            home_team,
            away_team,
            home_team_score: text_of(fixture, &self.selectors.home_score),
            away_team_score: text_of(fixture, &self.selectors.away_score),
            time: resolved.time,
            in_progress: resolved.in_progress,
            agg_score: resolved.agg_score,
            group,
            final_win_message: (!win_message.is_empty()).then_some(win_message),
            home_scorers: vec![],
            away_scorers: vec![],
        }
    }

    /// Group headers sit as siblings before the list that holds their
    /// fixtures; pairing each header with the team pairs of its following
    /// element lets fixtures look up their own group by team identity.
    fn collect_groups(&self, block: ElementRef) -> Vec<GroupBlock> {
        let mut groups = Vec::new();

        for header in block.select(&self.selectors.group_header) {
            let name = header.text().collect::<String>().trim().to_string();

            let Some(section) = header.next_siblings().find_map(ElementRef::wrap) else {
                continue;
            };

            let pairs = section
                .select(&self.selectors.fixture)
                .map(|fixture| self.team_pair(fixture))
                .collect();

            groups.push(GroupBlock { name, pairs });
        }

        groups
    }

    fn team_pair(&self, fixture: ElementRef) -> (String, String) {
        let abbrs: Vec<String> = fixture
            .select(&self.selectors.wrapper)
            .flat_map(|wrapper| wrapper.select(&self.selectors.abbr))
            .map(|abbr| abbr.text().collect::<String>().trim().to_string())
            .collect();

        let home = abbrs.first().cloned().unwrap_or_default();
        let away = abbrs.last().cloned().unwrap_or_default();
        (home, away)
    }
}

struct GroupBlock {
    name: String,
    pairs: Vec<(String, String)>,
}

/// Concatenated text of every node matching `selector`, like cheerio's
/// `.text()`. Adjacent visually-hidden spans merge, which is exactly how the
/// `TBCTo be Confirmed` artifact arises.
fn text_of(scope: ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}
