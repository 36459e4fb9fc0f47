use crate::error::Result;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::info;

const PUSH_FEED_BASE_URL: &str = "https://push.api.bbci.co.uk";
const FEED_MODULE: &str = "bbc-morph-football-scores-match-list-data";
const FEED_VERSION: &str = "2.4.6";

/// Client for the BBC push batch feed that carries per-match player actions.
pub struct PushFeedClient {
    client: Client,
}

impl PushFeedClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn feed_url(date: &str) -> String {
        format!(
            "{PUSH_FEED_BASE_URL}/batch?t=/data/{FEED_MODULE}/endDate/{date}/startDate/{date}\
             /todayDate/{date}/tournament/full-priority-order/version/{FEED_VERSION}\
             /withPlayerActions/true"
        )
    }

    /// Fetches the feed for one date and flattens the nested
    /// tournament/date/event structure into a single event list.
    pub async fn fetch_events(&self, date: &str) -> Result<Vec<Event>> {
        let url = Self::feed_url(date);
        info!("Fetching scorer feed for {}", date);

        let feed: PushFeed = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(flatten_events(feed))
    }
}

pub fn flatten_events(feed: PushFeed) -> Vec<Event> {
    let Some(payload) = feed.payload.into_iter().next() else {
        return Vec::new();
    };

    payload
        .body
        .match_data
        .into_iter()
        .flat_map(|tournament| tournament.tournament_dates_with_events.into_values())
        .flatten()
        .flat_map(|date_events| date_events.events)
        .collect()
}

// Feed shapes, kept tolerant with defaults: the batch endpoint drops whole
// sections rather than sending empty ones.

#[derive(Debug, Deserialize)]
pub struct PushFeed {
    #[serde(default)]
    pub payload: Vec<Payload>,
}

#[derive(Debug, Deserialize)]
pub struct Payload {
    pub body: PayloadBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadBody {
    #[serde(default)]
    pub match_data: Vec<TournamentData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentData {
    #[serde(default)]
    pub tournament_dates_with_events: HashMap<String, Vec<DateEvents>>,
}

#[derive(Debug, Deserialize)]
pub struct DateEvents {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub home_team: TeamSide,
    pub away_team: TeamSide,
}

impl Event {
    pub fn identity(&self) -> String {
        format!(
            "{} v. {}",
            self.home_team.name.abbreviation, self.away_team.name.abbreviation
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSide {
    pub name: TeamName,
    #[serde(default)]
    pub player_actions: Vec<PlayerActions>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TeamName {
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub full: String,
    #[serde(default)]
    pub last: String,
}

#[derive(Debug, Deserialize)]
pub struct PlayerActions {
    pub name: PlayerName,
    #[serde(default)]
    pub actions: Vec<PlayerAction>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerName {
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub full: String,
    #[serde(default)]
    pub last: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub display_time: String,
    #[serde(default)]
    pub added_time: i64,
    #[serde(default)]
    pub time_elapsed: i64,
    #[serde(default)]
    pub own_goal: bool,
    #[serde(default)]
    pub penalty: bool,
}
