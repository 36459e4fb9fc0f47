use crate::domain::{Category, Match, Scorer};
use crate::error::Result;
use crate::infrastructure::{Event, PushFeedClient, TeamSide};
use crate::services::dates::DateKey;
use strsim::normalized_levenshtein;
use tracing::debug;

/// Attaches goal scorers from the push feed to already-extracted categories.
/// The join is best-effort: the feed and the scores page abbreviate team
/// names independently, so a miss leaves the scorer lists empty.
pub struct ScorerService {
    client: PushFeedClient,
}

impl ScorerService {
    pub fn new(client: PushFeedClient) -> Self {
        Self { client }
    }

    pub async fn events_for(&self, date: &DateKey) -> Result<Vec<Event>> {
        self.client.fetch_events(&date.as_string()).await
    }
}

pub fn attach_scorers(categories: Vec<Category>, events: &[Event]) -> Vec<Category> {
    categories
        .into_iter()
        .map(|category| Category {
            heading: category.heading,
            matches: category
                .matches
                .into_iter()
                .map(|m| attach_to_match(m, events))
                .collect(),
        })
        .collect()
}

fn attach_to_match(mut m: Match, events: &[Event]) -> Match {
    let identity = m.identity();

    match events.iter().find(|event| event.identity() == identity) {
        Some(event) => {
            m.home_scorers = goal_scorers(&event.home_team);
            m.away_scorers = goal_scorers(&event.away_team);
        }
        None => {
            // Surface the miss so naming drift between the two sources is
            // visible instead of silently empty.
            if let Some((closest, similarity)) = closest_identity(&identity, events) {
                debug!(
                    "No scorer feed event for '{}'; closest was '{}' ({:.2})",
                    identity, closest, similarity
                );
            }
        }
    }

    m
}

/// Accumulates `goal` actions into an ordered scorer list, one entry per
/// player with every display time they scored at.
fn goal_scorers(team: &TeamSide) -> Vec<Scorer> {
    let mut scorers: Vec<Scorer> = Vec::new();

    for player in &team.player_actions {
        for action in &player.actions {
            if action.kind != "goal" {
                continue;
            }

            match scorers.iter_mut().find(|s| s.name == player.name.full) {
                Some(scorer) => scorer.times.push(action.display_time.clone()),
                None => scorers.push(Scorer {
                    name: player.name.full.clone(),
                    times: vec![action.display_time.clone()],
                }),
            }
        }
    }

    scorers
}

fn closest_identity(identity: &str, events: &[Event]) -> Option<(String, f64)> {
    events
        .iter()
        .map(|event| {
            let candidate = event.identity();
            let similarity = normalized_levenshtein(identity, &candidate);
            (candidate, similarity)
        })
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}
