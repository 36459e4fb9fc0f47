use serde::{Deserialize, Serialize};

/// One competition heading and the matches grouped under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub heading: String,
    pub matches: Vec<Match>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub home_team: String,
    pub away_team: String,
    /// Empty string means the match has not started yet.
    pub home_team_score: String,
    pub away_team_score: String,
    /// Kickoff clock time, `FT`, `HT`, `Postponed`, a live minute marker
    /// (`45'`), a free-text cancellation message, or `TBC (To be Confirmed)`.
    pub time: String,
    pub in_progress: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agg_score: Option<String>,
    /// Group-stage label, empty when the match is not part of a group.
    #[serde(default)]
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_win_message: Option<String>,
    #[serde(default)]
    pub home_scorers: Vec<Scorer>,
    #[serde(default)]
    pub away_scorers: Vec<Scorer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorer {
    pub name: String,
    pub times: Vec<String>,
}

impl Match {
    /// Identity string used to join a scraped fixture against the push feed.
    pub fn identity(&self) -> String {
        format!("{} v. {}", self.home_team, self.away_team)
    }

    /// Both scores present. Together with `in_progress == false` this is the
    /// "finished" presentation tier.
    pub fn has_score(&self) -> bool {
        !self.home_team_score.is_empty() && !self.away_team_score.is_empty()
    }

    pub fn not_started(&self) -> bool {
        self.home_team_score.is_empty() && self.away_team_score.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_category() -> Category {
        Category {
            heading: "Premier League".to_string(),
            matches: vec![Match {
                home_team: "ARS".to_string(),
                away_team: "CHE".to_string(),
                home_team_score: "2".to_string(),
                away_team_score: "1".to_string(),
                time: "FT".to_string(),
                in_progress: false,
                agg_score: Some("Agg: 3-2".to_string()),
                group: String::new(),
                final_win_message: Some("Arsenal win 4-2 on penalties".to_string()),
                home_scorers: vec![Scorer {
                    name: "Bukayo Saka".to_string(),
                    times: vec!["12'".to_string(), "67'".to_string()],
                }],
                away_scorers: vec![],
            }],
        }
    }

    #[test]
    fn serde_round_trip_is_lossless() {
        let categories = vec![sample_category()];
        let encoded = serde_json::to_string(&categories).unwrap();
        let decoded: Vec<Category> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, categories);
    }

    #[test]
    fn matches_serialize_in_camel_case() {
        let encoded = serde_json::to_string(&sample_category()).unwrap();
        assert!(encoded.contains("homeTeamScore"));
        assert!(encoded.contains("finalWinMessage"));
        assert!(!encoded.contains("home_team"));
    }

    #[test]
    fn identity_joins_teams_with_v_separator() {
        let category = sample_category();
        assert_eq!(category.matches[0].identity(), "ARS v. CHE");
    }

    #[test]
    fn score_presence_drives_started_state() {
        let mut m = sample_category().matches.remove(0);
        assert!(m.has_score());
        assert!(!m.not_started());

        m.home_team_score.clear();
        m.away_team_score.clear();
        assert!(!m.has_score());
        assert!(m.not_started());
    }
}
