use crate::domain::Category;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Persisted shape for one day of fixtures. `fixture_data` stays a
/// JSON-encoded string so the record matches what the frontend pool expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: String,
    pub fixture_data: String,
}

impl DayRecord {
    pub fn new(date: impl Into<String>, categories: &[Category]) -> Result<Self> {
        Ok(Self {
            date: date.into(),
            fixture_data: serde_json::to_string(categories)?,
        })
    }

    pub fn categories(&self) -> Result<Vec<Category>> {
        Ok(serde_json::from_str(&self.fixture_data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Match;

    #[test]
    fn fixture_data_round_trips() {
        let categories = vec![Category {
            heading: "La Liga".to_string(),
            matches: vec![Match {
                home_team: "BAR".to_string(),
                away_team: "RMA".to_string(),
                home_team_score: String::new(),
                away_team_score: String::new(),
                time: "20:00".to_string(),
                in_progress: false,
                agg_score: None,
                group: String::new(),
                final_win_message: None,
                home_scorers: vec![],
                away_scorers: vec![],
            }],
        }];

        let record = DayRecord::new("2023-04-01", &categories).unwrap();
        assert_eq!(record.date, "2023-04-01");
        assert_eq!(record.categories().unwrap(), categories);
    }
}
