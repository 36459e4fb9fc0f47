use crate::domain::{Category, Match};
use std::cmp::Ordering;

/// Competitions pinned to the top of the page, most popular first. Headings
/// absent from this list sort alphabetically after the pinned ones.
pub const PRIORITY_CATEGORIES: &[&str] = &[
    "Premier League",
    "Champions League",
    "Europa League",
    "Europa Conference League",
    "FA Cup",
    "League Cup",
    "Championship",
    "La Liga",
    "Spanish La Liga",
    "Bundesliga",
    "German Bundesliga",
    "Serie A",
    "Italian Serie A",
    "Ligue 1",
    "French Ligue 1",
    "Scottish Premiership",
    "Women's Super League",
    "World Cup",
    "International Friendlies",
];

/// Orders categories by priority-list position (alphabetical for the rest)
/// and the matches inside each by live -> finished -> not started. Both
/// passes are stable, so sorting is idempotent.
pub fn sort_categories(mut categories: Vec<Category>) -> Vec<Category> {
    categories.sort_by(|a, b| compare_headings(&a.heading, &b.heading));

    for category in &mut categories {
        category.matches.sort_by_key(match_tier);
    }

    categories
}

fn compare_headings(a: &str, b: &str) -> Ordering {
    let a_index = PRIORITY_CATEGORIES.iter().position(|&heading| heading == a);
    let b_index = PRIORITY_CATEGORIES.iter().position(|&heading| heading == b);

    match (a_index, b_index) {
        (None, None) => a.cmp(b),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a_index), Some(b_index)) => a_index.cmp(&b_index),
    }
}

fn match_tier(m: &Match) -> (u8, u8, u8) {
    (
        u8::from(!m.in_progress),
        u8::from(!m.has_score()),
        u8::from(!m.not_started()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(heading: &str) -> Category {
        Category {
            heading: heading.to_string(),
            matches: vec![],
        }
    }

    fn match_with(home: &str, home_score: &str, away_score: &str, in_progress: bool) -> Match {
        Match {
            home_team: home.to_string(),
            away_team: "AWY".to_string(),
            home_team_score: home_score.to_string(),
            away_team_score: away_score.to_string(),
            time: String::new(),
            in_progress,
            agg_score: None,
            group: String::new(),
            final_win_message: None,
            home_scorers: vec![],
            away_scorers: vec![],
        }
    }

    fn headings(categories: &[Category]) -> Vec<&str> {
        categories.iter().map(|c| c.heading.as_str()).collect()
    }

    #[test]
    fn priority_categories_come_before_alphabetical_rest() {
        let sorted = sort_categories(vec![
            category("La Liga"),
            category("Zyx Cup"),
            category("Premier League"),
            category("Andorra Primera Divisio"),
        ]);

        assert_eq!(
            headings(&sorted),
            vec![
                "Premier League",
                "La Liga",
                "Andorra Primera Divisio",
                "Zyx Cup"
            ]
        );
    }

    #[test]
    fn matches_sort_into_live_finished_not_started_tiers() {
        let mut cat = category("Premier League");
        cat.matches = vec![
            match_with("a", "2", "0", true),
            match_with("b", "1", "1", false),
            match_with("c", "", "", false),
            match_with("d", "0", "3", false),
        ];

        let sorted = sort_categories(vec![cat]);
        let order: Vec<&str> = sorted[0]
            .matches
            .iter()
            .map(|m| m.home_team.as_str())
            .collect();

        // Relative order inside each tier is preserved: b before d.
        assert_eq!(order, vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut cat = category("Serie A");
        cat.matches = vec![
            match_with("a", "", "", false),
            match_with("b", "1", "0", true),
            match_with("c", "2", "2", false),
        ];

        let once = sort_categories(vec![category("Zyx Cup"), cat]);
        let twice = sort_categories(once.clone());
        assert_eq!(once, twice);
    }
}
