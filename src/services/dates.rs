use crate::error::{FootballError, Result};
use chrono::{Days, Local, NaiveDate};
use std::fmt;

pub const FIXTURES_BASE_URL: &str = "https://www.bbc.com/sport/football/scores-fixtures";

/// Accepted tab formats besides the literal `Today`: the canonical key and
/// the JS `toDateString()` shape the frontend tabs use ("Mon Apr 03 2023").
const TAB_FORMATS: &[&str] = &["%Y-%m-%d", "%a %b %d %Y"];

/// Canonical date key for one day of fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Resolves a frontend tab selector against the local current date.
    pub fn resolve(tab: &str) -> Result<Self> {
        Self::resolve_on(tab, Local::now().date_naive())
    }

    /// Same as `resolve`, with "today" injected for testability.
    pub fn resolve_on(tab: &str, today: NaiveDate) -> Result<Self> {
        if tab == "Today" {
            return Ok(Self(today));
        }

        TAB_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(tab, format).ok())
            .map(Self)
            .ok_or_else(|| FootballError::InvalidDate(tab.to_string()))
    }

    /// Zero-padded `YYYY-MM-DD` key used for URLs and storage.
    pub fn as_string(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn fixtures_url(&self) -> String {
        format!("{}/{}", FIXTURES_BASE_URL, self.as_string())
    }

    pub fn offset(&self, days: i64) -> Self {
        let date = if days >= 0 {
            self.0 + Days::new(days as u64)
        } else {
            self.0 - Days::new(days.unsigned_abs())
        };
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, dayno: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, dayno).unwrap()
    }

    #[test]
    fn today_tab_matches_iso_tab_for_same_day() {
        let today = day(2023, 4, 3);
        let from_today = DateKey::resolve_on("Today", today).unwrap();
        let from_iso = DateKey::resolve_on("2023-04-03", today).unwrap();
        assert_eq!(from_today, from_iso);
    }

    #[test]
    fn key_is_zero_padded() {
        let key = DateKey::resolve_on("2023-04-03", day(2023, 1, 1)).unwrap();
        assert_eq!(key.as_string(), "2023-04-03");

        let key = DateKey(day(2024, 11, 23));
        assert_eq!(key.as_string(), "2024-11-23");
    }

    #[test]
    fn parses_js_to_date_string_tabs() {
        let key = DateKey::resolve_on("Mon Apr 03 2023", day(2023, 1, 1)).unwrap();
        assert_eq!(key.as_string(), "2023-04-03");
    }

    #[test]
    fn invalid_tabs_fail_with_invalid_date() {
        let err = DateKey::resolve_on("not a date", day(2023, 1, 1)).unwrap_err();
        assert!(matches!(err, FootballError::InvalidDate(_)));
    }

    #[test]
    fn fixtures_url_carries_the_key() {
        let key = DateKey(day(2023, 4, 3));
        assert_eq!(
            key.fixtures_url(),
            "https://www.bbc.com/sport/football/scores-fixtures/2023-04-03"
        );
    }

    #[test]
    fn offset_moves_in_both_directions() {
        let key = DateKey(day(2023, 4, 3));
        assert_eq!(key.offset(2).as_string(), "2023-04-05");
        assert_eq!(key.offset(-4).as_string(), "2023-03-30");
    }
}
