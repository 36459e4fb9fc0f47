use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());
static MINUTE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r" mins?$").unwrap());

/// The BBC markup renders "TBC" and "To be Confirmed" as sibling nodes, so
/// concatenated text extraction produces this artifact.
const TBC_ARTIFACT: &str = "TBCTo be Confirmed";
const TBC_DISPLAY: &str = "TBC (To be Confirmed)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusResolution {
    pub time: String,
    pub in_progress: bool,
    pub agg_score: Option<String>,
}

/// Ordered resolution rules for the `time` field; the first rule that yields
/// a value wins. Keeping the precedence in one table makes it auditable
/// without going through HTML parsing.
#[derive(Debug, Clone, Copy)]
enum TimeRule {
    /// A populated kickoff-time column is used verbatim.
    KickoffTime,
    /// Exact status literals: `FT`, `HT`, `Postponed`.
    Literal(&'static str),
    /// A status with a digit is a live minute count; a trailing ` mins` or
    /// ` min` becomes a `'` marker (`45 mins` -> `45'`).
    MinuteMarker,
    /// Free-text cancellation/postponement messages pass through whole.
    Contains(&'static str),
}

const TIME_RULES: &[TimeRule] = &[
    TimeRule::KickoffTime,
    TimeRule::Literal("FT"),
    TimeRule::Literal("HT"),
    TimeRule::Literal("Postponed"),
    TimeRule::MinuteMarker,
    TimeRule::Contains("cancelled"),
    TimeRule::Contains("postponed"),
];

impl TimeRule {
    fn apply(&self, kickoff_time: &str, status: &str) -> Option<String> {
        match self {
            Self::KickoffTime if !kickoff_time.is_empty() => Some(kickoff_time.to_string()),
            Self::KickoffTime => None,
            Self::Literal(literal) if status == *literal => Some((*literal).to_string()),
            Self::Literal(_) => None,
            Self::MinuteMarker if DIGIT.is_match(status) => {
                Some(MINUTE_SUFFIX.replace(status, "'").into_owned())
            }
            Self::MinuteMarker => None,
            Self::Contains(needle) if status.contains(needle) => Some(status.to_string()),
            Self::Contains(_) => None,
        }
    }
}

/// Resolves the kickoff-time column and the free-text status column into the
/// derived `time`/`in_progress`/`agg_score` fields.
pub fn resolve_status(kickoff_time: &str, status: &str) -> StatusResolution {
    let mut time = TIME_RULES
        .iter()
        .find_map(|rule| rule.apply(kickoff_time, status))
        .unwrap_or_default();

    // A cancellation message wins even over a populated kickoff column.
    if status.contains("cancelled") {
        time = status.to_string();
    }

    if time == TBC_ARTIFACT {
        time = TBC_DISPLAY.to_string();
    }

    // Aggregate-score annotations contain digits but describe a decided tie,
    // not a running clock.
    let has_agg = status.contains("Agg");
    let in_progress = (DIGIT.is_match(status) || status == "HT") && !has_agg;

    StatusResolution {
        time,
        in_progress,
        agg_score: has_agg.then(|| status.to_string()),
    }
}
