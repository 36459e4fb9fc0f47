mod day_record;
mod fixture;
pub(crate) mod storage;

pub use day_record::DayRecord;
pub use fixture::{Category, Match, Scorer};
