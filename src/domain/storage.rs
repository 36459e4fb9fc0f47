use super::DayRecord;
use crate::error::Result;

/// Date-keyed fixture pool. Writers fully replace a day's record; the query
/// path and the refresh path rendezvous only through this trait.
pub trait Storage: Send + Sync {
    fn load_day(&self, date: &str) -> Result<Option<DayRecord>>;
    fn upsert_day(&self, record: &DayRecord) -> Result<()>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const DAYS_DIR: &'static str = "days";
}
