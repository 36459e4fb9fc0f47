use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::DayRecord;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// One pretty-printed JSON file per date under `{data_dir}/days/`.
#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn day_path(&self, date: &str) -> PathBuf {
        self.data_dir
            .join(StorageKeys::DAYS_DIR)
            .join(format!("{}.json", date))
    }

    fn ensure_days_dir(&self) -> Result<()> {
        let dir = self.data_dir.join(StorageKeys::DAYS_DIR);
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Storage for FileSystemStore {
    fn load_day(&self, date: &str) -> Result<Option<DayRecord>> {
        let path = self.day_path(date);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }

    fn upsert_day(&self, record: &DayRecord) -> Result<()> {
        self.ensure_days_dir()?;
        let content = serde_json::to_string_pretty(record)?;
        fs::write(self.day_path(&record.date), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use tempfile::tempdir;

    fn record(date: &str, heading: &str) -> DayRecord {
        let categories = vec![Category {
            heading: heading.to_string(),
            matches: vec![],
        }];
        DayRecord::new(date, &categories).unwrap()
    }

    #[test]
    fn missing_day_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());
        assert!(store.load_day("2023-04-01").unwrap().is_none());
    }

    #[test]
    fn upsert_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        let saved = record("2023-04-01", "Premier League");
        store.upsert_day(&saved).unwrap();

        let loaded = store.load_day("2023-04-01").unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.categories().unwrap()[0].heading, "Premier League");
    }

    #[test]
    fn upsert_fully_replaces_an_existing_day() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        store.upsert_day(&record("2023-04-01", "Premier League")).unwrap();
        store.upsert_day(&record("2023-04-01", "La Liga")).unwrap();

        let loaded = store.load_day("2023-04-01").unwrap().unwrap();
        let categories = loaded.categories().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].heading, "La Liga");
    }

    #[test]
    fn days_are_keyed_independently() {
        let dir = tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());

        store.upsert_day(&record("2023-04-01", "Premier League")).unwrap();
        store.upsert_day(&record("2023-04-02", "Serie A")).unwrap();

        assert_eq!(
            store.load_day("2023-04-01").unwrap().unwrap().date,
            "2023-04-01"
        );
        assert_eq!(
            store.load_day("2023-04-02").unwrap().unwrap().date,
            "2023-04-02"
        );
    }
}
