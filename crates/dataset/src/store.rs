use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{DatasetError, Result};
use crate::loader::{load_csv, load_path};
use crate::schema::{Dataset, DatasetInfo};

/// Holds at most one current dataset.
///
/// Loads are parsed and validated before the store is touched; the swap itself
/// rebinds a single `Arc`, so readers see either the previous dataset or the
/// new one in full.
#[derive(Default)]
pub struct DatasetStore {
    current: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(dataset: Dataset) -> Self {
        Self { current: RwLock::new(Some(Arc::new(dataset))) }
    }

    pub fn current(&self) -> Option<Arc<Dataset>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Like [`current`](Self::current) but absence is an error.
    pub fn require(&self) -> Result<Arc<Dataset>> {
        self.current().ok_or(DatasetError::NotLoaded)
    }

    pub fn replace(&self, dataset: Dataset) -> DatasetInfo {
        let info = dataset.info().clone();
        let next = Arc::new(dataset);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(next);
        info
    }

    /// Parses `bytes` and swaps the result in. On error the store is unchanged.
    pub fn load(&self, bytes: &[u8], source: impl Into<String>) -> Result<DatasetInfo> {
        let dataset = load_csv(bytes, source)?;
        Ok(self.replace(dataset))
    }

    pub fn load_file(&self, path: &Path) -> Result<DatasetInfo> {
        let dataset = load_path(path)?;
        Ok(self.replace(dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "text_clean,sentiment_label,platform,timestamp,likes,retweets,replies\n";

    #[test]
    fn starts_empty() {
        let store = DatasetStore::new();
        assert!(store.current().is_none());
        assert!(matches!(store.require(), Err(DatasetError::NotLoaded)));
    }

    #[test]
    fn load_replaces_whole_dataset() {
        let store = DatasetStore::new();
        let first = format!("{HEADER}a,positive,x,2024-01-01,1,1,1\nb,negative,x,2024-01-01,1,1,1\n");
        let second = format!("{HEADER}c,neutral,y,2024-01-02,2,2,2\n");

        let info = store.load(first.as_bytes(), "first.csv").unwrap();
        assert_eq!(info.rows, 2);

        let held = store.require().unwrap();
        let info = store.load(second.as_bytes(), "second.csv").unwrap();
        assert_eq!(info.rows, 1);

        // snapshots taken before the swap keep the old rows
        assert_eq!(held.len(), 2);
        let now = store.require().unwrap();
        assert_eq!(now.len(), 1);
        assert_eq!(now.info().source, "second.csv");
    }

    #[test]
    fn failed_load_leaves_store_untouched() {
        let store = DatasetStore::new();
        let good = format!("{HEADER}a,positive,x,2024-01-01,1,1,1\n");
        let before = store.load(good.as_bytes(), "good.csv").unwrap();

        let bad = "text_clean,sentiment_label\nhello,positive\n";
        let err = store.load(bad.as_bytes(), "bad.csv").unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumns(_)));

        let after = store.require().unwrap();
        assert_eq!(after.info().id, before.id);
    }
}
