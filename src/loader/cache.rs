use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use super::csv_loader::DatasetLoader;
use super::error::DataLoadError;
use crate::models::Dataset;

/// Loaded datasets keyed by file path. Entries are written once and only
/// handed out as shared, read-only references afterwards.
#[derive(Debug, Default)]
pub struct DatasetCache {
    loader: DatasetLoader,
    entries: HashMap<PathBuf, Arc<Dataset>>,
}

impl DatasetCache {
    pub fn new(loader: DatasetLoader) -> Self {
        Self {
            loader,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached dataset for `path`, loading it on first use.
    /// Failed loads leave the cache untouched.
    pub fn get_or_load(&mut self, path: impl AsRef<Path>) -> Result<Arc<Dataset>, DataLoadError> {
        let path = path.as_ref();
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        if let Some(dataset) = self.entries.get(&key) {
            debug!("Dataset cache hit for {}", key.display());
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(self.loader.load(path)?);
        self.entries.insert(key, Arc::clone(&dataset));
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dataset_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Order ID,Customer ID,Order Date,Ship Mode,Segment,Region,Category,Product Name,Sales,Profit"
        )
        .unwrap();
        writeln!(file, "A,C1,2019-01-05,First Class,Consumer,East,Furniture,Chair,100,10").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_second_load_is_shared() {
        let file = dataset_file();
        let mut cache = DatasetCache::default();

        let first = cache.get_or_load(file.path()).unwrap();
        let second = cache.get_or_load(file.path()).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let mut cache = DatasetCache::default();
        assert!(cache.get_or_load("missing/superstore.csv").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_repeated_loads_are_schema_identical() {
        let file = dataset_file();
        let loader = DatasetLoader::default();
        let a = loader.load(file.path()).unwrap();
        let b = loader.load(file.path()).unwrap();
        assert_eq!(a.columns(), b.columns());
        assert_eq!(a, b);
    }
}
