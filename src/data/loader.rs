// ============================================================
// Layer 4 - Cached Dataset Loader
// ============================================================
// Loads a named example dataset as a DataFrame.
//
//   name
//     │
//     ▼
//   registry::lookup      → unknown names fail here
//     │
//     ▼
//   <data_home>/<name>.csv exists?
//     ├── yes → read it
//     └── no  → offline? fail : download, then read
//     │
//     ▼
//   read_csv              → typed columns, ordered categories
//
// Loading is all-or-nothing: any failure (unknown name, network,
// malformed CSV) is returned to the caller, which ends the run.
//
// Reference: Rust Book §9 (Error Handling)
//            polars user guide (CSV)

use anyhow::{bail, Context, Result};

use crate::data::{parser::read_csv, registry};
use crate::domain::{frame::DataFrame, traits::DatasetSource};
use crate::infra::{
    cache::DataHome,
    http::{self, RetryConfig},
};

/// Loads datasets from the local cache, downloading on a cache miss.
/// Implements the DatasetSource trait from Layer 3.
pub struct CachedLoader {
    data_home: DataHome,
    /// Never touch the network; a cache miss is an error
    offline:   bool,
    retry:     RetryConfig,
}

impl CachedLoader {
    pub fn new(data_home: DataHome, offline: bool) -> Self {
        Self {
            data_home,
            offline,
            retry: RetryConfig::default(),
        }
    }

    pub fn data_home(&self) -> &DataHome {
        &self.data_home
    }
}

impl DatasetSource for CachedLoader {
    fn load(&self, name: &str) -> Result<DataFrame> {
        let spec = registry::lookup(name)?;
        let path = self.data_home.path_for(&spec.file_name());

        if path.is_file() {
            tracing::debug!("Cache hit for '{}': {}", name, path.display());
        } else if self.offline {
            bail!(
                "Dataset '{}' is not cached at '{}' and offline mode is on",
                name,
                path.display()
            );
        } else {
            tracing::info!("Downloading '{}' from {}", name, spec.url());
            self.data_home.ensure()?;
            http::download_to_file(&spec.url(), &path, self.retry)?;
        }

        let frame = read_csv(&path, spec.categories)
            .with_context(|| format!("Cannot load dataset '{}'", name))?;

        tracing::info!(
            "Loaded '{}': {} rows x {} columns",
            name,
            frame.height(),
            frame.width()
        );
        Ok(frame)
    }
}
