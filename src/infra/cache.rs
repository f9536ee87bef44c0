// ============================================================
// Layer 5 - Data Home (Dataset Cache)
// ============================================================
// Downloaded example datasets are cached as plain CSV files in a
// "data home" directory so they are fetched only once.
//
// Resolution order:
//   1. an explicit path (--data-home, or SEABORN_DATA via clap)
//   2. ~/seaborn-data
//
// A leading "~/" in an explicit path is expanded against the
// user's home directory.
//
// File layout:
//   ~/seaborn-data/
//     diamonds.csv
//     tips.csv
//     ...

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use directories::BaseDirs;

/// Directory name used under $HOME when nothing else is configured
pub const DEFAULT_DIR_NAME: &str = "seaborn-data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataHome {
    root: PathBuf,
}

impl DataHome {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Pick the data home from an explicit path or fall back to ~/seaborn-data.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let root = match explicit {
            Some(path) => expand_home(path)?,
            None       => home_dir()?.join(DEFAULT_DIR_NAME),
        };
        tracing::debug!("Data home: '{}'", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the cached copy of `file_name` lives (it may not exist yet)
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.path_for(file_name).is_file()
    }

    /// Create the directory (and parents) if missing, like `mkdir -p`.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Cannot create data home '{}'", self.root.display()))
    }
}

fn home_dir() -> Result<PathBuf> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .context("Cannot locate the home directory; pass --data-home or set SEABORN_DATA")
}

fn expand_home(path: PathBuf) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_)   => Ok(path),
    }
}
