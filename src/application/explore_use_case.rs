// ============================================================
// Layer 2 - ExploreUseCase
// ============================================================
// The exploratory first look at a dataset, in order:
//
//   Step 1: Load the named dataset          (Layer 4 - data)
//   Step 2: Record its shape (+ preview)    (Layer 3 - domain)
//   Step 3: Describe it                     (Layer 4 - data)
//   Step 4: Split features / target         (Layer 4 - data)
//   Step 5: Export X / y as ndarray matrices (Layer 3 - domain)
//
// Nothing is printed here: the use case returns an ExploreReport
// and the CLI layer decides how to show it.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::data::{
    splitter::split_features_target,
    stats::{self, CategoricalSummary, Summary},
};
use crate::domain::{
    frame::{self, Preview},
    traits::DatasetSource,
};

// ─── Explore Configuration ───────────────────────────────────────────────────
// Defaults reproduce the plain diamonds walkthrough:
// the diamonds dataset with price as the prediction target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreConfig {
    pub dataset:             String,
    pub target:              String,
    /// Rows to include in the preview (0 = no preview)
    pub head_rows:           usize,
    /// Also summarise categorical columns
    pub include_categorical: bool,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            dataset:             "diamonds".to_string(),
            target:              "price".to_string(),
            head_rows:           0,
            include_categorical: false,
        }
    }
}

// ─── Explore Report ──────────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize)]
pub struct ExploreReport {
    pub dataset:        String,
    /// (rows, columns) of the loaded table
    pub shape:          (usize, usize),
    pub preview:        Option<Preview>,
    pub summary:        Summary,
    pub categorical:    Option<Vec<CategoricalSummary>>,
    pub feature_names:  Vec<String>,
    pub target_name:    String,
    pub features_shape: (usize, usize),
    pub target_shape:   (usize, usize),

    /// X as a dense matrix, ready for a booster
    #[serde(skip)]
    pub features: Array2<f64>,

    /// y as a single-column matrix
    #[serde(skip)]
    pub target:   Array2<f64>,
}

// ─── ExploreUseCase ──────────────────────────────────────────────────────────
pub struct ExploreUseCase<S: DatasetSource> {
    config: ExploreConfig,
    source: S,
}

impl<S: DatasetSource> ExploreUseCase<S> {
    pub fn new(config: ExploreConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Run the exploration end to end
    pub fn execute(&self) -> Result<ExploreReport> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        tracing::info!("Loading dataset '{}'", cfg.dataset);
        let dataset = self.source.load(&cfg.dataset)?;

        // ── Step 2: Shape and optional preview ───────────────────────────────
        let shape   = dataset.shape();
        let preview = (cfg.head_rows > 0)
            .then(|| frame::preview(&dataset, cfg.head_rows))
            .transpose()?;

        // ── Step 3: Describe ─────────────────────────────────────────────────
        // Real-world data deserves far more exploration than this;
        // describe() is the minimum sanity check.
        let summary     = stats::describe(&dataset)?;
        let categorical = cfg
            .include_categorical
            .then(|| stats::describe_categorical(&dataset))
            .transpose()?;

        // ── Step 4: Feature / target split ───────────────────────────────────
        let (features, target) = split_features_target(&dataset, &cfg.target)?;
        tracing::info!(
            "Split '{}' into X {:?} and y {:?} (target '{}')",
            cfg.dataset,
            features.shape(),
            target.shape(),
            cfg.target
        );

        // ── Step 5: Matrices for the downstream model ────────────────────────
        let x = frame::to_array2(&features)?;
        let y = frame::to_array2(&target)?;
        tracing::debug!("X matrix {:?}, y matrix {:?}", x.dim(), y.dim());

        Ok(ExploreReport {
            dataset:        cfg.dataset.clone(),
            shape,
            preview,
            summary,
            categorical,
            feature_names:  frame::column_names(&features),
            target_name:    cfg.target.clone(),
            features_shape: features.shape(),
            target_shape:   target.shape(),
            features:       x,
            target:         y,
        })
    }
}
