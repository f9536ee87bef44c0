// ============================================================
// Layer 2 - SplitUseCase
// ============================================================
// Prepares the four tables a model-fitting step would start from:
//
//   Step 1: Load the named dataset        (Layer 4 - data)
//   Step 2: Split features / target       (Layer 4 - data)
//   Step 3: Seeded train / test split     (Layer 4 - data)
//
// Fitting a model is out of scope; the report only carries the
// shapes so the user can check the partition before moving on.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::splitter::{split_features_target, train_test_split, TrainTestSplit};
use crate::domain::traits::DatasetSource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    pub dataset:   String,
    pub target:    String,
    /// Fraction of rows held out for testing, in (0, 1)
    pub test_size: f64,
    pub seed:      u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            dataset:   "diamonds".to_string(),
            target:    "price".to_string(),
            test_size: 0.2,
            seed:      1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitReport {
    pub dataset:       String,
    pub test_size:     f64,
    pub seed:          u64,
    pub x_train_shape: (usize, usize),
    pub x_test_shape:  (usize, usize),
    pub y_train_shape: (usize, usize),
    pub y_test_shape:  (usize, usize),
}

impl SplitReport {
    fn new(cfg: &SplitConfig, split: &TrainTestSplit) -> Self {
        Self {
            dataset:       cfg.dataset.clone(),
            test_size:     cfg.test_size,
            seed:          cfg.seed,
            x_train_shape: split.x_train.shape(),
            x_test_shape:  split.x_test.shape(),
            y_train_shape: split.y_train.shape(),
            y_test_shape:  split.y_test.shape(),
        }
    }
}

pub struct SplitUseCase<S: DatasetSource> {
    config: SplitConfig,
    source: S,
}

impl<S: DatasetSource> SplitUseCase<S> {
    pub fn new(config: SplitConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn execute(&self) -> Result<SplitReport> {
        let cfg = &self.config;

        let frame  = self.source.load(&cfg.dataset)?;
        let (x, y) = split_features_target(&frame, &cfg.target)?;
        let split  = train_test_split(&x, &y, cfg.test_size, cfg.seed)?;

        tracing::info!(
            "Split '{}': {} training rows, {} test rows",
            cfg.dataset,
            split.x_train.height(),
            split.x_test.height()
        );

        Ok(SplitReport::new(cfg, &split))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    use crate::domain::FrameError;

    struct FixedSource(DataFrame);

    impl DatasetSource for FixedSource {
        fn load(&self, _name: &str) -> anyhow::Result<DataFrame> {
            Ok(self.0.clone())
        }
    }

    fn source(rows: usize) -> FixedSource {
        let carat: Vec<f64> = (0..rows).map(|i| 0.2 + i as f64 * 0.01).collect();
        let price: Vec<f64> = (0..rows).map(|i| 326.0 + i as f64).collect();
        FixedSource(df!("carat" => carat, "price" => price).unwrap())
    }

    #[test]
    fn test_default_seed_and_size() {
        let cfg = SplitConfig::default();
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.test_size, 0.2);
    }

    #[test]
    fn test_split_report_shapes() {
        let report = SplitUseCase::new(SplitConfig::default(), source(10))
            .execute()
            .unwrap();
        assert_eq!(report.x_train_shape, (8, 1));
        assert_eq!(report.x_test_shape, (2, 1));
        assert_eq!(report.y_train_shape, (8, 1));
        assert_eq!(report.y_test_shape, (2, 1));
        assert_eq!(report.seed, 1);
    }

    #[test]
    fn test_invalid_test_size_is_rejected() {
        let cfg = SplitConfig {
            test_size: 1.5,
            ..SplitConfig::default()
        };
        let err = SplitUseCase::new(cfg, source(10)).execute().unwrap_err();
        assert!(err.to_string().contains("test_size"));
    }

    #[test]
    fn test_single_row_dataset_is_rejected() {
        let err = SplitUseCase::new(SplitConfig::default(), source(1))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FrameError>(),
            Some(FrameError::Empty { rows: 1, .. })
        ));
    }
}
