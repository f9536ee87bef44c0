// ============================================================
// sample-eda
// ============================================================
// Load a named example dataset, print its shape and summary
// statistics, and split it into feature and target tables as the
// first step toward fitting a gradient-boosted model.
//
// Layers (outermost first):
//   cli          - Layer 1: argument parsing and console output
//   application  - Layer 2: use cases
//   domain       - Layer 3: DataFrame, errors, traits
//   data         - Layer 4: registry, parsing, loading, stats, splits
//   infra        - Layer 5: cache directory and HTTP download

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
