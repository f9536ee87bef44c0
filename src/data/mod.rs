// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between a dataset NAME and the tables a model
// would consume:
//
//   "diamonds"
//       │
//       ▼
//   registry        → is it a known dataset? where does it live?
//       │
//       ▼
//   CachedLoader    → cached CSV, downloaded on first use
//       │
//       ▼
//   parser          → typed DataFrame (numeric / ordered categories)
//       │
//       ├──► stats     → describe() summary for the console
//       │
//       ▼
//   splitter        → X (features) / y (target), then train/test
//
// Each module is responsible for exactly one step, so each step
// is independently testable.
//
// Reference: Rust Book §7 (Modules)

/// Known example datasets and their ordered categories
pub mod registry;

/// CSV text → DataFrame with type inference
pub mod parser;

/// Cache-first loader implementing DatasetSource
pub mod loader;

/// describe(): count / mean / std / quantiles per column
pub mod stats;

/// Feature/target and train/test splits
pub mod splitter;
