// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer asks for a dataset BY NAME and does not
// care where it comes from:
//   - CachedLoader   → local cache, downloading on first use
//   - test doubles   → frames built in memory
//
// Programming against the trait keeps the use cases testable
// without touching the filesystem or the network.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::frame::DataFrame;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can materialise a named dataset as a DataFrame.
pub trait DatasetSource {
    /// Load the dataset called `name`.
    fn load(&self, name: &str) -> Result<DataFrame>;
}
