// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types that describe what a dataset IS:
//
//   frame.rs   - polars DataFrame helpers: ordered categories,
//                matrix export, previews, column lookups
//   error.rs   - FrameError, the typed failures of table operations
//   traits.rs  - DatasetSource, the seam between use cases and loaders
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO printing
//   - Only types, traits, and pure table operations
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

/// Typed errors for table operations
pub mod error;

/// Table helpers on top of polars
pub mod frame;

/// Core abstractions implemented by the data layer
pub mod traits;

pub use error::FrameError;
pub use frame::{DataFrame, Preview};
