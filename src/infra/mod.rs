// ============================================================
// Layer 5 - Infrastructure Layer
// ============================================================
// Cross-cutting plumbing that the data layer leans on but that
// has nothing to do with tables:
//
//   cache.rs - Where downloaded datasets are stored
//              (--data-home, SEABORN_DATA, or ~/seaborn-data)
//
//   http.rs  - Blocking HTTPS download with timeouts, a size
//              cap, and retry with backoff
//
// Keeping these here means the loader can be pointed at another
// cache location or transport without touching parsing code.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Dataset cache directory
pub mod cache;

/// Dataset download over HTTP
pub mod http;
