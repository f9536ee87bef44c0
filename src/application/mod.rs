// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal per use case (explore a dataset, prepare a split).
//
// Rules for this layer:
//   - No statistics or parsing code here (that's Layer 4)
//   - No printing here (that's Layer 1)
//   - No direct file or network access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Use cases are generic over DatasetSource so they can be driven
// by in-memory frames in tests.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Load → shape → describe → feature/target split
pub mod explore_use_case;

// Load → feature/target split → train/test split
pub mod split_use_case;
