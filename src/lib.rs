// Clothing Catalog - Core Library
// Exposes all modules for use in the demo binary and tests

pub mod clothing; // Clothing record + validated construction
pub mod sorting; // Composite comparator (price asc, brand desc)
pub mod search; // Linear equality search
pub mod pipeline; // Pure demo pipeline + console report

// Re-export commonly used types
pub use clothing::{sample_catalog, sample_target, Clothing, ClothingError};
pub use pipeline::{run_catalog_demo, CatalogOutcome};
pub use search::find_clothing;
pub use sorting::{compare_clothing, sort_catalog, sorted_catalog};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
