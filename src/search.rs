// 🔍 Catalog Search - Linear equality scan
//
// Scans the catalog from index 0 and returns the position of the first
// record structurally equal to the target. `None` is the not-found
// sentinel. The catalog is never mutated.

use crate::clothing::Clothing;

/// Find the first record equal to `target`, scanning from the start
pub fn find_clothing(catalog: &[Clothing], target: &Clothing) -> Option<usize> {
    catalog.iter().position(|item| item == target)
}

// ============================================================================
// TESTS
// ============================================================================
