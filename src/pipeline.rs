// 🧾 Catalog Pipeline - Pure demo flow with a renderable outcome
//
// construct → sort → search, returned as explicit values so the whole flow
// is unit-testable without capturing stdout. The binary only decides how
// to print the outcome (text report or JSON).

use crate::clothing::Clothing;
use crate::search::find_clothing;
use crate::sorting::sorted_catalog;
use serde::Serialize;
use std::fmt::Write;

// ============================================================================
// CATALOG OUTCOME
// ============================================================================

/// Result of one full pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct CatalogOutcome {
    /// The catalog in construction order
    pub original: Vec<Clothing>,

    /// The catalog after the composite sort (price asc, brand desc)
    pub sorted: Vec<Clothing>,

    /// Index of the first record equal to the target in `sorted`,
    /// `None` when no record matched
    pub match_index: Option<usize>,
}

impl CatalogOutcome {
    /// The matched record, if the search succeeded
    pub fn matched(&self) -> Option<&Clothing> {
        self.match_index.map(|i| &self.sorted[i])
    }

    /// Render the three labeled console sections as one string
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Original array:\n");
        for item in &self.original {
            let _ = writeln!(out, "{}", item);
        }

        out.push_str("\nSorted array (price ascending, brand descending):\n");
        for item in &self.sorted {
            let _ = writeln!(out, "{}", item);
        }

        match self.matched() {
            Some(item) => {
                let _ = write!(out, "\nFound matching clothing: {}", item);
            }
            None => out.push_str("\nNo matching clothing found."),
        }

        out
    }
}

// ============================================================================
// PIPELINE
// ============================================================================

/// Run the full demo pipeline on an already-constructed catalog
///
/// Pure and deterministic: the input order is preserved in `original`,
/// `sorted` is a stable reordering of the same records, and the search
/// runs against the sorted sequence.
pub fn run_catalog_demo(catalog: Vec<Clothing>, target: &Clothing) -> CatalogOutcome {
    let sorted = sorted_catalog(catalog.clone());
    let match_index = find_clothing(&sorted, target);

    CatalogOutcome {
        original: catalog,
        sorted,
        match_index,
    }
}

// ============================================================================
// TESTS
// ============================================================================
