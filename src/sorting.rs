// 📊 Catalog Sorting - Composite ordering for clothing records
//
// Two-key comparator:
//   1. Price ascending (numeric)
//   2. Brand descending (lexicographic, case-sensitive) as tie-break
//
// The sort is stable: records tied on both keys keep their original
// relative order.

use crate::clothing::Clothing;
use std::cmp::Ordering;

// ============================================================================
// COMPOSITE COMPARATOR
// ============================================================================

/// Compare two records by price ascending, then brand descending
///
/// `total_cmp` gives a total order on f64; stored prices are always finite,
/// so it agrees with plain numeric comparison here.
pub fn compare_clothing(a: &Clothing, b: &Clothing) -> Ordering {
    a.price()
        .total_cmp(&b.price())
        .then_with(|| b.brand().cmp(a.brand()))
}

// ============================================================================
// SORT OPERATIONS
// ============================================================================

/// Sort a catalog in place using the composite comparator
///
/// `sort_by` is a stable sort, which is what guarantees the tie-preservation
/// contract above.
pub fn sort_catalog(catalog: &mut [Clothing]) {
    catalog.sort_by(compare_clothing);
}

/// By-value convenience: return a sorted copy of the catalog
pub fn sorted_catalog(mut catalog: Vec<Clothing>) -> Vec<Clothing> {
    sort_catalog(&mut catalog);
    catalog
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clothing::sample_catalog;

    fn create_test_clothing(clothing_type: &str, brand: &str, price: f64) -> Clothing {
        Clothing::new(clothing_type, brand, price, "M", "Blue").unwrap()
    }

    #[test]
    fn test_price_ascending() {
        let a = create_test_clothing("T-shirt", "Reebok", 29.99);
        let b = create_test_clothing("Jacket", "Puma", 120.0);

        assert_eq!(compare_clothing(&a, &b), Ordering::Less);
        assert_eq!(compare_clothing(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_brand_descending_breaks_price_ties() {
        let adidas = create_test_clothing("Pants", "Adidas", 79.99);
        let puma = create_test_clothing("Shorts", "Puma", 79.99);

        // Same price: "Puma" > "Adidas" lexicographically, so Puma sorts first
        assert_eq!(compare_clothing(&puma, &adidas), Ordering::Less);
        assert_eq!(compare_clothing(&adidas, &puma), Ordering::Greater);
    }

    #[test]
    fn test_equal_keys_compare_equal() {
        let a = create_test_clothing("Shirt", "Nike", 49.99);
        let b = create_test_clothing("Polo", "Nike", 49.99);

        assert_eq!(compare_clothing(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_sorted_adjacent_pair_invariant() {
        let sorted = sorted_catalog(sample_catalog().unwrap());

        for pair in sorted.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                a.price() < b.price() || (a.price() == b.price() && a.brand() >= b.brand()),
                "pair out of order: {} vs {}",
                a,
                b
            );
        }
    }

    #[test]
    fn test_sample_catalog_sort_order() {
        let sorted = sorted_catalog(sample_catalog().unwrap());

        let brands: Vec<&str> = sorted.iter().map(|c| c.brand()).collect();
        let prices: Vec<f64> = sorted.iter().map(|c| c.price()).collect();

        assert_eq!(brands, vec!["Reebok", "Nike", "Adidas", "Nike", "Puma"]);
        assert_eq!(prices, vec![29.99, 49.99, 79.99, 99.99, 120.0]);
    }

    #[test]
    fn test_sort_is_stable_for_fully_tied_keys() {
        // Same price and brand, distinguishable by color
        let first = Clothing::new("Shirt", "Nike", 49.99, "M", "Blue").unwrap();
        let second = Clothing::new("Shirt", "Nike", 49.99, "M", "Red").unwrap();
        let cheap = create_test_clothing("T-shirt", "Reebok", 29.99);

        let sorted = sorted_catalog(vec![first.clone(), second.clone(), cheap]);

        assert_eq!(sorted[0].brand(), "Reebok");
        assert_eq!(sorted[1], first);
        assert_eq!(sorted[2], second);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<Clothing> = vec![];
        sort_catalog(&mut empty);
        assert!(empty.is_empty());

        let single = vec![create_test_clothing("Shirt", "Nike", 49.99)];
        assert_eq!(sorted_catalog(single.clone()), single);
    }
}
