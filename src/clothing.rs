// 👕 Clothing Record - Immutable value with validated construction
//
// "A Clothing is a VALUE: five fields fixed at construction, never mutated"
//
// Problem solved:
// - A record can only exist if it passed validation (non-empty text, price >= 0)
// - Equality is structural over all five fields (no object identity)
// - Display renders the canonical Clothing{...} line used by the console report

use serde::Serialize;

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ClothingError {
    /// A required text field was empty at construction
    MissingField {
        field: &'static str,
    },

    /// Price was negative
    NegativePrice(f64),

    /// Price was NaN or infinite - would silently break the price >= 0
    /// invariant and exact structural equality
    NonFinitePrice(f64),
}

impl std::fmt::Display for ClothingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClothingError::MissingField { field } => {
                write!(f, "[Clothing] {}: Required field is empty", field)
            }
            ClothingError::NegativePrice(price) => {
                write!(f, "[Clothing] price: Price cannot be negative (got {})", price)
            }
            ClothingError::NonFinitePrice(price) => {
                write!(f, "[Clothing] price: Price must be finite (got {})", price)
            }
        }
    }
}

impl std::error::Error for ClothingError {}

// ============================================================================
// CLOTHING RECORD
// ============================================================================

/// Immutable clothing record
///
/// Fields are private so every live value went through `Clothing::new`
/// validation. Accessors return exactly what was supplied at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clothing {
    /// Garment category (e.g. "Shirt", "Pants")
    #[serde(rename = "type")]
    clothing_type: String,

    /// Brand label
    brand: String,

    /// Price in USD, finite and non-negative
    price: f64,

    /// Size label (e.g. "M", "XL", "42")
    size: String,

    /// Color label
    color: String,
}

impl Clothing {
    /// Create a validated clothing record
    ///
    /// Fails with `MissingField` when any text field is empty, with
    /// `NegativePrice` / `NonFinitePrice` when the price violates the
    /// invariant. The stricter of the two observed source policies.
    pub fn new(
        clothing_type: &str,
        brand: &str,
        price: f64,
        size: &str,
        color: &str,
    ) -> Result<Self, ClothingError> {
        for (field, value) in [
            ("type", clothing_type),
            ("brand", brand),
            ("size", size),
            ("color", color),
        ] {
            if value.is_empty() {
                return Err(ClothingError::MissingField { field });
            }
        }

        if !price.is_finite() {
            return Err(ClothingError::NonFinitePrice(price));
        }
        if price < 0.0 {
            return Err(ClothingError::NegativePrice(price));
        }

        Ok(Clothing {
            clothing_type: clothing_type.to_string(),
            brand: brand.to_string(),
            price,
            size: size.to_string(),
            color: color.to_string(),
        })
    }

    pub fn clothing_type(&self) -> &str {
        &self.clothing_type
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

impl std::fmt::Display for Clothing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Clothing{{type='{}', brand='{}', price={}, size='{}', color='{}'}}",
            self.clothing_type,
            self.brand,
            format_price(self.price),
            self.size,
            self.color
        )
    }
}

/// Render a price the way the console report shows it:
/// whole amounts keep one decimal ("120.0"), everything else uses the
/// shortest form ("49.99")
fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.1}", price)
    } else {
        format!("{}", price)
    }
}

// ============================================================================
// SAMPLE CATALOG
// ============================================================================

/// The fixed five-record demo catalog
pub fn sample_catalog() -> Result<Vec<Clothing>, ClothingError> {
    Ok(vec![
        Clothing::new("Shirt", "Nike", 49.99, "M", "Blue")?,
        Clothing::new("Pants", "Adidas", 79.99, "L", "Black")?,
        Clothing::new("Jacket", "Puma", 120.0, "XL", "Green")?,
        Clothing::new("T-shirt", "Reebok", 29.99, "S", "White")?,
        Clothing::new("Shoes", "Nike", 99.99, "42", "Red")?,
    ])
}

/// The record the demo searches for
pub fn sample_target() -> Result<Clothing, ClothingError> {
    Clothing::new("Pants", "Adidas", 79.99, "L", "Black")
}

// ============================================================================
// TESTS
// ============================================================================
