//! # Product
//!
//! The one entity Easel manages: a painting in stock.
//!
//! ```text
//! Product
//! ├── id: u32             // unique, assigned once, never edited
//! ├── name: String
//! ├── description: String
//! ├── price: f64          // non-negative, finite
//! ├── quantity: u32
//! ├── cost: f64           // non-negative, finite (0 for old files)
//! └── link_suffix: String // appended to the shop base URL, may be empty
//! ```
//!
//! The parsers here are shared by the Record Store and the interactive
//! prompts, so "valid" means the same thing on disk and at the keyboard.

/// A product row, as held in memory and persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub cost: f64,
    pub link_suffix: String,
}

/// Field values collected for a product that has no id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: u32,
    pub cost: f64,
    pub link_suffix: String,
}

impl NewProduct {
    /// Attach an id, producing a full `Product`.
    pub fn with_id(self, id: u32) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            cost: self.cost,
            link_suffix: normalize_link_suffix(&self.link_suffix),
        }
    }
}

/// Id for the next product: one past the highest id, or 1 for an empty list.
pub fn next_id(products: &[Product]) -> u32 {
    products
        .iter()
        .map(|p| p.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Parse a money amount. Accepts `12.5` and `12,5`; rejects negatives,
/// NaN and infinities.
pub fn parse_amount(input: &str) -> Option<f64> {
    let value: f64 = input.trim().replace(',', ".").parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Parse a stock count.
pub fn parse_quantity(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Strip surrounding whitespace and any leading slashes from a link suffix.
pub fn normalize_link_suffix(input: &str) -> String {
    input.trim().trim_start_matches('/').to_string()
}
