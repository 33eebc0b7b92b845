//! # Statistics
//!
//! Read-only aggregates over the current product list.
//!
//! Note the asymmetry on an empty list: `average_price` has no value, while
//! `profit_per_item` is defined as 0.

use crate::core::product::Product;

pub fn total_quantity(products: &[Product]) -> u64 {
    products.iter().map(|p| u64::from(p.quantity)).sum()
}

/// Mean price, or `None` when there are no products.
pub fn average_price(products: &[Product]) -> Option<f64> {
    if products.is_empty() {
        return None;
    }
    let total: f64 = products.iter().map(|p| p.price).sum();
    Some(total / products.len() as f64)
}

/// `(sum(price) - sum(cost)) / count`, or 0 for an empty list.
pub fn profit_per_item(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let revenue: f64 = products.iter().map(|p| p.price).sum();
    let cost: f64 = products.iter().map(|p| p.cost).sum();
    (revenue - cost) / products.len() as f64
}

pub fn stock_value(products: &[Product]) -> f64 {
    products.iter().map(|p| p.price * f64::from(p.quantity)).sum()
}

pub fn stock_cost(products: &[Product]) -> f64 {
    products.iter().map(|p| p.cost * f64::from(p.quantity)).sum()
}

/// The summary shown from the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortStats {
    pub product_count: usize,
    pub total_quantity: u64,
    pub average_price: f64,
    pub profit_per_item: f64,
    pub stock_value: f64,
    pub stock_cost: f64,
}

/// Compute the summary, or `None` for an empty list (nothing else is computed).
pub fn short_stats(products: &[Product]) -> Option<ShortStats> {
    let average_price = average_price(products)?;
    Some(ShortStats {
        product_count: products.len(),
        total_quantity: total_quantity(products),
        average_price,
        profit_per_item: profit_per_item(products),
        stock_value: stock_value(products),
        stock_cost: stock_cost(products),
    })
}
