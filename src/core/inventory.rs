//! # Inventory
//!
//! The canonical product list for a session, plus the browser's cursor.
//!
//! Display order is insertion order. The browser and the detail view both
//! borrow the same `Inventory` mutably, so an edit or delete in one is seen
//! by the other without copying.

use log::info;

use crate::core::product::{NewProduct, Product, next_id};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Product> {
        self.products.get_mut(index)
    }

    /// Position of the product with `id`, if present.
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Append a product, assigning it the next free id. Returns the id.
    pub fn add(&mut self, new: NewProduct) -> u32 {
        let id = next_id(&self.products);
        self.products.push(new.with_id(id));
        info!("Added product {id}");
        id
    }

    /// Remove the product at `index`. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Product> {
        if index >= self.products.len() {
            return None;
        }
        let removed = self.products.remove(index);
        info!("Removed product {}", removed.id);
        Some(removed)
    }
}

/// Selection index into the inventory.
///
/// Moves wrap around in both directions. Every method takes the current
/// list length, so the cursor never outlives a shrinking list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor(usize);

impl Cursor {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn up(&mut self, len: usize) {
        if len > 0 {
            self.0 = (self.0 + len - 1) % len;
        }
    }

    pub fn down(&mut self, len: usize) {
        if len > 0 {
            self.0 = (self.0 + 1) % len;
        }
    }

    /// Pull the cursor back inside `[0, len - 1]` (or 0 for an empty list).
    pub fn clamp(&mut self, len: usize) {
        self.0 = self.0.min(len.saturating_sub(1));
    }

    pub fn jump_to(&mut self, index: usize, len: usize) {
        self.0 = index;
        self.clamp(len);
    }
}
