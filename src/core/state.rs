//! # Application State
//!
//! The session object: everything one run of Easel works on.
//!
//! ```text
//! App
//! ├── inventory: Inventory      // canonical product list
//! ├── cursor: Cursor            // list selection, kept across detail visits
//! ├── currency: CurrencyFormat  // how prices are shown
//! └── link_base_url: String     // prefix for product links
//! ```
//!
//! The browser, detail view and forms all receive `&mut App`; nothing is
//! global.

use crate::core::config::ResolvedConfig;
use crate::core::currency::CurrencyFormat;
use crate::core::inventory::{Cursor, Inventory};
use crate::core::product::Product;

pub struct App {
    pub inventory: Inventory,
    pub cursor: Cursor,
    pub currency: CurrencyFormat,
    pub link_base_url: String,
}

impl App {
    pub fn new(products: Vec<Product>, currency: CurrencyFormat, link_base_url: String) -> Self {
        Self {
            inventory: Inventory::new(products),
            cursor: Cursor::default(),
            currency,
            link_base_url,
        }
    }

    pub fn from_config(products: Vec<Product>, config: &ResolvedConfig) -> Self {
        Self::new(products, config.currency, config.link_base_url.clone())
    }

    pub fn format_price(&self, amount: f64) -> String {
        self.currency.format(amount)
    }
}
