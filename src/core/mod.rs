//! # Core Application Logic
//!
//! This module contains Easel's business logic.
//! It knows nothing about terminals, keys or screens.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Product / Inventory  │
//!                    │  • Record Store (CSV)   │
//!                    │  • Statistics           │
//!                    │  • Actions              │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`]: The `Product` record and its field parsers
//! - [`inventory`]: The session's product list and the list cursor
//! - [`state`]: The `App` session object passed to every screen
//! - [`store`]: Loading and saving the CSV data file
//! - [`stats`]: Totals, averages, profit and stock valuation
//! - [`action`]: The `ListAction` / `DetailAction` enums
//! - [`currency`], [`link`]: Formatting collaborators
//! - [`config`]: Settings and their override order

pub mod action;
pub mod config;
pub mod currency;
pub mod inventory;
pub mod link;
pub mod product;
pub mod state;
pub mod stats;
pub mod store;
