//! # TUI Components
//!
//! Stateless, props-based pieces the screens are built from:
//! - `TitleBar`: screen name and key hints
//! - `ProductTable`: fixed-width product list with a highlighted cursor row
//! - `DetailCard`: every field of one product
//!
//! Components receive external data as props (struct fields), never by
//! reaching into `App`, which keeps them renderable against a `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Command bar)
//! ├── product_table.rs  (Browser list)
//! └── detail_card.rs    (Detail view fields)
//! ```

pub mod detail_card;
pub mod product_table;
mod title_bar;

pub use detail_card::DetailCard;
pub use product_table::ProductTable;
pub use title_bar::TitleBar;
