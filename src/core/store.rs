//! # Record Store
//!
//! Loads and saves the product list as a comma-separated file:
//!
//! ```text
//! id,name,desc,price,quantity,cost,product_link_name
//! 1,Harbour at dusk,Oil on canvas,1200,2,400,harbour-at-dusk
//! ```
//!
//! Files written before `cost` and `product_link_name` existed still load;
//! the missing columns default to `0` and an empty suffix.
//!
//! Loading is all-or-nothing: one bad numeric field fails the whole load.
//! Saving rewrites the file from scratch (no temp file, no rename).

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::{debug, info};

use crate::core::product::{Product, normalize_link_suffix, parse_amount, parse_quantity};

/// Column order used when writing.
pub const HEADER: [&str; 7] = [
    "id",
    "name",
    "desc",
    "price",
    "quantity",
    "cost",
    "product_link_name",
];

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Csv(csv::Error),
    MissingColumn {
        column: &'static str,
    },
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },
    DuplicateId {
        line: u64,
        id: u32,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {e}"),
            StoreError::Csv(e) => write!(f, "store CSV error: {e}"),
            StoreError::MissingColumn { column } => {
                write!(f, "store header is missing the '{column}' column")
            }
            StoreError::InvalidField {
                line,
                column,
                value,
            } => write!(f, "line {line}: invalid {column} value '{value}'"),
            StoreError::DuplicateId { line, id } => {
                write!(f, "line {line}: id {id} is used more than once")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        StoreError::Csv(e)
    }
}

// ============================================================================
// Store
// ============================================================================

/// Handle on the data file. Holds only the path; every call hits the disk.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with only a header row if it does not exist yet.
    pub fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        info!("Creating empty data file at {}", self.path.display());
        self.save(&[])
    }

    /// Load every product. A missing file is an empty store.
    pub fn load(&self) -> Result<Vec<Product>, StoreError> {
        if !self.path.exists() {
            debug!("No data file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let products = read_products(File::open(&self.path)?)?;
        info!(
            "Loaded {} products from {}",
            products.len(),
            self.path.display()
        );
        Ok(products)
    }

    /// Overwrite the file with `products`, in list order.
    pub fn save(&self, products: &[Product]) -> Result<(), StoreError> {
        write_products(File::create(&self.path)?, products)?;
        info!(
            "Saved {} products to {}",
            products.len(),
            self.path.display()
        );
        Ok(())
    }
}

// ============================================================================
// Reading
// ============================================================================

/// Column positions resolved from the header row.
struct Columns {
    id: usize,
    name: usize,
    desc: usize,
    price: usize,
    quantity: usize,
    cost: Option<usize>,
    link: Option<usize>,
}

impl Columns {
    fn from_header(header: &StringRecord) -> Result<Self, StoreError> {
        let find = |column: &'static str| header.iter().position(|h| h.trim() == column);
        let require = |column: &'static str| find(column).ok_or(StoreError::MissingColumn { column });

        Ok(Self {
            id: require("id")?,
            name: require("name")?,
            desc: require("desc")?,
            price: require("price")?,
            quantity: require("quantity")?,
            cost: find("cost"),
            link: find("product_link_name"),
        })
    }
}

/// Parse products from CSV text with a header row.
pub fn read_products<R: io::Read>(reader: R) -> Result<Vec<Product>, StoreError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let columns = Columns::from_header(reader.headers()?)?;

    let mut products = Vec::new();
    let mut seen = HashSet::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let product = parse_record(&record, &columns, line)?;
        if !seen.insert(product.id) {
            return Err(StoreError::DuplicateId {
                line,
                id: product.id,
            });
        }
        products.push(product);
    }
    Ok(products)
}

fn parse_record(record: &StringRecord, columns: &Columns, line: u64) -> Result<Product, StoreError> {
    let text = |index: usize| record.get(index).unwrap_or("");
    let invalid = |column: &'static str, value: &str| StoreError::InvalidField {
        line,
        column,
        value: value.to_string(),
    };

    let raw_id = text(columns.id);
    let id = raw_id
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| invalid("id", raw_id))?;

    let raw_price = text(columns.price);
    let price = parse_amount(raw_price).ok_or_else(|| invalid("price", raw_price))?;

    let raw_quantity = text(columns.quantity);
    let quantity = parse_quantity(raw_quantity).ok_or_else(|| invalid("quantity", raw_quantity))?;

    // Older files have no cost column, and blank cells count as zero
    let raw_cost = columns.cost.map(text).unwrap_or("");
    let cost = if raw_cost.trim().is_empty() {
        0.0
    } else {
        parse_amount(raw_cost).ok_or_else(|| invalid("cost", raw_cost))?
    };

    Ok(Product {
        id,
        name: text(columns.name).to_string(),
        description: text(columns.desc).to_string(),
        price,
        quantity,
        cost,
        link_suffix: normalize_link_suffix(columns.link.map(text).unwrap_or("")),
    })
}

// ============================================================================
// Writing
// ============================================================================

/// Write products as CSV with the full header.
pub fn write_products<W: io::Write>(writer: W, products: &[Product]) -> Result<(), StoreError> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(HEADER)?;
    for product in products {
        writer.write_record([
            product.id.to_string(),
            product.name.clone(),
            product.description.clone(),
            product.price.to_string(),
            product.quantity.to_string(),
            product.cost.to_string(),
            product.link_suffix.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_csv(products: &[Product]) -> String {
        let mut out = Vec::new();
        write_products(&mut out, products).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_uses_fixed_header() {
        let text = to_csv(&[]);
        assert_eq!(text, "id,name,desc,price,quantity,cost,product_link_name\n");
    }

    #[test]
    fn test_read_legacy_file_defaults_cost_and_link() {
        let text = "id,name,desc,price,quantity\n1,Sunset,Watercolour,250.5,3\n";
        let products = read_products(text.as_bytes()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].cost, 0.0);
        assert_eq!(products[0].link_suffix, "");
        assert_eq!(products[0].price, 250.5);
    }

    #[test]
    fn test_read_blank_cost_is_zero() {
        let text = "id,name,desc,price,quantity,cost,product_link_name\n2,A,B,10,1,,\n";
        let products = read_products(text.as_bytes()).unwrap();
        assert_eq!(products[0].cost, 0.0);
    }

    #[test]
    fn test_read_quoted_commas_and_swedish_text() {
        let text = "id,name,desc,price,quantity,cost,product_link_name\n\
                    3,\"Skärgård, morgon\",\"Olja, 40x50\",1500,1,600,/skargard\n";
        let products = read_products(text.as_bytes()).unwrap();
        assert_eq!(products[0].name, "Skärgård, morgon");
        assert_eq!(products[0].description, "Olja, 40x50");
        assert_eq!(products[0].link_suffix, "skargard");
    }

    #[test]
    fn test_read_rejects_bad_price() {
        let text = "id,name,desc,price,quantity\n1,A,B,ten,1\n";
        let err = read_products(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidField { column: "price", .. }
        ));
        assert!(err.to_string().contains("ten"));
    }

    #[test]
    fn test_read_rejects_whole_file_on_one_bad_row() {
        let text = "id,name,desc,price,quantity\n1,A,B,10,1\n2,C,D,20,many\n";
        assert!(read_products(text.as_bytes()).is_err());
    }

    #[test]
    fn test_read_rejects_zero_and_duplicate_ids() {
        let zero = "id,name,desc,price,quantity\n0,A,B,10,1\n";
        assert!(matches!(
            read_products(zero.as_bytes()),
            Err(StoreError::InvalidField { column: "id", .. })
        ));

        let dup = "id,name,desc,price,quantity\n1,A,B,10,1\n1,C,D,20,2\n";
        assert!(matches!(
            read_products(dup.as_bytes()),
            Err(StoreError::DuplicateId { id: 1, .. })
        ));
    }

    #[test]
    fn test_read_missing_required_column() {
        let text = "id,name,price,quantity\n1,A,10,1\n";
        assert!(matches!(
            read_products(text.as_bytes()),
            Err(StoreError::MissingColumn { column: "desc" })
        ));
    }

    #[test]
    fn test_round_trip_preserves_order_and_fields() {
        let products = vec![
            Product {
                id: 4,
                name: "Fjäll".into(),
                description: "Akvarell, liten".into(),
                price: 349.9,
                quantity: 0,
                cost: 0.0,
                link_suffix: String::new(),
            },
            Product {
                id: 1,
                name: "Hamn".into(),
                description: String::new(),
                price: 1200.0,
                quantity: 2,
                cost: 412.25,
                link_suffix: "hamn i kväll".into(),
            },
        ];
        let text = to_csv(&products);
        assert_eq!(read_products(text.as_bytes()).unwrap(), products);
    }
}
