//! CSV data loading for the marketplace tables
//!
//! Maps each file in the data directory to one of the fixed known tables and
//! reads it eagerly into a DataFrame. Timestamp columns stay as strings; the
//! extractors that need dates parse them strictly.

use polars::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::DataError;

/// Identity of one of the fixed known tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Customers,
    Geolocation,
    OrderItems,
    OrderPayments,
    OrderReviews,
    Orders,
    Products,
    Sellers,
}

impl Table {
    /// Resolve a normalized file key (e.g. "orders" for
    /// "olist_orders_dataset.csv") to a table identity
    pub fn from_key(key: &str) -> Option<Table> {
        match key {
            "customers" => Some(Table::Customers),
            "geolocation" => Some(Table::Geolocation),
            "order_items" => Some(Table::OrderItems),
            "order_payments" => Some(Table::OrderPayments),
            "order_reviews" => Some(Table::OrderReviews),
            "orders" => Some(Table::Orders),
            "products" => Some(Table::Products),
            "sellers" => Some(Table::Sellers),
            _ => None,
        }
    }

    /// The normalized key this table is loaded under
    pub fn key(&self) -> &'static str {
        match self {
            Table::Customers => "customers",
            Table::Geolocation => "geolocation",
            Table::OrderItems => "order_items",
            Table::OrderPayments => "order_payments",
            Table::OrderReviews => "order_reviews",
            Table::Orders => "orders",
            Table::Products => "products",
            Table::Sellers => "sellers",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Derive the table key from a file stem: drop the "olist_" prefix and the
/// "_dataset" suffix ("olist_order_items_dataset" -> "order_items")
fn table_key(stem: &str) -> String {
    stem.replace("olist_", "").replace("_dataset", "")
}

/// All loaded tables for one computation session, read-only after load
#[derive(Debug)]
pub struct Dataset {
    tables: HashMap<Table, DataFrame>,
}

impl Dataset {
    /// Load every recognized CSV file from a directory.
    ///
    /// Files without a `.csv` extension or whose derived key does not match a
    /// known table are skipped. Each call re-reads from disk.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, DataError> {
        let dir = dir.as_ref();
        let entries =
            fs::read_dir(dir).map_err(|_| DataError::MissingDataDirectory(dir.to_path_buf()))?;

        let mut tables = HashMap::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
                continue;
            }
            let stem = match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem,
                None => continue,
            };
            let key = table_key(stem);
            let table = match Table::from_key(&key) {
                Some(table) => table,
                None => {
                    debug!("Skipping unrecognized file: {}", path.display());
                    continue;
                }
            };

            let df = CsvReadOptions::default()
                .try_into_reader_with_file_path(Some(path.clone()))?
                .finish()?;
            info!("Loaded table {} ({} rows)", table, df.height());
            tables.insert(table, df);
        }

        Ok(Self { tables })
    }

    /// Build a dataset from already-loaded frames (used by tests)
    pub fn from_tables(tables: HashMap<Table, DataFrame>) -> Self {
        Self { tables }
    }

    /// Look up a table, failing if it was not present in the directory
    pub fn get(&self, table: Table) -> Result<&DataFrame, DataError> {
        self.tables.get(&table).ok_or(DataError::MissingTable(table))
    }

    pub fn contains(&self, table: Table) -> bool {
        self.tables.contains_key(&table)
    }

    /// Number of loaded tables
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn orders(&self) -> Result<&DataFrame, DataError> {
        self.get(Table::Orders)
    }

    pub fn order_items(&self) -> Result<&DataFrame, DataError> {
        self.get(Table::OrderItems)
    }

    pub fn order_reviews(&self) -> Result<&DataFrame, DataError> {
        self.get(Table::OrderReviews)
    }

    pub fn sellers(&self) -> Result<&DataFrame, DataError> {
        self.get(Table::Sellers)
    }

    pub fn customers(&self) -> Result<&DataFrame, DataError> {
        self.get(Table::Customers)
    }

    pub fn geolocation(&self) -> Result<&DataFrame, DataError> {
        self.get(Table::Geolocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_key_strips_prefix_and_suffix() {
        assert_eq!(table_key("olist_orders_dataset"), "orders");
        assert_eq!(table_key("olist_order_items_dataset"), "order_items");
        assert_eq!(table_key("olist_geolocation_dataset"), "geolocation");
        assert_eq!(table_key("sellers"), "sellers");
    }

    #[test]
    fn test_from_key_known_tables() {
        assert_eq!(Table::from_key("orders"), Some(Table::Orders));
        assert_eq!(Table::from_key("order_reviews"), Some(Table::OrderReviews));
        assert_eq!(Table::from_key("closed_deals"), None);
    }

    #[test]
    fn test_load_missing_directory() {
        let err = Dataset::load("/no/such/directory").unwrap_err();
        assert!(matches!(err, DataError::MissingDataDirectory(_)));
    }

    #[test]
    fn test_load_reads_recognized_files_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("olist_orders_dataset.csv"),
            "order_id,order_status\nO1,delivered\nO2,shipped\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("olist_sellers_dataset.csv"),
            "seller_id,seller_zip_code_prefix\nS1,1001\n",
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "not a table").unwrap();
        fs::write(dir.path().join("extra_notes.csv"), "a,b\n1,2\n").unwrap();

        let data = Dataset::load(dir.path()).unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.contains(Table::Orders));
        assert!(data.contains(Table::Sellers));
        assert_eq!(data.orders().unwrap().height(), 2);
        assert!(matches!(
            data.order_reviews().unwrap_err(),
            DataError::MissingTable(Table::OrderReviews)
        ));
    }

    #[test]
    fn test_timestamps_stay_strings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("olist_orders_dataset.csv"),
            "order_id,order_purchase_timestamp\nO1,2020-01-01 10:00:00\n",
        )
        .unwrap();

        let data = Dataset::load(dir.path()).unwrap();
        let orders = data.orders().unwrap();
        assert_eq!(
            orders.column("order_purchase_timestamp").unwrap().dtype(),
            &DataType::String
        );
    }
}
