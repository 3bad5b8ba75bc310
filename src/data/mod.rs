//! Data loading modules

pub mod csv_loader;

// Re-export commonly used types
pub use csv_loader::{Dataset, Table};
