//! Olist marketplace feature engineering
//!
//! This library loads the fixed set of marketplace CSV tables (orders, order
//! items, reviews, sellers, customers, geolocation) and derives a flat,
//! order-level feature table:
//! - Delivery timing: wait time, expected wait time, delay vs expected
//! - Review score indicators (one star / five star)
//! - Product and seller counts, price and freight totals per order
//! - Average seller-to-customer great-circle distance per order
//!
//! # Example
//!
//! ```no_run
//! use olist_features::FeaturePipeline;
//!
//! let pipeline = FeaturePipeline::from_dir("data/csv").unwrap();
//! let training = pipeline.training_set().unwrap();
//! println!("{} orders with complete features", training.height());
//! ```

pub mod data;
pub mod error;
pub mod features;
pub mod models;
pub mod pipeline;

// Re-export commonly used types
pub use data::{Dataset, Table};
pub use error::DataError;
pub use models::{training_rows, TrainingRow};
pub use pipeline::FeaturePipeline;
