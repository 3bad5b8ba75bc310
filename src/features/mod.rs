//! Per-topic feature extractors
//!
//! Each extractor reads one or two raw tables and produces an order-indexed
//! frame. They never mutate shared input (DataFrame clones are cheap and the
//! lazy plans only read), so the extractors are independently computable.

pub mod distance;
pub mod order_items;
pub mod review_score;
pub mod training;
pub mod wait_time;

// Re-export commonly used functions
pub use distance::{distance_seller_customer, geo_index, haversine_distance};
pub use order_items::{price_and_freight, product_count, seller_count};
pub use review_score::review_score_features;
pub use training::build_training_set;
pub use wait_time::wait_time_features;
