//! End-to-end feature pipeline over a loaded dataset

use polars::prelude::DataFrame;
use std::path::Path;
use tracing::info;

use crate::data::Dataset;
use crate::error::DataError;
use crate::features::{
    build_training_set, distance_seller_customer, price_and_freight, product_count,
    review_score_features, seller_count, wait_time_features,
};

/// Derives order-level features from the loaded marketplace tables.
///
/// The dataset is read-only for the lifetime of the pipeline; every method
/// recomputes from the raw tables.
#[derive(Debug)]
pub struct FeaturePipeline {
    data: Dataset,
}

impl FeaturePipeline {
    pub fn new(data: Dataset) -> Self {
        Self { data }
    }

    /// Load all tables from a directory of CSV files
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, DataError> {
        Ok(Self::new(Dataset::load(dir)?))
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Timing features; non-delivered orders excluded unless requested
    pub fn wait_time(&self, keep_non_delivered: bool) -> Result<DataFrame, DataError> {
        wait_time_features(self.data.orders()?, keep_non_delivered)
    }

    pub fn review_score(&self) -> Result<DataFrame, DataError> {
        review_score_features(self.data.order_reviews()?)
    }

    pub fn number_of_products(&self) -> Result<DataFrame, DataError> {
        product_count(self.data.order_items()?)
    }

    pub fn number_of_sellers(&self) -> Result<DataFrame, DataError> {
        seller_count(self.data.order_items()?)
    }

    pub fn price_and_freight(&self) -> Result<DataFrame, DataError> {
        price_and_freight(self.data.order_items()?)
    }

    pub fn distance_seller_customer(&self) -> Result<DataFrame, DataError> {
        distance_seller_customer(
            self.data.orders()?,
            self.data.order_items()?,
            self.data.sellers()?,
            self.data.customers()?,
            self.data.geolocation()?,
        )
    }

    /// The final training table: all extractor outputs inner-joined on
    /// `order_id`, incomplete rows dropped. Column order follows the
    /// extractor order: wait time, review score, product count, seller
    /// count, price/freight, distance.
    pub fn training_set(&self) -> Result<DataFrame, DataError> {
        let frames = vec![
            self.wait_time(false)?,
            self.review_score()?,
            self.number_of_products()?,
            self.number_of_sellers()?,
            self.price_and_freight()?,
            self.distance_seller_customer()?,
        ];
        let training = build_training_set(frames)?;
        info!(
            "Built training set: {} orders, {} columns",
            training.height(),
            training.width()
        );
        Ok(training)
    }
}
