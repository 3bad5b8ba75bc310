use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One fully-populated row of the final training table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingRow {
    pub order_id: String,
    pub wait_time: i64,
    pub expected_wait_time: i64,
    pub delay_vs_expected: i64,
    pub order_status: String,
    pub dim_is_five_star: i32,
    pub dim_is_one_star: i32,
    pub review_score: i64,
    pub number_of_products: u32,
    pub number_of_sellers: u32,
    pub price: f64,
    pub freight_value: f64,
    pub distance_seller_customer: f64,
}

/// Convert the final training table to typed rows.
///
/// The table carries no nulls by construction; rows that still miss a value
/// are skipped rather than invented.
pub fn training_rows(df: &DataFrame) -> Result<Vec<TrainingRow>, DataError> {
    let order_id = df.column("order_id")?.str()?;
    let wait_time = df.column("wait_time")?.i64()?;
    let expected_wait_time = df.column("expected_wait_time")?.i64()?;
    let delay_vs_expected = df.column("delay_vs_expected")?.i64()?;
    let order_status = df.column("order_status")?.str()?;
    let dim_is_five_star = df.column("dim_is_five_star")?.i32()?;
    let dim_is_one_star = df.column("dim_is_one_star")?.i32()?;
    let review_score = df.column("review_score")?.i64()?;
    let number_of_products = df.column("number_of_products")?.u32()?;
    let number_of_sellers = df.column("number_of_sellers")?.u32()?;
    let price = df.column("price")?.f64()?;
    let freight_value = df.column("freight_value")?.f64()?;
    let distance_seller_customer = df.column("distance_seller_customer")?.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        if let (
            Some(order_id),
            Some(wait_time),
            Some(expected_wait_time),
            Some(delay_vs_expected),
            Some(order_status),
            Some(dim_is_five_star),
            Some(dim_is_one_star),
            Some(review_score),
            Some(number_of_products),
            Some(number_of_sellers),
            Some(price),
            Some(freight_value),
            Some(distance_seller_customer),
        ) = (
            order_id.get(i),
            wait_time.get(i),
            expected_wait_time.get(i),
            delay_vs_expected.get(i),
            order_status.get(i),
            dim_is_five_star.get(i),
            dim_is_one_star.get(i),
            review_score.get(i),
            number_of_products.get(i),
            number_of_sellers.get(i),
            price.get(i),
            freight_value.get(i),
            distance_seller_customer.get(i),
        ) {
            rows.push(TrainingRow {
                order_id: order_id.to_string(),
                wait_time,
                expected_wait_time,
                delay_vs_expected,
                order_status: order_status.to_string(),
                dim_is_five_star,
                dim_is_one_star,
                review_score,
                number_of_products,
                number_of_sellers,
                price,
                freight_value,
                distance_seller_customer,
            });
        }
    }
    Ok(rows)
}
