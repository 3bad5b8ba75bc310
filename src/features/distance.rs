//! Seller-to-customer distance features
//!
//! Joins customers, orders, order items and sellers against the geolocation
//! index, computes a great-circle distance per (order, item, seller,
//! customer) row, and averages per order.

use polars::prelude::*;
use tracing::debug;

use crate::error::DataError;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points given in degrees
pub fn haversine_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let half_dlat = ((lat2 - lat1).to_radians() / 2.0).sin();
    let half_dlng = ((lng2 - lng1).to_radians() / 2.0).sin();
    let a = half_dlat * half_dlat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_dlng * half_dlng;
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

/// One representative (lat, lng) per zip code prefix.
///
/// A prefix can appear many times in the raw geolocation table; the first row
/// in file order wins, deterministically.
pub fn geo_index(geolocation: &DataFrame) -> Result<DataFrame, DataError> {
    let df = geolocation
        .clone()
        .lazy()
        .group_by_stable([col("geolocation_zip_code_prefix")])
        .agg([col("geolocation_lat").first(), col("geolocation_lng").first()])
        .collect()?;
    Ok(df)
}

/// Average seller-to-customer distance per order:
/// `order_id, distance_seller_customer`.
///
/// Rows without coordinates on both sides are dropped before averaging, so
/// orders with no resolvable geo pair are absent from the result rather than
/// zero-filled.
pub fn distance_seller_customer(
    orders: &DataFrame,
    order_items: &DataFrame,
    sellers: &DataFrame,
    customers: &DataFrame,
    geolocation: &DataFrame,
) -> Result<DataFrame, DataError> {
    let geo = geo_index(geolocation)?;

    let sellers_geo = sellers.clone().lazy().join(
        geo.clone().lazy(),
        [col("seller_zip_code_prefix")],
        [col("geolocation_zip_code_prefix")],
        JoinArgs::new(JoinType::Left),
    );
    let sellers_geo = sellers_geo.select([
        col("seller_id"),
        col("geolocation_lat").alias("seller_lat"),
        col("geolocation_lng").alias("seller_lng"),
    ]);

    let customers_geo = customers.clone().lazy().join(
        geo.lazy(),
        [col("customer_zip_code_prefix")],
        [col("geolocation_zip_code_prefix")],
        JoinArgs::new(JoinType::Left),
    );
    let customers_geo = customers_geo.select([
        col("customer_id"),
        col("geolocation_lat").alias("customer_lat"),
        col("geolocation_lng").alias("customer_lng"),
    ]);

    // One row per (order, item, seller, customer) tuple with both coordinate
    // pairs attached; rows missing either side are dropped.
    let pairs = customers
        .clone()
        .lazy()
        .join(
            orders.clone().lazy(),
            [col("customer_id")],
            [col("customer_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            order_items.clone().lazy(),
            [col("order_id")],
            [col("order_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            sellers.clone().lazy(),
            [col("seller_id")],
            [col("seller_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .select([col("order_id"), col("customer_id"), col("seller_id")])
        .join(
            sellers_geo,
            [col("seller_id")],
            [col("seller_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            customers_geo,
            [col("customer_id")],
            [col("customer_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .drop_nulls(Some(vec![
            col("seller_lat"),
            col("seller_lng"),
            col("customer_lat"),
            col("customer_lng"),
        ]))
        .collect()?;

    debug!("{} order item rows with resolvable geo pairs", pairs.height());

    let seller_lat = pairs.column("seller_lat")?.f64()?;
    let seller_lng = pairs.column("seller_lng")?.f64()?;
    let customer_lat = pairs.column("customer_lat")?.f64()?;
    let customer_lng = pairs.column("customer_lng")?.f64()?;

    let mut distances: Vec<Option<f64>> = Vec::with_capacity(pairs.height());
    for i in 0..pairs.height() {
        let distance = match (
            seller_lat.get(i),
            seller_lng.get(i),
            customer_lat.get(i),
            customer_lng.get(i),
        ) {
            (Some(slat), Some(slng), Some(clat), Some(clng)) => {
                Some(haversine_distance(slat, slng, clat, clng))
            }
            _ => None,
        };
        distances.push(distance);
    }
    let pairs = pairs.hstack(&[Series::new("distance_seller_customer", distances)])?;

    // An order can have multiple sellers: average across its rows
    let df = pairs
        .lazy()
        .group_by_stable([col("order_id")])
        .agg([col("distance_seller_customer").mean()])
        .collect()?;
    Ok(df)
}
