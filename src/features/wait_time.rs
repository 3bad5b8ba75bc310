//! Delivery timing features
//!
//! Wait times are measured in whole days at date precision: the time-of-day
//! part of each timestamp is discarded before subtracting.

use polars::prelude::*;

use crate::error::DataError;

const PURCHASE: &str = "order_purchase_timestamp";
const DELIVERED: &str = "order_delivered_customer_date";
const ESTIMATED: &str = "order_estimated_delivery_date";

/// Strictly parse a timestamp column and truncate to date precision.
/// Unparsable values abort the computation rather than coerce to null.
fn as_date(name: &str) -> Expr {
    col(name)
        .str()
        .to_datetime(
            Some(TimeUnit::Milliseconds),
            None,
            StrptimeOptions {
                format: Some("%Y-%m-%d %H:%M:%S".into()),
                ..Default::default()
            },
            lit("raise"),
        )
        .dt()
        .date()
}

fn days_between(later: Expr, earlier: Expr) -> Expr {
    (later - earlier).dt().total_days()
}

/// Per-order timing features:
/// `order_id, wait_time, expected_wait_time, delay_vs_expected, order_status`.
///
/// Non-delivered orders are filtered out unless `keep_non_delivered` is set;
/// kept rows with missing delivery dates carry null derived columns.
/// `delay_vs_expected` is clamped at zero, so early or on-time deliveries
/// contribute no delay.
pub fn wait_time_features(
    orders: &DataFrame,
    keep_non_delivered: bool,
) -> Result<DataFrame, DataError> {
    let mut lf = orders.clone().lazy();
    if !keep_non_delivered {
        lf = lf.filter(col("order_status").eq(lit("delivered")));
    }
    let df = lf
        .select([
            col("order_id"),
            days_between(as_date(DELIVERED), as_date(PURCHASE)).alias("wait_time"),
            days_between(as_date(ESTIMATED), as_date(PURCHASE)).alias("expected_wait_time"),
            days_between(as_date(DELIVERED), as_date(ESTIMATED))
                .clip_min(lit(0))
                .alias("delay_vs_expected"),
            col("order_status"),
        ])
        .collect()?;
    Ok(df)
}
