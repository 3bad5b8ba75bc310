//! Review score indicator features

use polars::prelude::*;

use crate::error::DataError;

/// Per-review score indicators:
/// `order_id, dim_is_five_star, dim_is_one_star, review_score`.
///
/// Orders with several reviews keep all their rows; downstream joins fan out
/// accordingly.
pub fn review_score_features(reviews: &DataFrame) -> Result<DataFrame, DataError> {
    // A header-only CSV leaves review_score inferred as String; cast up front
    // so the comparisons resolve and an empty input stays an empty output.
    let score = col("review_score").cast(DataType::Int64);
    let df = reviews
        .clone()
        .lazy()
        .select([
            col("order_id"),
            score
                .clone()
                .eq(lit(5))
                .cast(DataType::Int32)
                .alias("dim_is_five_star"),
            score
                .clone()
                .eq(lit(1))
                .cast(DataType::Int32)
                .alias("dim_is_one_star"),
            score.alias("review_score"),
        ])
        .collect()?;
    Ok(df)
}
