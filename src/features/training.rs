//! Training set assembly

use polars::prelude::*;
use tracing::debug;

use crate::error::DataError;

/// Reduce extractor outputs to the final training table.
///
/// Inner-joins the frames left to right on `order_id`, then drops every row
/// with any missing value. Only orders present in every frame survive. An
/// empty frame anywhere (or an empty input list) yields an empty table, not
/// an error.
pub fn build_training_set(frames: Vec<DataFrame>) -> Result<DataFrame, DataError> {
    let mut frames = frames.into_iter();
    let first = match frames.next() {
        Some(frame) => frame,
        None => return Ok(DataFrame::empty()),
    };

    let mut joined = first.lazy();
    for frame in frames {
        joined = joined.join(
            frame.lazy(),
            [col("order_id")],
            [col("order_id")],
            JoinArgs::new(JoinType::Inner),
        );
    }
    let df = joined.drop_nulls(None).collect()?;
    debug!("training set: {} complete orders", df.height());
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_chain_keeps_intersection_only() {
        let a = df!("order_id" => ["O1", "O2", "O3"], "x" => [1i64, 2, 3]).unwrap();
        let b = df!("order_id" => ["O2", "O3", "O4"], "y" => [20i64, 30, 40]).unwrap();
        let c = df!("order_id" => ["O3", "O2"], "z" => [300i64, 200]).unwrap();

        let out = build_training_set(vec![a, b, c]).unwrap();
        assert_eq!(out.height(), 2);
        assert_eq!(out.get_column_names(), vec!["order_id", "x", "y", "z"]);
        let ids: Vec<_> = out
            .column("order_id")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert!(ids.contains(&"O2"));
        assert!(ids.contains(&"O3"));
    }

    #[test]
    fn test_rows_with_nulls_dropped() {
        let a = df!("order_id" => ["O1", "O2"], "x" => [Some(1i64), None]).unwrap();
        let b = df!("order_id" => ["O1", "O2"], "y" => [10i64, 20]).unwrap();

        let out = build_training_set(vec![a, b]).unwrap();
        assert_eq!(out.height(), 1);
        assert_eq!(
            out.column("order_id").unwrap().str().unwrap().get(0),
            Some("O1")
        );
    }

    #[test]
    fn test_disjoint_keys_yield_empty_table() {
        let a = df!("order_id" => ["O1"], "x" => [1i64]).unwrap();
        let b = df!("order_id" => ["O2"], "y" => [2i64]).unwrap();
        let out = build_training_set(vec![a, b]).unwrap();
        assert_eq!(out.height(), 0);
    }

    #[test]
    fn test_empty_frame_yields_empty_table() {
        let a = df!("order_id" => ["O1", "O2"], "x" => [1i64, 2]).unwrap();
        let empty = df!(
            "order_id" => Vec::<String>::new(),
            "y" => Vec::<i64>::new(),
        )
        .unwrap();
        let out = build_training_set(vec![a, empty]).unwrap();
        assert_eq!(out.height(), 0);
    }

    #[test]
    fn test_no_frames_yield_empty_table() {
        let out = build_training_set(Vec::new()).unwrap();
        assert_eq!(out.height(), 0);
    }
}
