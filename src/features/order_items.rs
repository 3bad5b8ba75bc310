//! Per-order aggregates over the order items table

use polars::prelude::*;

use crate::error::DataError;

/// Count of item rows per order: `order_id, number_of_products`
pub fn product_count(order_items: &DataFrame) -> Result<DataFrame, DataError> {
    let df = order_items
        .clone()
        .lazy()
        .group_by_stable([col("order_id")])
        .agg([col("order_item_id").count().alias("number_of_products")])
        .collect()?;
    Ok(df)
}

/// Count of non-null seller references per order:
/// `order_id, number_of_sellers`.
///
/// This counts item rows, not distinct sellers: an order with three items
/// from one seller yields 3. Use `n_unique` here if a distinct count is ever
/// wanted instead.
pub fn seller_count(order_items: &DataFrame) -> Result<DataFrame, DataError> {
    let df = order_items
        .clone()
        .lazy()
        .group_by_stable([col("order_id")])
        .agg([col("seller_id").count().alias("number_of_sellers")])
        .collect()?;
    Ok(df)
}

/// Price and freight totals per order: `order_id, price, freight_value`
pub fn price_and_freight(order_items: &DataFrame) -> Result<DataFrame, DataError> {
    let df = order_items
        .clone()
        .lazy()
        .group_by_stable([col("order_id")])
        .agg([col("price").sum(), col("freight_value").sum()])
        .collect()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items_fixture() -> DataFrame {
        df!(
            "order_id" => ["O1", "O1", "O1", "O2"],
            "order_item_id" => [1i64, 2, 3, 1],
            "seller_id" => [Some("S1"), Some("S1"), Some("S1"), Some("S2")],
            "price" => [100.0, 50.0, 25.5, 30.0],
            "freight_value" => [10.0, 5.0, 2.5, 3.0],
        )
        .unwrap()
    }

    #[test]
    fn test_product_count_per_order() {
        let out = product_count(&items_fixture()).unwrap();
        assert_eq!(out.get_column_names(), vec!["order_id", "number_of_products"]);
        let counts = out.column("number_of_products").unwrap().u32().unwrap();
        assert_eq!(counts.get(0), Some(3));
        assert_eq!(counts.get(1), Some(1));
    }

    #[test]
    fn test_seller_count_counts_rows_not_distinct() {
        // three items, one seller: count stays 3
        let out = seller_count(&items_fixture()).unwrap();
        let counts = out.column("number_of_sellers").unwrap().u32().unwrap();
        assert_eq!(counts.get(0), Some(3));
        assert_eq!(counts.get(1), Some(1));
    }

    #[test]
    fn test_seller_count_skips_null_references() {
        let items = df!(
            "order_id" => ["O1", "O1"],
            "order_item_id" => [1i64, 2],
            "seller_id" => [Some("S1"), None],
            "price" => [10.0, 20.0],
            "freight_value" => [1.0, 2.0],
        )
        .unwrap();
        let out = seller_count(&items).unwrap();
        let counts = out.column("number_of_sellers").unwrap().u32().unwrap();
        assert_eq!(counts.get(0), Some(1));
    }

    #[test]
    fn test_price_and_freight_sums() {
        let out = price_and_freight(&items_fixture()).unwrap();
        assert_eq!(
            out.get_column_names(),
            vec!["order_id", "price", "freight_value"]
        );
        let price = out.column("price").unwrap().f64().unwrap();
        let freight = out.column("freight_value").unwrap().f64().unwrap();
        assert!((price.get(0).unwrap() - 175.5).abs() < 1e-9);
        assert!((freight.get(0).unwrap() - 17.5).abs() < 1e-9);
        assert!((price.get(1).unwrap() - 30.0).abs() < 1e-9);
    }
}
