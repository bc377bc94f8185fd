//! CSV export of an annotated matrix.

use std::io::Write;

use crate::types::MatrixRow;

const EXPORT_HEADERS: [&str; 10] = [
    "sku",
    "product_name",
    "brand",
    "category",
    "location",
    "current_stock",
    "forecasted_demand",
    "required_stock",
    "status",
    "price_action",
];

/// Write an annotated matrix as CSV, one row per SKU. Unannotated
/// status and price action cells are left empty.
pub fn write_matrix_csv<W: Write>(writer: W, rows: &[MatrixRow]) -> Result<(), String> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(EXPORT_HEADERS)
        .map_err(|e| format!("CSV export error: {}", e))?;

    for row in rows {
        let status = row
            .status
            .map(|s| s.to_string())
            .unwrap_or_default();
        let price_action = row
            .price_action
            .map(|a| a.label().to_string())
            .unwrap_or_default();
        csv_writer
            .write_record([
                row.sku.as_str(),
                row.product_name.as_str(),
                row.brand.as_str(),
                row.category.as_str(),
                row.location.as_str(),
                &row.current_stock.to_string(),
                &row.forecasted_demand.to_string(),
                &row.required_stock.to_string(),
                &status,
                &price_action,
            ])
            .map_err(|e| format!("CSV export error at row {}: {}", row.sku, e))?;
    }

    csv_writer
        .flush()
        .map_err(|e| format!("CSV export error: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use demand_core::price_gap::PriceAction;
    use demand_core::types::StockTier;

    #[test]
    fn exports_headers_and_annotations() {
        let rows = vec![MatrixRow {
            sku: "SKU-1001".into(),
            product_name: "Wireless Headphones Pro".into(),
            brand: "TechCorp".into(),
            category: "Electronics".into(),
            location: "Warehouse A".into(),
            current_stock: 156,
            forecasted_demand: 280.0,
            required_stock: 350.0,
            unit_price: 89.99,
            max_capacity: 500.0,
            stock_ratio: 0.445,
            status: Some(StockTier::Critical),
            price_action: Some(PriceAction::HoldPrice),
            priority_score: None,
        }];

        let mut buf = Vec::new();
        write_matrix_csv(&mut buf, &rows).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "sku,product_name,brand,category,location,current_stock,forecasted_demand,required_stock,status,price_action"
        );
        let data = lines.next().unwrap();
        assert!(data.starts_with("SKU-1001,Wireless Headphones Pro"));
        assert!(data.contains("Critical"));
        assert!(data.contains("Hold Price"));
    }

    #[test]
    fn unannotated_cells_are_empty() {
        let rows = vec![MatrixRow {
            sku: "SKU-1".into(),
            ..Default::default()
        }];
        let mut buf = Vec::new();
        write_matrix_csv(&mut buf, &rows).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.lines().nth(1).unwrap().ends_with(",,"));
    }
}
