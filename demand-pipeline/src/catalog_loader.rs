//! CSV catalog loader.
//!
//! Parses warehouse catalog files into `CatalogRecord` structs.
//! Expected CSV columns:
//!   sku, product_name, brand, category, location, current_stock,
//!   forecasted_demand, required_stock, unit_price, max_capacity,
//!   walmart_price, amazon_price
//!
//! The two competitor price columns may be empty; rows without them are
//! annotated from stock position alone.

use serde::Deserialize;
use std::io::Read;

/// One raw catalog row before annotation.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub sku: String,
    pub product_name: String,
    pub brand: String,
    pub category: String,
    pub location: String,
    pub current_stock: u32,
    pub forecasted_demand: f64,
    pub required_stock: f64,
    pub unit_price: f64,
    pub max_capacity: f64,
    #[serde(default)]
    pub walmart_price: Option<f64>,
    #[serde(default)]
    pub amazon_price: Option<f64>,
}

impl CatalogRecord {
    /// Effective required stock: the forecast overrides the catalog
    /// floor when it is higher.
    pub fn effective_required(&self) -> f64 {
        self.forecasted_demand.max(self.required_stock)
    }

    /// Known competitor prices for this item, if any.
    pub fn competitor_prices(&self) -> Vec<f64> {
        [self.walmart_price, self.amazon_price]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Load catalog records from a CSV reader.
pub fn load_catalog<R: Read>(reader: R) -> Result<Vec<CatalogRecord>, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let record: CatalogRecord = result
            .map_err(|e| format!("CSV parse error at line {}: {}", line_num + 2, e))?;
        records.push(record);
    }

    Ok(records)
}

/// Load catalog records from a CSV file path.
pub fn load_catalog_file(path: &str) -> Result<Vec<CatalogRecord>, String> {
    let file =
        std::fs::File::open(path).map_err(|e| format!("Failed to open '{}': {}", path, e))?;
    load_catalog(file)
}
