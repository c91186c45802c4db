use crate::core::{
    BarPoint, BarSeries, Catalog, ChartRecord, PieSeries, PieSlice, QuantityEntry, QuantityMap,
};

pub const BAR_CHART_TITLE: &str = "Bar chart - fruit quantities";
pub const PIE_CHART_TITLE: &str = "Pie chart - fruit proportions";

/// Turns the catalog plus entered quantities into chartable records.
///
/// Records follow catalog order. Items with a zero quantity are dropped, and
/// items missing from `quantities` count as zero. The result may be empty.
pub fn aggregate(catalog: &Catalog, quantities: &QuantityMap) -> Vec<ChartRecord> {
    let records: Vec<ChartRecord> = catalog
        .iter()
        .filter_map(|name| {
            let quantity = quantities.get(name).copied().unwrap_or(0);
            (quantity > 0).then(|| ChartRecord {
                name: name.to_string(),
                quantity,
            })
        })
        .collect();

    tracing::debug!(
        "Aggregated {} chart records from {} catalog items",
        records.len(),
        catalog.len()
    );

    records
}

/// Builds the name-keyed mapping from explicit entries. Later entries win.
pub fn quantity_map(entries: &[QuantityEntry]) -> QuantityMap {
    entries
        .iter()
        .map(|entry| (entry.name.clone(), entry.quantity))
        .collect()
}

/// Categorical series: one bar per record.
pub fn bar_series(records: &[ChartRecord]) -> BarSeries {
    BarSeries {
        title: BAR_CHART_TITLE.to_string(),
        points: records
            .iter()
            .map(|record| BarPoint {
                category: record.name.clone(),
                value: record.quantity,
            })
            .collect(),
    }
}

/// Proportional series: one slice per record with its share of the total.
pub fn pie_series(records: &[ChartRecord]) -> PieSeries {
    // u128 累加，避免多筆大數量時溢位
    let total: u128 = records.iter().map(|record| record.quantity as u128).sum();

    PieSeries {
        title: PIE_CHART_TITLE.to_string(),
        slices: records
            .iter()
            .map(|record| PieSlice {
                label: record.name.clone(),
                value: record.quantity,
                share: if total > 0 {
                    record.quantity as f64 / total as f64
                } else {
                    0.0
                },
            })
            .collect(),
    }
}
