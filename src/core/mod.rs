pub mod aggregate;
pub mod dashboard;
pub mod slider;
pub mod word_count;

pub use crate::domain::model::{
    Banner, BannerKind, BarPoint, BarSeries, Catalog, ChartRecord, PieSeries, PieSlice,
    QuantityEntry, QuantityMap, WordReport,
};
pub use crate::domain::ports::{CatalogProvider, RenderSink};
pub use crate::utils::error::Result;
