use crate::domain::model::{Banner, BarSeries, Catalog, PieSeries};
use crate::utils::error::Result;

/// Rendering collaborator for a dashboard page.
pub trait RenderSink {
    fn section(&mut self, title: &str) -> Result<()>;
    fn banner(&mut self, banner: &Banner) -> Result<()>;
    fn bar_chart(&mut self, series: &BarSeries) -> Result<()>;
    fn pie_chart(&mut self, series: &PieSeries) -> Result<()>;

    /// Called once after a full page has been rendered.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub trait CatalogProvider {
    fn catalog(&self) -> &Catalog;
    fn page_title(&self) -> &str;
    fn slider_default(&self) -> u8;
}
