use crate::core::{Banner, BarSeries, PieSeries, RenderSink};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum PageElement {
    Section { title: String },
    Banner(Banner),
    BarChart(BarSeries),
    PieChart(PieSeries),
}

/// Writes each rendered page as a single JSON line.
pub struct JsonSink<W: Write> {
    out: W,
    elements: Vec<PageElement>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            elements: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for JsonSink<W> {
    fn section(&mut self, title: &str) -> Result<()> {
        self.elements.push(PageElement::Section {
            title: title.to_string(),
        });
        Ok(())
    }

    fn banner(&mut self, banner: &Banner) -> Result<()> {
        self.elements.push(PageElement::Banner(banner.clone()));
        Ok(())
    }

    fn bar_chart(&mut self, series: &BarSeries) -> Result<()> {
        self.elements.push(PageElement::BarChart(series.clone()));
        Ok(())
    }

    fn pie_chart(&mut self, series: &PieSeries) -> Result<()> {
        self.elements.push(PageElement::PieChart(series.clone()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let page = std::mem::take(&mut self.elements);
        serde_json::to_writer(&mut self.out, &page)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
