use crate::core::{Banner, BannerKind, BarSeries, PieSeries, RenderSink};
use crate::utils::error::Result;
use std::io::Write;

const BAR_WIDTH: u128 = 40;

pub const EXECUTION_INSTRUCTIONS: &str = "Run `edu-dashboard --help` to list the available \
commands. Quantities are passed as --qty NAME=N and sessions are JSON-lines change events.";

/// Plain-text renderer with horizontal bars.
pub struct TerminalSink<W: Write> {
    out: W,
    footer: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, footer: false }
    }

    /// Also print the execution instructions after each page.
    pub fn with_footer(mut self) -> Self {
        self.footer = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn icon(kind: BannerKind) -> &'static str {
    match kind {
        BannerKind::Info => "ℹ️",
        BannerKind::Success => "✅",
        BannerKind::Advisory => "💡",
        BannerKind::Warning => "⚠️",
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn section(&mut self, title: &str) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "== {} ==", title)?;
        Ok(())
    }

    fn banner(&mut self, banner: &Banner) -> Result<()> {
        writeln!(self.out, "{} {}", icon(banner.kind), banner.message)?;
        Ok(())
    }

    fn bar_chart(&mut self, series: &BarSeries) -> Result<()> {
        writeln!(self.out, "{}", series.title)?;

        let max = series.points.iter().map(|p| p.value).max().unwrap_or(0);
        let label_width = series
            .points
            .iter()
            .map(|p| p.category.chars().count())
            .max()
            .unwrap_or(0);

        for point in &series.points {
            // 依最大值等比縮放，非零值至少一格
            let len = if max == 0 {
                0
            } else {
                (point.value as u128 * BAR_WIDTH / max as u128).max(1)
            };
            writeln!(
                self.out,
                "  {:<width$} | {} {}",
                point.category,
                "█".repeat(len as usize),
                point.value,
                width = label_width
            )?;
        }
        Ok(())
    }

    fn pie_chart(&mut self, series: &PieSeries) -> Result<()> {
        writeln!(self.out, "{}", series.title)?;
        for slice in &series.slices {
            writeln!(
                self.out,
                "  {}: {} ({:.1}%)",
                slice.label,
                slice.value,
                slice.share * 100.0
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.footer {
            writeln!(self.out)?;
            writeln!(self.out, "{}", EXECUTION_INSTRUCTIONS)?;
        }
        writeln!(self.out, "---")?;
        self.out.flush()?;
        Ok(())
    }
}
