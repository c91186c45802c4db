use crate::core::aggregate::{aggregate, bar_series, pie_series};
use crate::core::slider::SliderValue;
use crate::core::word_count::{count, WORD_LIMIT};
use crate::core::{
    Banner, BarSeries, Catalog, CatalogProvider, PieSeries, QuantityMap, RenderSink,
};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub const SLIDER_SECTION: &str = "1. Slider";
pub const FRUIT_SECTION: &str = "2. Data entry and fruit charts";
pub const WORDS_SECTION: &str = "3. Word counter";
pub const EMPTY_CHART_ADVISORY: &str =
    "Enter the quantity of at least one fruit to generate the charts.";

/// Everything the host collected for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardInput {
    pub slider: SliderValue,
    pub quantities: QuantityMap,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartSection {
    Charts { bar: BarSeries, pie: PieSeries },
    Advisory { banner: Banner },
}

/// Pure result of one pipeline run, ready for a sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub slider: Banner,
    pub charts: ChartSection,
    /// Empty when the text box is empty.
    pub words: Vec<Banner>,
}

pub struct Dashboard {
    title: String,
    catalog: Catalog,
}

impl Dashboard {
    pub fn new(title: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            title: title.into(),
            catalog,
        }
    }

    pub fn from_provider<P: CatalogProvider>(provider: &P) -> Self {
        Self::new(provider.page_title(), provider.catalog().clone())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn build(&self, input: &DashboardInput) -> DashboardView {
        let records = aggregate(&self.catalog, &input.quantities);

        // 沒有可繪製的資料時不畫圖，改顯示提示
        let charts = if records.is_empty() {
            ChartSection::Advisory {
                banner: Banner::advisory(EMPTY_CHART_ADVISORY),
            }
        } else {
            ChartSection::Charts {
                bar: bar_series(&records),
                pie: pie_series(&records),
            }
        };

        let mut words = Vec::new();
        if !input.text.is_empty() {
            let report = count(&input.text);
            words.push(Banner::success(format!(
                "Your text has {} words.",
                report.count
            )));
            if report.exceeded {
                words.push(Banner::warning(format!(
                    "Your text exceeded the limit of {} words.",
                    WORD_LIMIT
                )));
            }
        }

        DashboardView {
            title: self.title.clone(),
            slider: Banner::info(input.slider.message()),
            charts,
            words,
        }
    }

    pub fn render<S: RenderSink>(
        &self,
        input: &DashboardInput,
        sink: &mut S,
    ) -> Result<DashboardView> {
        let view = self.build(input);
        render_view(&view, sink)?;
        Ok(view)
    }
}

pub fn render_view<S: RenderSink>(view: &DashboardView, sink: &mut S) -> Result<()> {
    sink.section(SLIDER_SECTION)?;
    sink.banner(&view.slider)?;

    sink.section(FRUIT_SECTION)?;
    match &view.charts {
        ChartSection::Charts { bar, pie } => {
            sink.bar_chart(bar)?;
            sink.pie_chart(pie)?;
        }
        ChartSection::Advisory { banner } => sink.banner(banner)?,
    }

    sink.section(WORDS_SECTION)?;
    for banner in &view.words {
        sink.banner(banner)?;
    }

    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BannerKind;

    #[derive(Default)]
    struct RecordingSink {
        calls: Vec<String>,
    }

    impl RenderSink for RecordingSink {
        fn section(&mut self, title: &str) -> Result<()> {
            self.calls.push(format!("section:{}", title));
            Ok(())
        }

        fn banner(&mut self, banner: &Banner) -> Result<()> {
            self.calls.push(format!("{:?}:{}", banner.kind, banner.message));
            Ok(())
        }

        fn bar_chart(&mut self, series: &BarSeries) -> Result<()> {
            self.calls.push(format!("bar:{}", series.points.len()));
            Ok(())
        }

        fn pie_chart(&mut self, series: &PieSeries) -> Result<()> {
            self.calls.push(format!("pie:{}", series.slices.len()));
            Ok(())
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new("Demo", Catalog::new(["Apple", "Banana", "Orange"]))
    }

    #[test]
    fn test_empty_input_shows_advisory_and_no_word_report() {
        let view = dashboard().build(&DashboardInput::default());

        assert_eq!(view.slider.message, "The selected number is: 50");
        match view.charts {
            ChartSection::Advisory { banner } => {
                assert_eq!(banner.kind, BannerKind::Advisory);
                assert_eq!(banner.message, EMPTY_CHART_ADVISORY);
            }
            other => panic!("expected advisory, got {:?}", other),
        }
        assert!(view.words.is_empty());
    }

    #[test]
    fn test_whitespace_text_still_reports_zero() {
        let input = DashboardInput {
            text: "   ".to_string(),
            ..Default::default()
        };
        let view = dashboard().build(&input);
        assert_eq!(view.words, vec![Banner::success("Your text has 0 words.")]);
    }

    #[test]
    fn test_long_text_adds_warning() {
        let text: Vec<String> = (0..51).map(|i| format!("t{}", i)).collect();
        let input = DashboardInput {
            text: text.join(" "),
            ..Default::default()
        };
        let view = dashboard().build(&input);
        assert_eq!(view.words.len(), 2);
        assert_eq!(view.words[0].kind, BannerKind::Success);
        assert_eq!(view.words[1].kind, BannerKind::Warning);
    }

    #[test]
    fn test_render_order() {
        let mut input = DashboardInput::default();
        input.quantities.insert("Apple".to_string(), 3);
        input.quantities.insert("Orange".to_string(), 5);
        input.text = "one two three".to_string();

        let mut sink = RecordingSink::default();
        dashboard().render(&input, &mut sink).unwrap();

        assert_eq!(
            sink.calls,
            vec![
                format!("section:{}", SLIDER_SECTION),
                "Info:The selected number is: 50".to_string(),
                format!("section:{}", FRUIT_SECTION),
                "bar:2".to_string(),
                "pie:2".to_string(),
                format!("section:{}", WORDS_SECTION),
                "Success:Your text has 3 words.".to_string(),
            ]
        );
    }
}
