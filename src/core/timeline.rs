//! Experience timeline: interval bars on a shared time axis

use crate::core::content::Renderable;
use crate::core::html::{escape, HtmlWriter};
use crate::core::style::StyleConfig;
use crate::domain::model::{Experience, TimelineCategory};
use chrono::{Datelike, NaiveDate};

const CHART_WIDTH: f64 = 800.0;
const LABEL_GUTTER: f64 = 150.0;
const RIGHT_PADDING: f64 = 20.0;
const TOP_PADDING: f64 = 10.0;
const ROW_HEIGHT: f64 = 36.0;
const BAR_HEIGHT: f64 = 22.0;
const AXIS_HEIGHT: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBar {
    pub label: String,
    pub category: TimelineCategory,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub description: String,
}

/// Bars in source order; row 0 is drawn at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineChart {
    pub bars: Vec<TimelineBar>,
}

impl TimelineChart {
    /// Convert experience entries into bars, closing ongoing entries at `today`.
    pub fn from_experience(entries: &[Experience], today: NaiveDate) -> Self {
        let bars = entries
            .iter()
            .map(|e| TimelineBar {
                label: e.organization.clone(),
                category: e.category,
                start: e.start,
                end: e.resolved_end(today),
                description: format!("{} ({})", e.description(), e.period_label()),
            })
            .collect();
        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Labels from top to bottom.
    pub fn row_labels(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }

    /// Distinct categories in order of first appearance.
    pub fn legend(&self) -> Vec<TimelineCategory> {
        let mut seen = Vec::new();
        for bar in &self.bars {
            if !seen.contains(&bar.category) {
                seen.push(bar.category);
            }
        }
        seen
    }

    /// Earliest start and latest end over all bars.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = self.bars.iter().map(|b| b.start).min()?;
        let end = self.bars.iter().map(|b| b.end).max()?;
        Some((start, end))
    }

    pub fn height(&self) -> f64 {
        TOP_PADDING + ROW_HEIGHT * self.bars.len() as f64 + AXIS_HEIGHT
    }

    /// Vertical position of a row's bar. The axis is reversed so the first
    /// entry sits at the top.
    pub fn row_y(&self, row: usize) -> f64 {
        TOP_PADDING + ROW_HEIGHT * row as f64 + (ROW_HEIGHT - BAR_HEIGHT) / 2.0
    }

    /// Horizontal position of a date on the time axis.
    pub fn x_for(&self, date: NaiveDate) -> f64 {
        let plot_width = CHART_WIDTH - LABEL_GUTTER - RIGHT_PADDING;
        match self.range() {
            Some((min, max)) => {
                let span = (max - min).num_days().max(1) as f64;
                let offset = (date - min).num_days().clamp(0, span as i64) as f64;
                LABEL_GUTTER + offset / span * plot_width
            }
            None => LABEL_GUTTER,
        }
    }

    /// January 1st of every year strictly inside the range.
    pub fn year_ticks(&self) -> Vec<NaiveDate> {
        let Some((min, max)) = self.range() else {
            return vec![];
        };
        ((min.year() + 1)..=max.year())
            .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .filter(|tick| *tick > min && *tick < max)
            .collect()
    }

    fn render_svg(&self, out: &mut HtmlWriter, style: &StyleConfig) {
        let height = self.height();
        let axis_y = height - AXIS_HEIGHT;
        let view_box = format!("0 0 {} {}", CHART_WIDTH, height);
        out.open(
            "svg",
            &[
                ("xmlns", "http://www.w3.org/2000/svg"),
                ("viewBox", view_box.as_str()),
                ("role", "img"),
                ("aria-label", "Experience timeline"),
            ],
        );

        for tick in self.year_ticks() {
            let x = self.x_for(tick);
            out.raw(&format!(
                r##"<line x1="{x:.1}" y1="{top}" x2="{x:.1}" y2="{axis_y}" stroke="#ddd"/>"##,
                top = TOP_PADDING,
            ));
            out.raw(&format!(
                r#"<text x="{x:.1}" y="{y}" text-anchor="middle" font-size="12">{year}</text>"#,
                y = axis_y + 18.0,
                year = tick.year(),
            ));
        }

        for (row, bar) in self.bars.iter().enumerate() {
            let y = self.row_y(row);
            let x = self.x_for(bar.start);
            let width = (self.x_for(bar.end) - x).max(2.0);
            let category_class = format!("bar-{}", bar.category.css_class());
            let class = out.classes(&["bar", category_class.as_str()]);
            out.open(
                "g",
                &[("class", class.as_str()), ("data-category", bar.category.as_str())],
            );
            out.text("title", &[], &format!("{}: {}", bar.label, bar.description));
            out.raw(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{width:.1}" height="{h}" rx="4" fill="{fill}"/>"#,
                h = BAR_HEIGHT,
                fill = escape(style.category_color(bar.category)),
            ));
            out.raw(&format!(
                r#"<text x="{lx}" y="{ly:.1}" text-anchor="end" font-size="13">{label}</text>"#,
                lx = LABEL_GUTTER - 8.0,
                ly = y + BAR_HEIGHT / 2.0 + 4.0,
                label = escape(&bar.label),
            ));
            out.close("g");
        }

        out.close("svg");
    }

    fn render_legend(&self, out: &mut HtmlWriter, style: &StyleConfig) {
        let class = out.class("legend");
        out.open("ul", &[("class", class.as_str())]);
        for category in self.legend() {
            let swatch = format!(
                "display:inline-block;width:12px;height:12px;margin-right:6px;background:{}",
                style.category_color(category)
            );
            out.open("li", &[("data-category", category.as_str())]);
            out.raw(&format!(
                "<span style=\"{}\"></span>{}",
                escape(&swatch),
                category.as_str()
            ));
            out.close("li");
        }
        out.close("ul");
    }
}

impl Renderable for TimelineChart {
    fn render(&self, out: &mut HtmlWriter, style: &StyleConfig) {
        let class = out.class("timeline");
        out.open("figure", &[("class", class.as_str())]);
        if self.is_empty() {
            let placeholder = out.class("placeholder");
            out.text("p", &[("class", placeholder.as_str())], "No timeline entries yet");
        } else {
            self.render_svg(out, style);
            self.render_legend(out, style);
        }
        out.close("figure");
    }
}
