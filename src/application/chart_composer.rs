// Chart composer - Builds the dual-axis chart from the four slots
use crate::domain::chart::{
    AxisLayout, AxisRanges, ChartSpec, Font, Layout, LegendPlacement, Margin, Slot, SlotSelections,
    Title, Trace,
};
use crate::domain::market::Dataset;
use crate::domain::range::AxisRange;
use chrono::NaiveDate;

const TRACE_MODE: &str = "lines+markers";

/// Cosmetic settings shared by every composed chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: String,
    pub x_title: String,
    pub left_title: String,
    pub right_title: String,
    pub height: u32,
    pub margin: Margin,
    pub legend: LegendPlacement,
    pub font_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Monthly indicators".to_string(),
            x_title: "Month".to_string(),
            left_title: "Left axis price".to_string(),
            right_title: "Right axis price".to_string(),
            height: 500,
            margin: Margin { l: 80, r: 80, t: 40, b: 20 },
            legend: LegendPlacement::Top,
            font_size: 12,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartComposer {
    style: ChartStyle,
}

impl ChartComposer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Build a chart with one trace per slot whose selection has rows.
    ///
    /// Rows without a valid date or a price are left out of the trace points.
    pub fn compose(
        &self,
        dataset: &Dataset,
        selections: &SlotSelections,
        ranges: &AxisRanges,
    ) -> ChartSpec {
        let mut traces = Vec::new();

        for slot in Slot::ALL {
            let selection = selections.get(slot);
            let Some(identifier) = selection.identifier() else {
                continue;
            };
            let rows = dataset.select(selection);
            if rows.is_empty() {
                tracing::debug!("No rows for {} in slot {}", identifier, slot.label());
                continue;
            }

            let (x, y): (Vec<NaiveDate>, Vec<f64>) = rows
                .iter()
                .filter_map(|r| r.date.zip(r.price))
                .unzip();

            traces.push(Trace {
                name: format!("{} ({})", identifier.trim(), slot.label()),
                x,
                y,
                mode: TRACE_MODE,
                line: slot.line_style(),
                axis: slot.axis(),
            });
        }

        ChartSpec {
            traces,
            layout: self.layout(ranges),
        }
    }

    fn layout(&self, ranges: &AxisRanges) -> Layout {
        let style = &self.style;
        Layout {
            title: Title::new(&style.title),
            height: style.height,
            margin: style.margin,
            legend: style.legend.into(),
            font: Font::sized(style.font_size),
            xaxis: AxisLayout {
                title: Title::new(&style.x_title),
                range: None,
                overlaying: None,
                side: None,
            },
            yaxis: AxisLayout {
                title: Title::new(&style.left_title),
                range: bounds(ranges.left),
                overlaying: None,
                side: Some("left"),
            },
            yaxis2: AxisLayout {
                title: Title::new(&style.right_title),
                range: bounds(ranges.right),
                overlaying: Some("y"),
                side: Some("right"),
            },
            annotations: Vec::new(),
        }
    }
}

fn bounds(range: AxisRange) -> Option<[f64; 2]> {
    range.map(|(low, high)| [low, high])
}
