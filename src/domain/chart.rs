// Chart specification domain model
//
// Serializes to a Plotly figure: `data` holds the traces and `layout` the
// axes, with the right axis as `yaxis2` overlaying the left one.
use super::market::Selection;
use super::range::AxisRange;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    #[serde(rename = "y")]
    Left,
    #[serde(rename = "y2")]
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Solid,
    Dash,
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
    pub dash: Dash,
}

/// The four selection slots of the dual-axis chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    LeftPrimary,
    LeftSecondary,
    RightPrimary,
    RightSecondary,
}

impl Slot {
    pub const ALL: [Slot; 4] = [
        Slot::LeftPrimary,
        Slot::LeftSecondary,
        Slot::RightPrimary,
        Slot::RightSecondary,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Slot::LeftPrimary | Slot::LeftSecondary => Axis::Left,
            Slot::RightPrimary | Slot::RightSecondary => Axis::Right,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slot::LeftPrimary => "left primary",
            Slot::LeftSecondary => "left secondary",
            Slot::RightPrimary => "right primary",
            Slot::RightSecondary => "right secondary",
        }
    }

    pub fn line_style(self) -> LineStyle {
        let (color, dash) = match self {
            Slot::LeftPrimary => ("blue", Dash::Solid),
            Slot::LeftSecondary => ("cyan", Dash::Dash),
            Slot::RightPrimary => ("red", Dash::Solid),
            Slot::RightSecondary => ("orange", Dash::Dot),
        };
        LineStyle { color, dash }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotSelections {
    pub left_primary: Selection,
    pub left_secondary: Selection,
    pub right_primary: Selection,
    pub right_secondary: Selection,
}

impl SlotSelections {
    pub fn get(&self, slot: Slot) -> &Selection {
        match slot {
            Slot::LeftPrimary => &self.left_primary,
            Slot::LeftSecondary => &self.left_secondary,
            Slot::RightPrimary => &self.right_primary,
            Slot::RightSecondary => &self.right_secondary,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisRanges {
    pub left: AxisRange,
    pub right: AxisRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub line: LineStyle,
    #[serde(rename = "yaxis")]
    pub axis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

impl Font {
    pub fn sized(size: u32) -> Self {
        Self { size, color: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LegendPlacement {
    /// Horizontal, above the plot area, right aligned.
    #[default]
    Top,
    /// Horizontal, below the plot area, centered.
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub yanchor: &'static str,
    pub y: f64,
    pub xanchor: &'static str,
    pub x: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl From<LegendPlacement> for Legend {
    fn from(placement: LegendPlacement) -> Self {
        match placement {
            LegendPlacement::Top => Legend {
                orientation: "h",
                yanchor: "bottom",
                y: 1.02,
                xanchor: "right",
                x: 1.0,
                font: None,
            },
            LegendPlacement::Bottom => Legend {
                orientation: "h",
                yanchor: "top",
                y: -0.3,
                xanchor: "center",
                x: 0.5,
                font: Some(Font::sized(10)),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x: f64,
    pub y: f64,
    pub showarrow: bool,
    pub font: Font,
}

impl Annotation {
    /// Grey text centered on the plot area.
    pub fn centered(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            xref: "paper",
            yref: "paper",
            x: 0.5,
            y: 0.5,
            showarrow: false,
            font: Font {
                size: 16,
                color: Some("gray"),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub height: u32,
    pub margin: Margin,
    pub legend: Legend,
    pub font: Font,
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
    pub yaxis2: AxisLayout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "data")]
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

/// Buttons removed from the mode bar when zooming is disabled.
pub const ZOOM_BUTTONS: [&str; 8] = [
    "zoom2d",
    "pan2d",
    "select2d",
    "lasso2d",
    "zoomIn2d",
    "zoomOut2d",
    "autoScale2d",
    "resetScale2d",
];

/// Renderer options that accompany a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    pub display_mode_bar: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
    #[serde(rename = "displaylogo")]
    pub display_logo: bool,
}

impl RenderConfig {
    pub fn new(zoom_enabled: bool) -> Self {
        let mode_bar_buttons_to_remove = if zoom_enabled {
            Vec::new()
        } else {
            ZOOM_BUTTONS.to_vec()
        };
        Self {
            display_mode_bar: true,
            mode_bar_buttons_to_remove,
            display_logo: false,
        }
    }
}
