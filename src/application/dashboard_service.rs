// Dashboard service - Use case for building chart views from user input
use crate::application::chart_composer::ChartComposer;
use crate::application::session::Session;
use crate::domain::chart::{Annotation, AxisRanges, ChartSpec, RenderConfig, SlotSelections};
use crate::domain::market::{PriceRecord, Selection};
use crate::domain::range::parse_range;
use serde::{Deserialize, Serialize};

const EMPTY_WARNING: &str =
    "No series selected. Choose a market for the left or right axis.";
const EMPTY_ANNOTATION: &str = "No data selected";

/// What to do when none of the four slots produced a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyChartPolicy {
    #[default]
    Warn,
    AutoReset,
    Annotate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresentationPolicy {
    pub on_all_empty: EmptyChartPolicy,
    pub zoom_enabled: bool,
    /// Fill an unspecified left primary slot with the first market.
    pub default_first_market: bool,
    /// Selection value that means "none".
    pub empty_sentinel: String,
}

impl Default for PresentationPolicy {
    fn default() -> Self {
        Self {
            on_all_empty: EmptyChartPolicy::Warn,
            zoom_enabled: true,
            default_first_market: false,
            empty_sentinel: "none".to_string(),
        }
    }
}

/// Raw user input for one chart.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartRequest {
    pub left_primary: Option<String>,
    pub left_secondary: Option<String>,
    pub right_primary: Option<String>,
    pub right_secondary: Option<String>,
    pub left_range: Option<String>,
    pub right_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub chart: ChartSpec,
    pub config: RenderConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Set when the client should clear its inputs.
    pub reset: bool,
}

#[derive(Clone)]
pub struct DashboardService {
    session: Session,
    composer: ChartComposer,
    policy: PresentationPolicy,
}

impl DashboardService {
    pub fn new(session: Session, composer: ChartComposer, policy: PresentationPolicy) -> Self {
        Self {
            session,
            composer,
            policy,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn markets(&self) -> Vec<String> {
        self.session.dataset().markets()
    }

    /// Raw rows, optionally limited to the first `limit`.
    pub fn table(&self, limit: Option<usize>) -> &[PriceRecord] {
        let dataset = self.session.dataset();
        match limit {
            Some(n) => dataset.head(n),
            None => dataset.records(),
        }
    }

    pub fn build_view(&self, request: &ChartRequest) -> DashboardView {
        let selections = self.resolve_selections(request);
        let mut ranges = AxisRanges {
            left: request.left_range.as_deref().and_then(parse_range),
            right: request.right_range.as_deref().and_then(parse_range),
        };

        let mut chart = self
            .composer
            .compose(self.session.dataset(), &selections, &ranges);
        let mut warning = None;
        let mut reset = false;

        if chart.is_empty() {
            tracing::debug!("All slots empty, applying {:?}", self.policy.on_all_empty);
            match self.policy.on_all_empty {
                EmptyChartPolicy::Warn => {
                    warning = Some(EMPTY_WARNING.to_string());
                }
                EmptyChartPolicy::Annotate => {
                    warning = Some(EMPTY_WARNING.to_string());
                    chart
                        .layout
                        .annotations
                        .push(Annotation::centered(EMPTY_ANNOTATION));
                }
                EmptyChartPolicy::AutoReset => {
                    reset = true;
                    ranges = AxisRanges::default();
                    chart = self
                        .composer
                        .compose(self.session.dataset(), &selections, &ranges);
                }
            }
        }

        DashboardView {
            chart,
            config: RenderConfig::new(self.policy.zoom_enabled),
            warning,
            reset,
        }
    }

    fn resolve_selections(&self, request: &ChartRequest) -> SlotSelections {
        let sentinel = self.policy.empty_sentinel.as_str();
        let markets = self.markets();
        let resolve =
            |input: &Option<String>| Selection::from_input(input.as_deref(), sentinel, &markets);

        let left_primary = match &request.left_primary {
            None if self.policy.default_first_market => markets
                .first()
                .cloned()
                .map(Selection::Market)
                .unwrap_or_default(),
            input => resolve(input),
        };

        SlotSelections {
            left_primary,
            left_secondary: resolve(&request.left_secondary),
            right_primary: resolve(&request.right_primary),
            right_secondary: resolve(&request.right_secondary),
        }
    }
}
