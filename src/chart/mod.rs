// src/chart/mod.rs
//! Renderer-agnostic chart descriptions for the two dashboard views.

use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::analysis::{aggregate, OutcomeCounts};
use crate::dataset::{Dataset, LaunchRecord};
use crate::state::selection::{Selection, SiteSelection};

pub const SUCCESS_LABEL: &str = "Success";
pub const FAILURE_LABEL: &str = "Failure";
pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "Launch Outcome (1: Success, 0: Failure)";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Pie,
    Scatter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub row: usize,
    pub hover: String,      // Launch site
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub color_index: usize,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub slices: Vec<PieSlice>,
    pub series: Vec<ScatterSeries>,
}

impl ChartSpec {
    /// True when there is nothing to draw: no non-zero slice and no point.
    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(|s| s.value == 0.0)
            && self.series.iter().all(|s| s.points.is_empty())
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// What the chart titles and the series colors depend on besides the data.
#[derive(Debug, Clone, Copy)]
pub struct ChartContext<'a> {
    pub site: &'a SiteSelection,
    pub booster_categories: &'a [String],
}

impl<'a> ChartContext<'a> {
    pub fn new(site: &'a SiteSelection, booster_categories: &'a [String]) -> Self {
        Self { site, booster_categories }
    }
}

pub fn render_outcome_pie(counts: &OutcomeCounts, context: &ChartContext) -> ChartSpec {
    let title = match context.site {
        SiteSelection::All => "Total Successful Launches for All Sites".to_string(),
        SiteSelection::Site(site) => format!("Success vs. Failure Count for {}", site),
    };

    ChartSpec {
        kind: ChartKind::Pie,
        title,
        x_label: None,
        y_label: None,
        slices: vec![
            PieSlice { label: SUCCESS_LABEL.to_string(), value: counts.success_count as f64 },
            PieSlice { label: FAILURE_LABEL.to_string(), value: counts.failure_count as f64 },
        ],
        series: Vec::new(),
    }
}

/// One series per booster category, in the context's category order. Colors
/// are keyed on that order so a category keeps its color across selections.
pub fn render_payload_scatter(rows: &[&LaunchRecord], context: &ChartContext) -> ChartSpec {
    let title = format!("Payload Mass vs. Launch Outcome for {}", match context.site {
        SiteSelection::All => "All Sites",
        SiteSelection::Site(site) => site.as_str(),
    });

    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in rows {
        let point = ScatterPoint {
            x: record.payload_mass_kg,
            y: record.outcome.class() as f64,
            row: record.index,
            hover: record.site.clone(),
        };

        match series.iter_mut().find(|s| s.name == record.booster_category) {
            Some(existing) => existing.points.push(point),
            None => {
                let color_index = context.booster_categories.iter()
                    .position(|c| *c == record.booster_category)
                    .unwrap_or(context.booster_categories.len() + series.len());
                series.push(ScatterSeries {
                    name: record.booster_category.clone(),
                    color_index,
                    points: vec![point],
                });
            }
        }
    }
    series.sort_by_key(|s| s.color_index);

    ChartSpec {
        kind: ChartKind::Scatter,
        title,
        x_label: Some(PAYLOAD_AXIS_LABEL.to_string()),
        y_label: Some(OUTCOME_AXIS_LABEL.to_string()),
        slices: Vec::new(),
        series,
    }
}

/// Recomputes both views for the current control values.
pub fn render_dashboard(dataset: &Dataset, selection: &Selection) -> (ChartSpec, ChartSpec) {
    let result = aggregate(dataset, selection);
    let context = ChartContext::new(&selection.site, dataset.booster_categories());

    debug!(
        site = %selection.site,
        low = selection.payload_range.low,
        high = selection.payload_range.high,
        successes = result.counts.success_count,
        failures = result.counts.failure_count,
        rows = result.filtered_rows.len(),
        "recomputed dashboard charts"
    );

    (
        render_outcome_pie(&result.counts, &context),
        render_payload_scatter(&result.filtered_rows, &context),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::tests::scenario_dataset;
    use crate::state::selection::PayloadRange;

    fn site(name: &str) -> SiteSelection {
        SiteSelection::Site(name.to_string())
    }

    #[test]
    fn test_pie_titles_and_slices() {
        let counts = OutcomeCounts { success_count: 3, failure_count: 1 };
        let categories: Vec<String> = Vec::new();

        let all = render_outcome_pie(&counts, &ChartContext::new(&SiteSelection::All, &categories));
        assert_eq!(all.kind, ChartKind::Pie);
        assert_eq!(all.title, "Total Successful Launches for All Sites");
        assert_eq!(all.slices, vec![
            PieSlice { label: "Success".to_string(), value: 3.0 },
            PieSlice { label: "Failure".to_string(), value: 1.0 },
        ]);

        let a = site("KSC LC-39A");
        let single = render_outcome_pie(&counts, &ChartContext::new(&a, &categories));
        assert_eq!(single.title, "Success vs. Failure Count for KSC LC-39A");
    }

    #[test]
    fn test_empty_pie_is_valid() {
        let categories: Vec<String> = Vec::new();
        let unknown = site("Z");
        let pie = render_outcome_pie(&OutcomeCounts::default(), &ChartContext::new(&unknown, &categories));
        assert_eq!(pie.slices.len(), 2);
        assert!(pie.is_empty());
    }

    #[test]
    fn test_scatter_groups_by_booster() {
        let dataset = scenario_dataset();
        let selection = Selection::for_dataset(&dataset);
        let (_, scatter) = render_dashboard(&dataset, &selection);

        assert_eq!(scatter.kind, ChartKind::Scatter);
        assert_eq!(scatter.title, "Payload Mass vs. Launch Outcome for All Sites");
        assert_eq!(scatter.x_label.as_deref(), Some(PAYLOAD_AXIS_LABEL));
        assert_eq!(scatter.point_count(), 4);

        let names: Vec<&str> = scatter.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "v1.1", "FT"]);

        let ft = &scatter.series[2];
        assert_eq!(ft.color_index, 2);
        assert_eq!(ft.points[0], ScatterPoint { x: 800.0, y: 1.0, row: 2, hover: "B".to_string() });
        assert_eq!(ft.points[1].x, 3000.0);
        assert_eq!(scatter.series[1].points[0].y, 0.0);
    }

    #[test]
    fn test_scatter_colors_stable_across_selections() {
        let dataset = scenario_dataset();
        let selection = Selection::new(site("B"), PayloadRange::new(0.0, 1000.0));
        let (pie, scatter) = render_dashboard(&dataset, &selection);

        assert_eq!(scatter.title, "Payload Mass vs. Launch Outcome for B");
        assert_eq!(scatter.series.len(), 1);
        assert_eq!(scatter.series[0].name, "FT");
        assert_eq!(scatter.series[0].color_index, 2);
        assert_eq!(scatter.point_count(), 1);

        // Pie ignores the payload window
        assert_eq!(pie.slices[0].value, 2.0);
        assert_eq!(pie.slices[1].value, 0.0);
    }

    #[test]
    fn test_unknown_site_renders_empty_charts() {
        let dataset = scenario_dataset();
        let selection = Selection::new(site("Z"), PayloadRange::full(&dataset));
        let (pie, scatter) = render_dashboard(&dataset, &selection);
        assert!(pie.is_empty());
        assert!(scatter.is_empty());
        assert!(scatter.series.is_empty());
    }

    #[test]
    fn test_spec_serializes() {
        let dataset = scenario_dataset();
        let (pie, _) = render_dashboard(&dataset, &Selection::for_dataset(&dataset));
        let json = serde_json::to_value(&pie).unwrap();
        assert_eq!(json["kind"], "pie");
        assert_eq!(json["slices"][0]["label"], "Success");
        assert_eq!(json["slices"][0]["value"], 3.0);
    }
}
