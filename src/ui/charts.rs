// src/ui/charts.rs
use eframe::egui;
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};
use std::f64::consts::TAU;

use crate::chart::{ChartKind, ChartSpec, ScatterPoint, FAILURE_LABEL, SUCCESS_LABEL};

// Plotly default qualitative palette
const PALETTE: [egui::Color32; 10] = [
    egui::Color32::from_rgb(99, 110, 250),
    egui::Color32::from_rgb(239, 85, 59),
    egui::Color32::from_rgb(0, 204, 150),
    egui::Color32::from_rgb(171, 99, 250),
    egui::Color32::from_rgb(255, 161, 90),
    egui::Color32::from_rgb(25, 211, 243),
    egui::Color32::from_rgb(255, 102, 146),
    egui::Color32::from_rgb(182, 232, 128),
    egui::Color32::from_rgb(255, 151, 255),
    egui::Color32::from_rgb(254, 203, 82),
];

const PIE_SEGMENTS: usize = 96;

pub fn palette_color(index: usize) -> egui::Color32 {
    PALETTE[index % PALETTE.len()]
}

fn slice_color(label: &str, index: usize) -> egui::Color32 {
    match label {
        SUCCESS_LABEL => palette_color(0),
        FAILURE_LABEL => palette_color(1),
        _ => palette_color(index),
    }
}

/// Polygon outline of one pie slice: the center followed by the arc.
pub fn slice_outline(start: f64, sweep: f64) -> Vec<[f64; 2]> {
    let steps = ((sweep / TAU) * PIE_SEGMENTS as f64).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = start + sweep * i as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

pub fn show_chart(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading(&spec.title);
            match spec.kind {
                ChartKind::Pie => show_pie(ui, spec, height),
                ChartKind::Scatter => show_scatter(ui, spec, height),
            }
        });
    });
}

fn show_pie(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
    let total: f64 = spec.slices.iter().map(|s| s.value).sum();

    let plot = Plot::new("outcome_pie")
        .height(height)
        .data_aspect(1.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_background(false)
        .show_axes([false, false])
        .show_x(false)
        .show_y(false)
        .include_x(-1.4)
        .include_x(1.4)
        .include_y(-1.2)
        .include_y(1.2)
        .legend(Legend::default());

    plot.show(ui, |plot_ui| {
        if spec.is_empty() || total <= 0.0 {
            plot_ui.text(Text::new(PlotPoint::new(0.0, 0.0), "No launches for this selection")
                .color(egui::Color32::GRAY));
            return;
        }

        // Start at twelve o'clock and go clockwise
        let mut start = TAU / 4.0;
        for (index, slice) in spec.slices.iter().enumerate() {
            if slice.value <= 0.0 {
                continue;
            }
            let fraction = slice.value / total;
            let sweep = -fraction * TAU;

            plot_ui.polygon(
                Polygon::new(PlotPoints::new(slice_outline(start, sweep)))
                    .fill_color(slice_color(&slice.label, index))
                    .stroke(egui::Stroke::new(1.0, egui::Color32::WHITE))
                    .name(format!("{} ({})", slice.label, slice.value)),
            );

            let mid = start + sweep / 2.0;
            plot_ui.text(
                Text::new(PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()), format!("{:.1}%", fraction * 100.0))
                    .color(egui::Color32::WHITE),
            );

            start += sweep;
        }
    });

    ui.horizontal(|ui| {
        for slice in &spec.slices {
            ui.label(format!("{}: {}", slice.label, slice.value));
        }
    });
}

/// Finds the point of `series_name` nearest to the hovered position.
pub fn nearest_point<'a>(spec: &'a ChartSpec, series_name: &str, x: f64, y: f64) -> Option<&'a ScatterPoint> {
    spec.series.iter()
        .find(|s| s.name == series_name)?
        .points.iter()
        .min_by(|a, b| {
            let da = (a.x - x).powi(2) + (a.y - y).powi(2);
            let db = (b.x - x).powi(2) + (b.y - y).powi(2);
            da.total_cmp(&db)
        })
}

fn show_scatter(ui: &mut egui::Ui, spec: &ChartSpec, height: f32) {
    // The formatter must be 'static, so it gets its own copy of the points
    let hover_spec = spec.clone();

    let mut plot = Plot::new("payload_scatter")
        .height(height)
        .include_y(-0.25)
        .include_y(1.25)
        .include_x(0.0)
        .legend(Legend::default())
        .label_formatter(move |name, value| {
            if name.is_empty() {
                return format!("{:.0} kg\nclass {:.2}", value.x, value.y);
            }
            match nearest_point(&hover_spec, name, value.x, value.y) {
                Some(point) => format!(
                    "{}\nLaunch Site: {}\nPayload: {:.0} kg\nclass: {:.0}",
                    name, point.hover, point.x, point.y
                ),
                None => name.to_string(),
            }
        });

    if let Some(label) = &spec.x_label {
        plot = plot.x_axis_label(label.clone());
    }
    if let Some(label) = &spec.y_label {
        plot = plot.y_axis_label(label.clone());
    }

    plot.show(ui, |plot_ui| {
        for series in &spec.series {
            let points: Vec<[f64; 2]> = series.points.iter().map(|p| [p.x, p.y]).collect();
            plot_ui.points(
                Points::new(points)
                    .radius(4.0)
                    .color(palette_color(series.color_index))
                    .name(&series.name),
            );
        }
    });

    if spec.series.is_empty() {
        ui.label(egui::RichText::new("No launches match the current filters").italics());
    } else {
        ui.label(format!("{} launches shown", spec.point_count()));
    }
}
