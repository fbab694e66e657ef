// src/ui/dashboard.rs
use eframe::egui;

use crate::state::AppState;
use crate::state::selection::{PayloadRange, SiteSelection};
use crate::ui::charts::show_chart;

pub fn show_dashboard_view(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .id_source("dashboard_scroll")
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("SpaceX Launch Records Dashboard")
                    .size(32.0)
                    .color(egui::Color32::from_rgb(80, 61, 54)));
            });
            ui.add_space(8.0);

            show_site_selector(ui, state);
            ui.add_space(8.0);

            let chart_width = ui.available_width();
            let pie = state.charts().pie.clone();
            show_chart(ui, &pie, (chart_width * 0.35).clamp(220.0, 360.0));

            ui.add_space(8.0);
            show_payload_range(ui, state);
            ui.add_space(8.0);

            let scatter = state.charts().scatter.clone();
            show_chart(ui, &scatter, 320.0);
        });
}

fn show_site_selector(ui: &mut egui::Ui, state: &mut AppState) {
    let mut site = state.selection.site.clone();
    let options: Vec<SiteSelection> = std::iter::once(SiteSelection::All)
        .chain(state.dataset.sites().iter().map(|s| SiteSelection::parse(s)))
        .collect();

    ui.horizontal(|ui| {
        ui.label("Launch Site:");
        egui::ComboBox::from_id_source("site_dropdown")
            .selected_text(site.label().to_string())
            .width(220.0)
            .show_ui(ui, |ui| {
                for option in options {
                    let label = option.label().to_string();
                    ui.selectable_value(&mut site, option, label);
                }
            });
    });

    if site != state.selection.site {
        state.set_site(site);
    }
}

fn show_payload_range(ui: &mut egui::Ui, state: &mut AppState) {
    let min = state.dataset.min_payload();
    let max = state.dataset.max_payload();
    let step = state.config.payload_step;
    let PayloadRange { mut low, mut high } = state.selection.payload_range;

    ui.group(|ui| {
        ui.label("Payload Range (Kg):");
        ui.horizontal(|ui| {
            ui.label("From");
            ui.add(egui::Slider::new(&mut low, min..=max).step_by(step).suffix(" kg"));
            ui.label("to");
            ui.add(egui::Slider::new(&mut high, min..=max).step_by(step).suffix(" kg"));
            if ui.button("Full range").clicked() {
                low = min;
                high = max;
            }
        });

        if low > high {
            ui.colored_label(
                egui::Color32::from_rgb(200, 100, 100),
                "Lower bound is above upper bound: no launches match",
            );
        }
    });

    // Slider rounding can land past the data bounds
    let range = PayloadRange::parse(&[low.clamp(min, max), high.clamp(min, max)], PayloadRange::new(min, max));
    if range != state.selection.payload_range {
        state.set_payload_range(range);
    }
}
