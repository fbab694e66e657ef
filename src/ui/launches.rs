// src/ui/launches.rs
use eframe::egui;

use crate::state::AppState;

pub fn show_launches_view(ui: &mut egui::Ui, state: &mut AppState) {
    let rows = state.filtered_rows();

    ui.horizontal(|ui| {
        ui.heading("Filtered Launches");
        ui.label(format!(
            "{} of {} launches ({}, {:.0}-{:.0} kg)",
            rows.len(),
            state.dataset.len(),
            state.selection.site.label(),
            state.selection.payload_range.low,
            state.selection.payload_range.high,
        ));
    });
    ui.add_space(8.0);

    if rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label("No launches match the current filters");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("launches_scroll")
        .show(ui, |ui| {
            egui::Grid::new("launches_grid")
                .num_columns(5)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Row");
                    ui.strong("Launch Site");
                    ui.strong("Payload Mass (kg)");
                    ui.strong("Outcome");
                    ui.strong("Booster Version Category");
                    ui.end_row();

                    for record in &rows {
                        ui.label(record.index.to_string());
                        ui.label(&record.site);
                        ui.label(format!("{:.1}", record.payload_mass_kg));
                        let color = if record.outcome.is_success() {
                            egui::Color32::from_rgb(100, 200, 100)
                        } else {
                            egui::Color32::from_rgb(200, 100, 100)
                        };
                        ui.colored_label(color, format!("{} ({})", record.outcome, record.outcome.class()));
                        ui.label(&record.booster_category);
                        ui.end_row();
                    }
                });
        });
}
