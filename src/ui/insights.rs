// src/ui/insights.rs
use eframe::egui;

use crate::analysis::stats::{
    best_by_rate, best_by_successes, success_rate_by_booster, success_rate_by_payload_bucket,
    success_rate_by_site, worst_by_rate, GroupStats,
};
use crate::state::AppState;

fn answer(ui: &mut egui::Ui, question: &str, group: Option<&GroupStats>) {
    ui.horizontal(|ui| {
        ui.label(question);
        match group {
            Some(g) => ui.strong(format!(
                "{} ({} of {}, {:.1}%)",
                g.label, g.successes, g.launches, g.success_rate() * 100.0
            )),
            None => ui.label("n/a"),
        };
    });
}

fn stats_table(ui: &mut egui::Ui, id: &str, heading: &str, groups: &[GroupStats]) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading(heading);
        egui::Grid::new(id)
            .num_columns(5)
            .striped(true)
            .spacing([16.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Group");
                ui.strong("Launches");
                ui.strong("Successes");
                ui.strong("Failures");
                ui.strong("Success rate");
                ui.end_row();

                for group in groups {
                    ui.label(&group.label);
                    ui.label(group.launches.to_string());
                    ui.label(group.successes.to_string());
                    ui.label(group.failures().to_string());
                    ui.label(format!("{:.1}%", group.success_rate() * 100.0));
                    ui.end_row();
                }
            });
    });
}

/// Whole-dataset statistics; independent of the dashboard controls.
pub fn show_insights_view(ui: &mut egui::Ui, state: &mut AppState) {
    let by_site = success_rate_by_site(&state.dataset);
    let by_booster = success_rate_by_booster(&state.dataset);
    let by_payload = success_rate_by_payload_bucket(&state.dataset, state.config.payload_step);

    egui::ScrollArea::vertical()
        .id_source("insights_scroll")
        .show(ui, |ui| {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.heading("Highlights");
                ui.add_space(4.0);
                answer(ui, "Most successful launches:", best_by_successes(&by_site));
                answer(ui, "Highest site success rate:", best_by_rate(&by_site));
                answer(ui, "Best payload range:", best_by_rate(&by_payload));
                answer(ui, "Worst payload range:", worst_by_rate(&by_payload));
                answer(ui, "Best booster category:", best_by_rate(&by_booster));
            });
            ui.add_space(8.0);

            stats_table(ui, "site_stats", "By Launch Site", &by_site);
            ui.add_space(8.0);
            stats_table(ui, "payload_stats", "By Payload Range", &by_payload);
            ui.add_space(8.0);
            stats_table(ui, "booster_stats", "By Booster Version Category", &by_booster);
        });
}
