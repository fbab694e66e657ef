// src/app.rs
use eframe::egui;
use rfd::FileDialog;
use std::sync::Arc;
use tracing::error;

use crate::config::DashboardConfig;
use crate::dataset::Dataset;
use crate::file::export::ExportFileHandler;
use crate::state::{AppState, Screen};

pub struct DashboardApp {
    state: AppState,
}

impl DashboardApp {
    pub fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        Self {
            state: AppState::new(dataset, config),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Export Filtered Launches...").clicked() {
                    self.export_filtered();
                    ui.close_menu();
                }
                if ui.button("Reset Filters").clicked() {
                    self.state.reset_selection();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });

            ui.separator();

            // Tab selection using buttons
            let tabs = [
                (Screen::Dashboard, "Dashboard"),
                (Screen::Launches, "Launches"),
                (Screen::Insights, "Insights"),
            ];

            for (mode, label) in tabs {
                if ui.selectable_label(self.state.current_screen == mode, label).clicked() {
                    self.state.current_screen = mode;
                }
            }
        });
    }

    fn export_filtered(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name(ExportFileHandler::default_file_name(chrono::Local::now()))
            .set_title("Export Filtered Launches");

        if let Some(path) = file_dialog.save_file() {
            if let Err(e) = self.state.export_filtered(&path) {
                error!(path = %path.display(), "export failed: {:#}", e);
                self.state.error_message = Some(format!("Error exporting launches: {:#}", e));
            }
        }
    }

    fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{}: {} launches, {} sites, payload {:.0}-{:.0} kg",
                self.state.config.dataset_path.display(),
                self.state.dataset.len(),
                self.state.dataset.sites().len(),
                self.state.dataset.min_payload(),
                self.state.dataset.max_payload(),
            ));
            if let Some(status) = &self.state.status_message {
                ui.separator();
                ui.label(status);
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match self.state.current_screen {
                Screen::Dashboard => {
                    crate::ui::dashboard::show_dashboard_view(ui, &mut self.state);
                },
                Screen::Launches => {
                    crate::ui::launches::show_launches_view(ui, &mut self.state);
                },
                Screen::Insights => {
                    crate::ui::insights::show_insights_view(ui, &mut self.state);
                },
            }
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
