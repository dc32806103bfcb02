// src/ui/overview.rs
use eframe::egui;

use crate::analysis::AnalysisRecord;

pub fn show_overview_view(ui: &mut egui::Ui, record: &AnalysisRecord) {
    ui.heading("Key Strengths");
    ui.add_space(4.0);
    for strength in &record.strengths {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::GREEN, "✔");
            ui.label(strength);
        });
        ui.add_space(2.0);
    }

    ui.add_space(16.0);

    ui.heading("Areas for Improvement");
    ui.add_space(4.0);
    for improvement in &record.improvements {
        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::LIGHT_BLUE, "⚡");
            ui.label(improvement);
        });
        ui.add_space(2.0);
    }
}
