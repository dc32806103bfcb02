// src/ui/feedback.rs
use eframe::egui;

use crate::analysis::AnalysisRecord;
use crate::ui::score_badge;

pub fn show_feedback_view(ui: &mut egui::Ui, record: &AnalysisRecord) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("AI Summary Feedback");
        ui.add_space(4.0);
        ui.label(&record.feedback.summary);
    });

    ui.add_space(16.0);

    ui.heading("Detailed Section Feedback");
    ui.add_space(4.0);

    for item in &record.feedback.detailed {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.strong(&item.section);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    score_badge(ui, item.score);
                });
            });
            ui.add_space(4.0);
            ui.label(&item.feedback);
        });
        ui.add_space(4.0);
    }
}
