// src/ui/keywords.rs
use eframe::egui;

use crate::analysis::AnalysisRecord;

pub fn show_keywords_view(ui: &mut egui::Ui, record: &AnalysisRecord) {
    ui.heading("Keywords Found");
    ui.add_space(4.0);
    show_chips(ui, &record.keywords.found, egui::Color32::from_rgb(187, 247, 208));

    ui.add_space(16.0);

    ui.heading("Missing Keywords");
    ui.add_space(4.0);
    show_chips(ui, &record.keywords.missing, egui::Color32::from_rgb(254, 215, 170));

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        columns[0].strong("Technical Skills");
        columns[0].add_space(4.0);
        for skill in &record.skills.technical {
            columns[0].label(format!("• {}", skill));
        }

        columns[1].strong("Soft Skills");
        columns[1].add_space(4.0);
        for skill in &record.skills.soft {
            columns[1].label(format!("• {}", skill));
        }
    });
}

fn show_chips(ui: &mut egui::Ui, items: &[String], fill: egui::Color32) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            ui.label(
                egui::RichText::new(format!(" {} ", item))
                    .color(egui::Color32::BLACK)
                    .background_color(fill),
            );
        }
    });
}
