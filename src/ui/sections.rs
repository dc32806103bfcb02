// src/ui/sections.rs
use eframe::egui;

use crate::analysis::AnalysisRecord;
use crate::ui::{score_color, status_icon};

pub fn show_sections_view(ui: &mut egui::Ui, record: &AnalysisRecord) {
    ui.heading("Section-by-Section Analysis");
    ui.add_space(8.0);

    for (section, assessment) in &record.sections {
        ui.group(|ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.strong(section.label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(status_icon(assessment.status));
                });
            });

            ui.add(
                egui::ProgressBar::new(assessment.score as f32 / 100.0)
                    .text(format!("{}%", assessment.score)),
            );

            ui.horizontal(|ui| {
                ui.label("Status:");
                ui.colored_label(score_color(assessment.score), assessment.status.label());
            });
        });
        ui.add_space(4.0);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);
    ui.heading("Scores at a Glance");
    ui.add_space(4.0);

    show_score_chart(ui, record);
}

fn show_score_chart(ui: &mut egui::Ui, record: &AnalysisRecord) {
    let plot = egui_plot::Plot::new("section_scores")
        .height(200.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .include_y(0.0)
        .include_y(100.0);

    plot.show(ui, |plot_ui| {
        let bars: Vec<egui_plot::Bar> = record
            .sections
            .iter()
            .enumerate()
            .map(|(i, (section, assessment))| {
                egui_plot::Bar::new(i as f64, assessment.score as f64)
                    .width(0.6)
                    .name(section.label())
            })
            .collect();

        plot_ui.bar_chart(egui_plot::BarChart::new(bars));
    });
}
