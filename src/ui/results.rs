// src/ui/results.rs
use eframe::egui;

use crate::state::{AppState, Phase, ResultTab};
use crate::ui::{feedback, keywords, overview, score_color, sections};

pub fn show_results_view(ui: &mut egui::Ui, state: &mut AppState) {
    // Clone the loaded data for immutable use while the state mutates
    let (file_name, record, active_tab) = match &state.phase {
        Phase::Loaded {
            file,
            record,
            active_tab,
        } => (file.name.clone(), record.clone(), *active_tab),
        _ => return,
    };

    let mut reset_clicked = false;

    // Header
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading("Resume Analysis Results");
            ui.label(&file_name);
            if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(&record.generated_at) {
                ui.label(format!("Analyzed: {}", timestamp.format("%Y-%m-%d %H:%M:%S")));
            }
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Analyze New Resume").clicked() {
                reset_clicked = true;
            }
        });
    });

    if reset_clicked {
        state.reset();
        return;
    }

    ui.add_space(8.0);

    // ATS score banner
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(record.ats_score.to_string())
                    .size(36.0)
                    .strong()
                    .color(score_color(record.ats_score)),
            );
            ui.add_space(8.0);
            ui.vertical(|ui| {
                ui.heading("ATS Compatibility Score");
                ui.label("Your resume is well-optimized for applicant tracking systems");
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.strong(format!("★ {:.1}/5.0", record.overall_rating));
            });
        });
    });

    ui.add_space(8.0);

    // Tab selection using buttons
    ui.horizontal(|ui| {
        for tab in ResultTab::ALL {
            if ui.selectable_label(active_tab == tab, tab.label()).clicked() {
                state.select_tab(tab);
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .id_source("results_scroll")
        .show(ui, |ui| match active_tab {
            ResultTab::Overview => overview::show_overview_view(ui, &record),
            ResultTab::Sections => sections::show_sections_view(ui, &record),
            ResultTab::Keywords => keywords::show_keywords_view(ui, &record),
            ResultTab::Feedback => feedback::show_feedback_view(ui, &record),
        });
}
