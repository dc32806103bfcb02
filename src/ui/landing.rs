// src/ui/landing.rs
use eframe::egui;

/// Upload prompt, or the in-flight spinner while an analysis is running.
/// Returns whether the user asked to pick a file.
pub fn show_landing_view(ui: &mut egui::Ui, analyzing: bool) -> bool {
    let mut pick_clicked = false;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.heading(egui::RichText::new("AI Resume Analyzer").size(32.0));
        ui.add_space(4.0);
        ui.label("Get instant feedback, ATS scoring, and actionable insights");
        ui.add_space(32.0);

        if analyzing {
            ui.add(egui::Spinner::new().size(48.0));
            ui.add_space(16.0);
            ui.heading("Analyzing Your Resume");
            ui.add_space(4.0);
            ui.label(
                "Our AI is examining your resume for ATS compatibility, keyword \
                 optimization, and professional feedback...",
            );
        } else {
            ui.heading("Upload Your Resume");
            ui.add_space(4.0);
            ui.label("Upload your PDF or Word document to get comprehensive AI-powered analysis");
            ui.add_space(16.0);

            if ui
                .button(egui::RichText::new("📄 Choose File").size(18.0))
                .clicked()
            {
                pick_clicked = true;
            }

            ui.add_space(32.0);
            show_feature_blurbs(ui);
        }
    });

    pick_clicked
}

fn show_feature_blurbs(ui: &mut egui::Ui) {
    let blurbs = [
        (
            "🎯 ATS Scoring",
            "Get compatibility scores for applicant tracking systems",
        ),
        (
            "📊 Visual Analytics",
            "Interactive charts showing your resume strengths",
        ),
        (
            "🧠 AI Feedback",
            "Detailed suggestions for improvement",
        ),
    ];

    ui.columns(blurbs.len(), |columns| {
        for (column, (title, description)) in columns.iter_mut().zip(blurbs) {
            column.group(|ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.strong(title);
                    ui.add_space(4.0);
                    ui.label(description);
                });
            });
        }
    });
}
