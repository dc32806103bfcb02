// src/app.rs
use std::path::PathBuf;

use eframe::egui;
use rfd::FileDialog;
use tracing::warn;

use crate::analysis::{AnalysisRequest, Analyzer, MockAnalyzer};
use crate::config::Config;
use crate::state::{AppState, Phase};

pub struct ResumeLensApp {
    state: AppState,
    analyzer: Box<dyn Analyzer>,
}

impl ResumeLensApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        Self {
            state: AppState::new(),
            analyzer: Box::new(MockAnalyzer::new(config.analysis_delay, cc.egui_ctx.clone())),
        }
    }

    fn pick_resume(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("Resume files", &["pdf", "doc", "docx"])
            .set_title("Choose Resume");

        if let Some(path) = file_dialog.pick_file() {
            self.upload(path);
        }
    }

    fn upload(&mut self, path: PathBuf) {
        match crate::upload::accept(&path) {
            Ok((file, content)) => {
                let request_id = self.state.begin_analysis(file.clone());
                self.analyzer.submit(AnalysisRequest {
                    request_id,
                    file_name: file.name,
                    content,
                });
            }
            Err(e) => {
                // Rejection never changes the phase; it only surfaces here
                warn!("rejected upload: {}", e);
                self.state.error_message = Some(e.to_string());
            }
        }
    }

    fn drain_analysis_results(&mut self) {
        while let Some(outcome) = self.analyzer.poll() {
            self.state
                .complete_analysis(outcome.request_id, outcome.record);
        }
    }
}

impl eframe::App for ResumeLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_analysis_results();

        // Read the phase up front so the views can borrow state mutably
        let analyzing = matches!(self.state.phase, Phase::Analyzing { .. });
        let loaded = matches!(self.state.phase, Phase::Loaded { .. });

        let mut pick_clicked = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            if loaded {
                crate::ui::results::show_results_view(ui, &mut self.state);
            } else {
                pick_clicked = crate::ui::landing::show_landing_view(ui, analyzing);
            }
        });

        if pick_clicked {
            self.pick_resume();
        }

        // Show error modal if needed
        let error_msg = self.state.error_message.clone(); // Clone first
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
