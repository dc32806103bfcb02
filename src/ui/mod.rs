// src/ui/mod.rs
use eframe::egui;

use crate::analysis::{ScoreTier, SectionStatus};

pub mod feedback;
pub mod keywords;
pub mod landing;
pub mod overview;
pub mod results;
pub mod sections;

pub fn tier_color(tier: ScoreTier) -> egui::Color32 {
    match tier {
        ScoreTier::Good => egui::Color32::GREEN,
        ScoreTier::Warning => egui::Color32::YELLOW,
        ScoreTier::Poor => egui::Color32::RED,
    }
}

pub fn score_color(score: u8) -> egui::Color32 {
    tier_color(ScoreTier::from_score(score))
}

pub fn status_icon(status: SectionStatus) -> egui::RichText {
    match status {
        SectionStatus::Excellent => egui::RichText::new("✔").color(egui::Color32::GREEN),
        SectionStatus::Good => egui::RichText::new("⚠").color(egui::Color32::YELLOW),
        SectionStatus::Poor => egui::RichText::new("✖").color(egui::Color32::RED),
    }
}

pub fn score_badge(ui: &mut egui::Ui, score: u8) {
    ui.label(
        egui::RichText::new(format!("{}%", score))
            .strong()
            .color(score_color(score)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_colors_follow_the_status_thresholds() {
        assert_eq!(score_color(85), egui::Color32::GREEN);
        assert_eq!(score_color(84), egui::Color32::YELLOW);
        assert_eq!(score_color(70), egui::Color32::YELLOW);
        assert_eq!(score_color(69), egui::Color32::RED);
    }

    #[test]
    fn every_status_maps_to_a_distinct_icon() {
        let excellent = status_icon(SectionStatus::Excellent);
        let good = status_icon(SectionStatus::Good);
        let poor = status_icon(SectionStatus::Poor);
        assert_ne!(excellent.text(), good.text());
        assert_ne!(good.text(), poor.text());
    }
}
