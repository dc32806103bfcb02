// src/analysis/record.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SectionStatus {
    Excellent,
    Good,
    Poor,
}

impl SectionStatus {
    /// Status is always derived from the score; the two never disagree.
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            SectionStatus::Excellent
        } else if score >= 70 {
            SectionStatus::Good
        } else {
            SectionStatus::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionStatus::Excellent => "excellent",
            SectionStatus::Good => "good",
            SectionStatus::Poor => "poor",
        }
    }
}

/// Display tier for coloring scores, same thresholds as `SectionStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Good,
    Warning,
    Poor,
}

impl ScoreTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            ScoreTier::Good
        } else if score >= 70 {
            ScoreTier::Warning
        } else {
            ScoreTier::Poor
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Section {
    Contact,
    Summary,
    Experience,
    Skills,
    Education,
    Formatting,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Contact,
        Section::Summary,
        Section::Experience,
        Section::Skills,
        Section::Education,
        Section::Formatting,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Contact => "Contact",
            Section::Summary => "Summary",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Formatting => "Formatting",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionAssessment {
    pub score: u8,
    pub status: SectionStatus,
}

impl SectionAssessment {
    pub fn from_score(score: u8) -> Self {
        Self {
            score,
            status: SectionStatus::from_score(score),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillBreakdown {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordMatches {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionFeedback {
    pub section: String,
    pub feedback: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feedback {
    pub summary: String,
    pub detailed: Vec<SectionFeedback>,
}

/// One complete analysis run. Immutable once produced; replaced wholesale
/// on each new analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRecord {
    pub ats_score: u8,
    pub overall_rating: f32,
    /// Ordered section assessments, contact through formatting.
    pub sections: Vec<(Section, SectionAssessment)>,
    pub skills: SkillBreakdown,
    pub keywords: KeywordMatches,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub feedback: Feedback,
    pub generated_at: String,
}

impl AnalysisRecord {
    pub fn section(&self, section: Section) -> Option<&SectionAssessment> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, assessment)| assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_thresholds() {
        assert_eq!(SectionStatus::from_score(100), SectionStatus::Excellent);
        assert_eq!(SectionStatus::from_score(85), SectionStatus::Excellent);
        assert_eq!(SectionStatus::from_score(84), SectionStatus::Good);
        assert_eq!(SectionStatus::from_score(70), SectionStatus::Good);
        assert_eq!(SectionStatus::from_score(69), SectionStatus::Poor);
        assert_eq!(SectionStatus::from_score(0), SectionStatus::Poor);
    }

    #[test]
    fn tier_agrees_with_status_at_every_score() {
        for score in 0..=100u8 {
            let expected = match SectionStatus::from_score(score) {
                SectionStatus::Excellent => ScoreTier::Good,
                SectionStatus::Good => ScoreTier::Warning,
                SectionStatus::Poor => ScoreTier::Poor,
            };
            assert_eq!(ScoreTier::from_score(score), expected, "score {}", score);
        }
    }

    #[test]
    fn assessment_derives_status_from_score() {
        let assessment = SectionAssessment::from_score(95);
        assert_eq!(assessment.status, SectionStatus::Excellent);

        let assessment = SectionAssessment::from_score(72);
        assert_eq!(assessment.status, SectionStatus::Good);
    }
}
