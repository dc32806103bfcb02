// src/analysis/mod.rs
pub mod mock;
pub mod record;

pub use mock::{AnalysisOutcome, AnalysisRequest, Analyzer, MockAnalyzer};
pub use record::{
    AnalysisRecord, Feedback, KeywordMatches, ScoreTier, Section, SectionAssessment,
    SectionFeedback, SectionStatus, SkillBreakdown,
};
