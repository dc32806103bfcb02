// src/state/mod.rs
use tracing::{debug, warn};

use crate::analysis::AnalysisRecord;
use crate::upload::UploadedFile;

// Result view tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTab {
    Overview,
    Sections,
    Keywords,
    Feedback,
}

impl ResultTab {
    pub const ALL: [ResultTab; 4] = [
        ResultTab::Overview,
        ResultTab::Sections,
        ResultTab::Keywords,
        ResultTab::Feedback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Overview => "Overview",
            ResultTab::Sections => "Section Analysis",
            ResultTab::Keywords => "Keywords",
            ResultTab::Feedback => "AI Feedback",
        }
    }
}

/// The whole analysis lifecycle as one value, so states like "loaded with
/// no record" cannot be represented.
#[derive(Debug)]
pub enum Phase {
    Empty,
    Analyzing {
        file: UploadedFile,
        request_id: u64,
    },
    Loaded {
        file: UploadedFile,
        record: AnalysisRecord,
        active_tab: ResultTab,
    },
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub phase: Phase,
    pub error_message: Option<String>,

    next_request_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Empty,
            error_message: None,
            next_request_id: 0,
        }
    }

    /// Move to Analyzing for the given file. Returns the request id the
    /// analyzer must echo back; a newer submission supersedes any older
    /// one still in flight.
    pub fn begin_analysis(&mut self, file: UploadedFile) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.phase = Phase::Analyzing { file, request_id };
        request_id
    }

    /// Apply an analyzer result. Only the result matching the in-flight
    /// request id transitions the phase; anything else is stale and is
    /// dropped. Returns whether the result was applied.
    pub fn complete_analysis(&mut self, request_id: u64, record: AnalysisRecord) -> bool {
        match &self.phase {
            Phase::Analyzing {
                file,
                request_id: current,
            } if *current == request_id => {
                let file = file.clone();
                self.phase = Phase::Loaded {
                    file,
                    record,
                    active_tab: ResultTab::Overview,
                };
                true
            }
            _ => {
                warn!(request_id, "dropping stale analysis result");
                false
            }
        }
    }

    /// Back to the upload prompt, discarding the file and record.
    pub fn reset(&mut self) {
        debug!("clearing analysis state");
        self.phase = Phase::Empty;
    }

    /// Pure tab switch; does nothing outside Loaded.
    pub fn select_tab(&mut self, tab: ResultTab) {
        if let Phase::Loaded { active_tab, .. } = &mut self.phase {
            *active_tab = tab;
        }
    }
}
