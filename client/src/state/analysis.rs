//! Analysis flow state: loading, last result, last error.
//!
//! DESIGN
//! ======
//! A submission cycle is `Idle -> Loading -> Idle`. Validation failures never
//! leave `Idle`. Every call outcome goes through [`AnalysisState::finish`],
//! which always returns to `Idle`, so the trigger is re-enabled and the
//! loading indicator hidden no matter which branch was taken.

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

use crate::net::api::AnalysisOutcome;
use crate::net::types::AnalysisResult;
use crate::util::validation::ValidationError;

/// Where the current submission cycle is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// One analysis call is in flight.
    Loading,
}

/// State shared by the input panel, feedback banners, and results view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnalysisState {
    pub phase: Phase,
    /// Most recent successful result, cleared when a new call starts.
    pub result: Option<AnalysisResult>,
    /// Error currently displayed, if any.
    pub error: Option<String>,
    /// Whether the "why this score" reasons panel is expanded.
    pub reasons_open: bool,
}

impl AnalysisState {
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// The analyze button is usable only between calls.
    pub fn trigger_enabled(&self) -> bool {
        !self.is_loading()
    }

    /// Show a validation failure. No call is started.
    pub fn reject(&mut self, error: &ValidationError) {
        self.error = Some(error.to_string());
    }

    /// Enter `Loading`, clearing the previous error and result.
    ///
    /// Returns `false` (and changes nothing) if a call is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = Phase::Loading;
        self.error = None;
        self.result = None;
        self.reasons_open = false;
        true
    }

    /// Apply the call outcome and return to `Idle`.
    pub fn finish(&mut self, outcome: AnalysisOutcome) {
        self.phase = Phase::Idle;
        self.error = outcome.error_message();
        if let AnalysisOutcome::Success(result) = outcome {
            self.result = Some(result);
            self.reasons_open = false;
        }
    }

    /// Expand or collapse the reasons panel.
    pub fn toggle_reasons(&mut self) {
        self.reasons_open = !self.reasons_open;
    }
}
