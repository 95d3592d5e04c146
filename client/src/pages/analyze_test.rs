use super::*;
use crate::net::api::AnalysisOutcome;
use crate::net::types::AnalysisResult;
use crate::state::analysis::Phase;
use crate::util::validation::{MAX_TEXT_CHARS, SelectedFile};

fn text_input(text: &str) -> InputState {
    InputState { text: text.to_owned(), file: None }
}

fn file_input(mime_type: &str) -> InputState {
    InputState {
        text: String::new(),
        file: Some(SelectedFile { name: "upload".to_owned(), mime_type: mime_type.to_owned() }),
    }
}

#[test]
fn whitespace_input_is_rejected_without_loading() {
    let mut analysis = AnalysisState::default();
    assert_eq!(start_submission(&text_input("   \n"), &mut analysis), None);
    assert_eq!(analysis.phase, Phase::Idle);
    assert!(analysis.trigger_enabled());
    assert_eq!(analysis.error.as_deref(), Some("Please enter text or upload a file to analyze."));
}

#[test]
fn oversized_text_is_rejected_with_length_message() {
    let mut analysis = AnalysisState::default();
    let input = text_input(&"z".repeat(MAX_TEXT_CHARS + 1));
    assert_eq!(start_submission(&input, &mut analysis), None);
    assert_eq!(analysis.phase, Phase::Idle);
    assert_eq!(analysis.error.as_deref(), Some("Message exceeds 5000 character limit."));
}

#[test]
fn disallowed_file_type_is_rejected() {
    let mut analysis = AnalysisState::default();
    assert_eq!(start_submission(&file_input("image/gif"), &mut analysis), None);
    assert_eq!(analysis.phase, Phase::Idle);
    assert_eq!(
        analysis.error.as_deref(),
        Some("Unsupported file type. Please upload PDF, TXT, or Image.")
    );
}

#[test]
fn valid_text_enters_loading_and_clears_error() {
    let mut analysis = AnalysisState { error: Some("old".to_owned()), ..AnalysisState::default() };
    let request = start_submission(&text_input("  Act now!  "), &mut analysis);
    assert_eq!(request, Some(AnalysisRequest::Text("Act now!".to_owned())));
    assert!(analysis.is_loading());
    assert!(!analysis.trigger_enabled());
    assert!(analysis.error.is_none());
}

#[test]
fn valid_file_enters_loading() {
    let mut analysis = AnalysisState::default();
    let request = start_submission(&file_input("image/png"), &mut analysis);
    assert!(matches!(request, Some(AnalysisRequest::File(_))));
    assert!(analysis.is_loading());
}

#[test]
fn second_submission_while_loading_is_ignored() {
    let mut analysis = AnalysisState::default();
    assert!(start_submission(&text_input("one"), &mut analysis).is_some());
    assert_eq!(start_submission(&text_input("two"), &mut analysis), None);
    assert!(analysis.is_loading());
    assert!(analysis.error.is_none());
}

#[test]
fn full_cycle_after_timeout_reenables_trigger() {
    let mut analysis = AnalysisState::default();
    assert!(start_submission(&text_input("hello"), &mut analysis).is_some());
    analysis.finish(AnalysisOutcome::Cancelled);
    assert!(analysis.trigger_enabled());
    assert!(!analysis.is_loading());
    assert_eq!(analysis.error.as_deref(), Some("Request took too long. Please try again."));

    // The next submission starts cleanly.
    assert!(start_submission(&text_input("again"), &mut analysis).is_some());
    analysis.finish(AnalysisOutcome::Success(AnalysisResult::default()));
    assert!(analysis.error.is_none());
    assert!(analysis.result.is_some());
}
