use super::*;

#[test]
fn default_endpoint_posts_to_analyze() {
    assert!(DEFAULT_ANALYZE_URL.starts_with("https://"));
    assert!(DEFAULT_ANALYZE_URL.ends_with("/analyze"));
    assert!(ANALYZE_URL.ends_with("/analyze") || option_env!("TRUTHLENS_ANALYZE_URL").is_some());
}

// =============================================================
// classify_response
// =============================================================

#[test]
fn classify_success_parses_result() {
    let outcome = classify_response(true, r#"{"score": 10, "explanation": "fine"}"#);
    match outcome {
        AnalysisOutcome::Success(result) => {
            assert!((result.score - 10.0).abs() < f64::EPSILON);
            assert_eq!(result.explanation, "fine");
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn classify_failure_uses_server_error_field() {
    let outcome = classify_response(false, r#"{"error": "Text exceeds 5000 character limit"}"#);
    assert_eq!(
        outcome,
        AnalysisOutcome::failure(FailureKind::Server, "Text exceeds 5000 character limit")
    );
    assert_eq!(
        outcome.error_message().as_deref(),
        Some("Error analyzing input: Text exceeds 5000 character limit")
    );
}

#[test]
fn classify_failure_falls_back_to_generic_message() {
    for body in ["{}", r#"{"error": ""}"#, r#"{"error": null}"#, "<html>502</html>", ""] {
        let outcome = classify_response(false, body);
        assert_eq!(outcome, AnalysisOutcome::failure(FailureKind::Server, GENERIC_FAILURE), "body: {body}");
    }
    assert_eq!(
        classify_response(false, "{}").error_message().as_deref(),
        Some("Error analyzing input: Analysis failed")
    );
}

#[test]
fn classify_success_with_invalid_body_is_parse_failure() {
    let outcome = classify_response(true, "not json");
    match &outcome {
        AnalysisOutcome::Failure { kind, message } => {
            assert_eq!(*kind, FailureKind::Parse);
            assert!(!message.is_empty());
        }
        other => panic!("expected parse failure, got {other:?}"),
    }
    assert!(outcome.error_message().unwrap().starts_with("Error analyzing input: "));
}

// =============================================================
// error_message
// =============================================================

#[test]
fn cancelled_outcome_uses_timeout_message() {
    assert_eq!(
        AnalysisOutcome::Cancelled.error_message().as_deref(),
        Some("Request took too long. Please try again.")
    );
}

#[test]
fn success_outcome_has_no_error_message() {
    let outcome = AnalysisOutcome::Success(crate::net::types::AnalysisResult::default());
    assert!(outcome.error_message().is_none());
}

#[test]
fn transport_failure_surfaces_message_text() {
    let outcome = AnalysisOutcome::failure(FailureKind::Transport, "Failed to fetch");
    assert_eq!(outcome.error_message().as_deref(), Some("Error analyzing input: Failed to fetch"));
}
