use super::*;

fn pdf() -> SelectedFile {
    SelectedFile { name: "report.pdf".to_owned(), mime_type: "application/pdf".to_owned() }
}

#[test]
fn input_state_default_is_empty() {
    let state = InputState::default();
    assert!(state.text.is_empty());
    assert!(state.file.is_none());
    assert_eq!(state.char_count(), 0);
}

#[test]
fn typing_clears_selected_file() {
    let mut state = InputState::default();
    state.select_file(Some(pdf()));
    assert!(state.set_text("h".to_owned()));
    assert!(state.file.is_none());
    assert_eq!(state.text, "h");
}

#[test]
fn typing_without_file_reports_nothing_cleared() {
    let mut state = InputState::default();
    assert!(!state.set_text("hello".to_owned()));
}

#[test]
fn selecting_file_clears_text_and_counter() {
    let mut state = InputState::default();
    state.set_text("some draft".to_owned());
    state.select_file(Some(pdf()));
    assert!(state.text.is_empty());
    assert_eq!(state.char_count(), 0);
    assert_eq!(state.file, Some(pdf()));
}

#[test]
fn clearing_file_selection_keeps_text() {
    let mut state = InputState { text: "keep".to_owned(), file: None };
    state.select_file(None);
    assert_eq!(state.text, "keep");
}

#[test]
fn char_count_counts_untrimmed_characters() {
    let mut state = InputState::default();
    state.set_text("  héllo ".to_owned());
    assert_eq!(state.char_count(), 8);
}

#[test]
fn to_request_delegates_to_validation() {
    let state = InputState::default();
    assert_eq!(state.to_request(), Err(ValidationError::Empty));

    let state = InputState { text: " hi ".to_owned(), file: None };
    assert_eq!(state.to_request(), Ok(AnalysisRequest::Text("hi".to_owned())));

    let state = InputState { text: String::new(), file: Some(pdf()) };
    assert_eq!(state.to_request(), Ok(AnalysisRequest::File(pdf())));
}
