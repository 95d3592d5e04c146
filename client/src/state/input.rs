//! Form input state: typed message and selected file.
//!
//! DESIGN
//! ======
//! Text and file are mutually exclusive sources. Typing drops the selected
//! file and picking a file clears the text, so a submission always has a
//! single obvious source.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::util::validation::{AnalysisRequest, SelectedFile, ValidationError, validate_submission};

/// Current contents of the analysis form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub text: String,
    pub file: Option<SelectedFile>,
}

impl InputState {
    /// Replace the message text.
    ///
    /// Returns `true` when a selected file was dropped, so the caller can
    /// reset the file picker element as well.
    pub fn set_text(&mut self, text: String) -> bool {
        self.text = text;
        self.file.take().is_some()
    }

    /// Record the picker selection. A selected file clears the message text.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        if file.is_some() {
            self.text.clear();
        }
        self.file = file;
    }

    /// Characters typed so far (untrimmed).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Validate the current input.
    ///
    /// # Errors
    ///
    /// See [`validate_submission`].
    pub fn to_request(&self) -> Result<AnalysisRequest, ValidationError> {
        validate_submission(&self.text, self.file.as_ref())
    }
}
