//! Submission validation for the analysis form.
//!
//! Runs entirely before any network activity: a rejected submission never
//! reaches `net::api`.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Maximum accepted text length, in characters.
pub const MAX_TEXT_CHARS: usize = 5000;

/// MIME types accepted for file uploads.
pub const ALLOWED_FILE_TYPES: [&str; 4] = ["text/plain", "application/pdf", "image/png", "image/jpeg"];

/// `accept` attribute for the file picker, matching [`ALLOWED_FILE_TYPES`].
pub const FILE_ACCEPT: &str = ".txt,.pdf,.png,.jpg,.jpeg,text/plain,application/pdf,image/png,image/jpeg";

/// Metadata of the file currently selected in the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    /// Declared MIME type as reported by the browser (may be empty).
    pub mime_type: String,
}

/// A submission that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Trimmed text.
    Text(String),
    File(SelectedFile),
}

/// Reasons a submission is rejected before sending.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter text or upload a file to analyze.")]
    Empty,
    #[error("Message exceeds 5000 character limit.")]
    TextTooLong { chars: usize },
    #[error("Unsupported file type. Please upload PDF, TXT, or Image.")]
    UnsupportedFileType { mime_type: String },
}

/// Validate the current form input.
///
/// A selected file takes precedence over typed text.
///
/// # Errors
///
/// Returns [`ValidationError`] when both inputs are empty, the file type is
/// not allow-listed, or the trimmed text exceeds [`MAX_TEXT_CHARS`].
pub fn validate_submission(text: &str, file: Option<&SelectedFile>) -> Result<AnalysisRequest, ValidationError> {
    let text = text.trim();

    if let Some(file) = file {
        if !is_allowed_file_type(&file.mime_type) {
            return Err(ValidationError::UnsupportedFileType { mime_type: file.mime_type.clone() });
        }
        return Ok(AnalysisRequest::File(file.clone()));
    }

    if text.is_empty() {
        return Err(ValidationError::Empty);
    }

    let chars = text.chars().count();
    if chars > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong { chars });
    }

    Ok(AnalysisRequest::Text(text.to_owned()))
}

pub fn is_allowed_file_type(mime_type: &str) -> bool {
    ALLOWED_FILE_TYPES.contains(&mime_type)
}
