//! Outbound call to the remote analysis API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against
//! [`ANALYSIS_DEADLINE`] and aborted through an `AbortController` when the
//! deadline wins.
//! Server-side (SSR): nothing is sent; only the outcome types and the
//! message helpers are compiled.
//!
//! ERROR HANDLING
//! ==============
//! Every path resolves to an [`AnalysisOutcome`]. Callers never see a panic or
//! a raw JS exception, and timeout is a distinct variant rather than an error
//! string to inspect.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::deadline::{ANALYSIS_DEADLINE, race_deadline};
use super::types::AnalysisResult;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;

/// Endpoint used when no build-time override is given.
pub const DEFAULT_ANALYZE_URL: &str = "https://truthlens-backend-dgxw.onrender.com/analyze";

/// Analysis endpoint; override at build time with `TRUTHLENS_ANALYZE_URL`.
pub const ANALYZE_URL: &str = match option_env!("TRUTHLENS_ANALYZE_URL") {
    Some(url) => url,
    None => DEFAULT_ANALYZE_URL,
};

/// Message shown when the deadline cancels the call.
pub const TIMEOUT_MESSAGE: &str = "Request took too long. Please try again.";

/// Fallback used when a failure response carries no `error` field.
pub const GENERIC_FAILURE: &str = "Analysis failed";

/// Why a completed call did not produce a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The service answered with a non-success status.
    Server,
    /// The request could not be built, sent, or read.
    Transport,
    /// A success response body was not a valid analysis result.
    Parse,
}

/// Result of one analysis call.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    Failure { kind: FailureKind, message: String },
    /// The deadline fired and the in-flight call was aborted.
    Cancelled,
}

impl AnalysisOutcome {
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure { kind, message: message.into() }
    }

    /// User-facing error text, or `None` for a success.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::Failure { message, .. } => Some(failure_display(message)),
            Self::Cancelled => Some(TIMEOUT_MESSAGE.to_owned()),
        }
    }
}

fn failure_display(message: &str) -> String {
    format!("Error analyzing input: {message}")
}

/// Extract the server-supplied message from a failure body.
#[cfg(any(test, feature = "hydrate"))]
fn server_failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_owned())
}

/// Map a settled HTTP exchange to an outcome.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_response(ok: bool, body: &str) -> AnalysisOutcome {
    if !ok {
        return AnalysisOutcome::failure(FailureKind::Server, server_failure_message(body));
    }
    match serde_json::from_str::<AnalysisResult>(body) {
        Ok(result) => AnalysisOutcome::Success(result),
        Err(e) => AnalysisOutcome::failure(FailureKind::Parse, e.to_string()),
    }
}

/// Validated payload ready to send.
#[cfg(feature = "hydrate")]
pub enum Upload {
    Text(String),
    File(web_sys::File),
}

/// Submit one analysis request with the client deadline applied.
#[cfg(feature = "hydrate")]
pub async fn submit(upload: Upload) -> AnalysisOutcome {
    let controller = match web_sys::AbortController::new() {
        Ok(controller) => controller,
        Err(e) => return AnalysisOutcome::failure(FailureKind::Transport, format!("{e:?}")),
    };
    let request = match build_request(upload, &controller.signal()) {
        Ok(request) => request,
        Err(message) => return AnalysisOutcome::failure(FailureKind::Transport, message),
    };

    let exchange = async move {
        let resp = request.send().await.map_err(|e| e.to_string())?;
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| e.to_string())?;
        Ok::<_, String>(classify_response(ok, &body))
    };

    match race_deadline(exchange, gloo_timers::future::sleep(ANALYSIS_DEADLINE)).await {
        Some(Ok(outcome)) => outcome,
        Some(Err(message)) => AnalysisOutcome::failure(FailureKind::Transport, message),
        None => {
            controller.abort();
            AnalysisOutcome::Cancelled
        }
    }
}

#[cfg(feature = "hydrate")]
fn build_request(upload: Upload, signal: &web_sys::AbortSignal) -> Result<gloo_net::http::Request, String> {
    let builder = gloo_net::http::Request::post(ANALYZE_URL).abort_signal(Some(signal));
    match upload {
        Upload::Text(text) => builder
            .json(&super::types::TextRequest { text })
            .map_err(|e| e.to_string()),
        Upload::File(file) => {
            let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
            form.append_with_blob_and_filename("file", &file, &file.name())
                .map_err(|e| format!("{e:?}"))?;
            builder.body(form).map_err(|e| e.to_string())
        }
    }
}
