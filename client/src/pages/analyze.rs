//! Analyze page: the single screen of the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the submission cycle. Validation happens synchronously on click; a
//! valid submission enters `Loading`, issues one analysis call through
//! `net::api`, and always lands back in `Idle` via `AnalysisState::finish`.

#[cfg(test)]
#[path = "analyze_test.rs"]
mod analyze_test;

use leptos::prelude::*;

use crate::components::feedback::{ErrorBanner, LoadingIndicator};
use crate::components::input_panel::InputPanel;
use crate::components::results_panel::ResultsPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::analysis::AnalysisState;
use crate::state::input::InputState;
use crate::util::validation::AnalysisRequest;

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let input = expect_context::<RwSignal<InputState>>();
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_analyze = Callback::new(move |()| {
        let current = input.get_untracked();
        let Some(request) = analysis.try_update(|s| start_submission(&current, s)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::{AnalysisOutcome, FailureKind, Upload};

            let upload = match request {
                AnalysisRequest::Text(text) => Some(Upload::Text(text)),
                AnalysisRequest::File(_) => crate::components::input_panel::picked_file(file_ref).map(Upload::File),
            };
            let Some(upload) = upload else {
                analysis.update(|s| {
                    s.finish(AnalysisOutcome::failure(FailureKind::Transport, "selected file is no longer available"));
                });
                return;
            };

            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit(upload).await;
                if let Some(message) = outcome.error_message() {
                    leptos::logging::error!("analysis failed: {message}");
                }
                analysis.update(|s| s.finish(outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    });

    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-header__brand">
                    <h1 class="app-header__title">"TruthLens"</h1>
                    <p class="app-header__tagline">"See how a message is trying to make you feel."</p>
                </div>
                <ThemeToggle/>
            </header>
            <main class="app-main">
                <InputPanel file_ref=file_ref on_analyze=on_analyze/>
                <LoadingIndicator/>
                <ErrorBanner/>
                <ResultsPanel/>
            </main>
        </div>
    }
}

/// Validate the input and, if valid, move the flow into `Loading`.
///
/// Returns the request to send, or `None` when nothing should be sent: a call
/// is already in flight, or validation failed (the error is shown instead).
fn start_submission(input: &InputState, analysis: &mut AnalysisState) -> Option<AnalysisRequest> {
    if analysis.is_loading() {
        return None;
    }
    match input.to_request() {
        Ok(request) => analysis.begin().then_some(request),
        Err(error) => {
            analysis.reject(&error);
            None
        }
    }
}
