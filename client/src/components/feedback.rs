//! Loading indicator and error banner for the analysis flow.

use leptos::prelude::*;

use crate::state::analysis::AnalysisState;

/// Spinner shown while an analysis call is in flight.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    view! {
        <Show when=move || analysis.get().is_loading()>
            <div class="loading-state" id="loadingState">
                <div class="loading-state__spinner"></div>
                <p class="loading-state__text">"Analyzing your message..."</p>
            </div>
        </Show>
    }
}

/// Inline error display for validation, timeout, and server failures.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let message = move || analysis.get().error.unwrap_or_default();

    view! {
        <Show when=move || analysis.get().error.is_some()>
            <div class="error-state" id="errorState" role="alert">
                <p class="error-state__message" id="errorMessage">{message}</p>
            </div>
        </Show>
    }
}
