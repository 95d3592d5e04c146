//! "Why this score?" toggle with the list of reasons behind the score.
//!
//! The list starts collapsed for every new result and only opens on an
//! explicit click.

use leptos::prelude::*;

use crate::net::types::AnalysisResult;
use crate::state::analysis::AnalysisState;

#[component]
pub fn ReasonsPanel(result: Signal<AnalysisResult>) -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    let reasons = move || result.get().listed_reasons().map(<[String]>::to_vec).unwrap_or_default();
    let open = move || analysis.get().reasons_open;
    let on_toggle = move |_| analysis.update(AnalysisState::toggle_reasons);

    view! {
        <Show when=move || !reasons().is_empty()>
            <div class="reasons">
                <button class="reasons__toggle" id="whyScoreBtn" on:click=on_toggle>
                    {move || if open() { "Hide reasons" } else { "Why this score?" }}
                </button>
                <div class=move || if open() { "reasons__panel" } else { "reasons__panel hidden" } id="reasonsPanel">
                    <ul class="reasons__list" id="reasonsList">
                        {move || reasons().into_iter().map(|reason| view! { <li>{reason}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </Show>
    }
}
