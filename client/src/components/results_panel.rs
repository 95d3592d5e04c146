//! Results section: risk meter, mood, confidence, findings, and reasons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reflects the latest successful `AnalysisResult` verbatim, except that the
//! emotion/logic/pattern findings are truncated for the cards. Hidden while no
//! result is held (including while a new call is loading).

use leptos::prelude::*;

use crate::components::agent_timeline::AgentTimeline;
use crate::components::mood_badge::MoodBadge;
use crate::components::reasons_panel::ReasonsPanel;
use crate::components::risk_meter::RiskMeter;
use crate::state::analysis::AnalysisState;
use crate::util::presentation::truncate_finding;

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let result = Signal::derive(move || analysis.get().result.unwrap_or_default());

    let confidence = move || result.get().confidence;
    let explanation = Signal::derive(move || result.get().explanation);
    let emotion = Signal::derive(move || truncate_finding(&result.get().emotion));
    let logic = Signal::derive(move || truncate_finding(&result.get().logic));
    let pattern = Signal::derive(move || truncate_finding(&result.get().pattern));

    view! {
        <Show when=move || analysis.get().result.is_some()>
            <section class="results" id="resultsSection">
                <div class="results__summary">
                    <RiskMeter result=result/>
                    <MoodBadge result=result/>
                    <Show when=move || confidence().is_some()>
                        <div class="confidence">
                            <span class="confidence__label">"Confidence: "</span>
                            <span
                                class="confidence__value"
                                id="confidenceValue"
                                data-confidence=move || confidence().unwrap_or_default()
                            >
                                {move || confidence().unwrap_or_default()}
                            </span>
                        </div>
                    </Show>
                </div>
                <ReasonsPanel result=result/>
                <AgentTimeline/>
                <FindingCard title="Summary" dom_id="explanationText" text=explanation/>
                <div class="results__findings">
                    <FindingCard title="Emotion" dom_id="emotionText" text=emotion/>
                    <FindingCard title="Logic" dom_id="logicText" text=logic/>
                    <FindingCard title="Pattern" dom_id="patternText" text=pattern/>
                </div>
            </section>
        </Show>
    }
}

/// One titled block of result text.
#[component]
fn FindingCard(title: &'static str, dom_id: &'static str, text: Signal<String>) -> impl IntoView {
    view! {
        <article class="finding-card">
            <h3 class="finding-card__title">{title}</h3>
            <p class="finding-card__text" id=dom_id>{move || text.get()}</p>
        </article>
    }
}
