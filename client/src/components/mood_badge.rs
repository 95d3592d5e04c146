//! Mood badge: emoji plus label, styled by the server-provided class.

use leptos::prelude::*;

use crate::net::types::AnalysisResult;
use crate::util::presentation::mood_badge_class;

#[component]
pub fn MoodBadge(result: Signal<AnalysisResult>) -> impl IntoView {
    let mood = move || result.get().mood.unwrap_or_default();

    view! {
        <Show when=move || result.get().mood.is_some()>
            <div class=move || mood_badge_class(&mood().class_name) id="moodBadge">
                <span class="mood-badge__emoji" id="moodEmoji">{move || mood().emoji}</span>
                <span class="mood-badge__label" id="moodLabel">{move || mood().label}</span>
            </div>
        </Show>
    }
}
