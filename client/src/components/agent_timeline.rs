//! Static timeline of the analysis stages shown alongside results.

use leptos::prelude::*;

/// Stages the analysis service runs, in display order.
const STAGES: [(&str, &str); 4] = [
    ("Emotion", "Checks for fear or anger triggers"),
    ("Logic", "Looks for unfair reasoning tricks"),
    ("Pattern", "Compares against common misleading messages"),
    ("Explain", "Combines the findings into a summary"),
];

#[component]
pub fn AgentTimeline() -> impl IntoView {
    view! {
        <ol class="agent-timeline">
            {STAGES
                .iter()
                .enumerate()
                .map(|(i, (name, detail))| {
                    view! {
                        <li class="agent-timeline__step" style:animation-delay=format!("{}ms", i * 150)>
                            <span class="agent-timeline__name">{*name}</span>
                            <span class="agent-timeline__detail">{*detail}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}
