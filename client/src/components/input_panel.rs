//! Message box, file picker, and analyze button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes `InputState` as the user types or picks a file and hands the
//! analyze click to the page. The file picker element stays the source of the
//! file bytes; state only tracks its name and declared type.

use leptos::prelude::*;

use crate::state::analysis::AnalysisState;
use crate::state::input::InputState;
use crate::util::presentation::char_count_label;
use crate::util::validation::{FILE_ACCEPT, MAX_TEXT_CHARS};

/// Input area of the analyze page.
#[component]
pub fn InputPanel(file_ref: NodeRef<leptos::html::Input>, on_analyze: Callback<()>) -> impl IntoView {
    let input = expect_context::<RwSignal<InputState>>();
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    let on_text_input = move |ev: leptos::ev::Event| {
        let cleared_file = input
            .try_update(|s| s.set_text(event_target_value(&ev)))
            .unwrap_or(false);
        if cleared_file {
            reset_file_picker(file_ref);
        }
    };

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let selected = picked_file(file_ref).map(|file| crate::util::validation::SelectedFile {
                name: file.name(),
                mime_type: file.type_(),
            });
            input.update(|s| s.select_file(selected));
        }
    };

    let char_count = move || input.get().char_count();
    let count_class = move || {
        if char_count() > MAX_TEXT_CHARS {
            "input-panel__count input-panel__count--over"
        } else {
            "input-panel__count"
        }
    };
    let file_name = move || input.get().file.map(|f| f.name);
    let busy = move || !analysis.get().trigger_enabled();

    view! {
        <section class="input-panel">
            <textarea
                class="input-panel__message"
                id="messageInput"
                placeholder="Paste a message, post, or email you want checked..."
                prop:value=move || input.get().text
                on:input=on_text_input
            ></textarea>
            <div class="input-panel__meta">
                <span class=count_class id="charCount">
                    {move || char_count_label(char_count(), MAX_TEXT_CHARS)}
                </span>
                <label class="input-panel__file">
                    <span class="input-panel__file-label">"Upload file"</span>
                    <input
                        type="file"
                        id="fileInput"
                        accept=FILE_ACCEPT
                        node_ref=file_ref
                        on:change=on_file_change
                    />
                </label>
                <Show when=move || file_name().is_some()>
                    <span class="input-panel__file-name">{move || file_name().unwrap_or_default()}</span>
                </Show>
            </div>
            <button
                class="analyze-button"
                id="analyzeBtn"
                disabled=busy
                on:click=move |_| on_analyze.run(())
            >
                {move || if busy() { "Analyzing..." } else { "Analyze" }}
            </button>
        </section>
    }
}

/// File currently chosen in the picker element.
#[cfg(feature = "hydrate")]
pub(crate) fn picked_file(file_ref: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    file_ref.get_untracked()?.files()?.get(0)
}

/// Clear the picker element so a stale file is not re-read on submit.
fn reset_file_picker(file_ref: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = file_ref.get_untracked() {
            el.set_value("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file_ref;
    }
}
