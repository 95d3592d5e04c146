//! Header button switching between dark and light themes.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::ui::UiState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = ctx.theme().toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button class="theme-toggle" id="themeToggle" title="Toggle theme" on:click=on_click>
            {move || ui.get().theme.toggle_icon()}
        </button>
    }
}
