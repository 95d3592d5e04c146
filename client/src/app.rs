//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::analyze::AnalyzePage;
use crate::state::{analysis::AnalysisState, input::InputState, ui::UiState};
use crate::util::settings::{LocalStorageSettings, SettingsStore};
use crate::util::theme::{self, ThemeSettings};

/// Explicitly constructed application services shared through context.
///
/// Holds everything that would otherwise be ambient global state; today that
/// is the persisted theme preference.
#[derive(Clone)]
pub struct AppContext {
    theme: ThemeSettings,
}

impl AppContext {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { theme: ThemeSettings::new(store) }
    }

    /// Context backed by the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorageSettings))
    }

    pub fn theme(&self) -> &ThemeSettings {
        &self.theme
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body data-theme="dark">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::browser();
    let ui = RwSignal::new(UiState::default());
    let input = RwSignal::new(InputState::default());
    let analysis = RwSignal::new(AnalysisState::default());

    provide_context(ctx.clone());
    provide_context(ui);
    provide_context(input);
    provide_context(analysis);

    // Effects only run in the browser, so SSR output keeps the default theme
    // and the stored preference is applied right after hydration.
    Effect::new(move || {
        let saved = ctx.theme().load();
        theme::apply(saved);
        ui.update(|u| u.theme = saved);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/truthlens.css"/>
        <Title text="TruthLens"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AnalyzePage/>
            </Routes>
        </Router>
    }
}
