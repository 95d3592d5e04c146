//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the analysis form, feedback banners, and result panels
//! while reading/writing shared state from Leptos context providers.

pub mod agent_timeline;
pub mod feedback;
pub mod input_panel;
pub mod mood_badge;
pub mod reasons_panel;
pub mod results_panel;
pub mod risk_meter;
pub mod theme_toggle;
