//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of the analysis flow state so the
//! theme control can evolve independently of request handling.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state for page-wide presentation preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
}
