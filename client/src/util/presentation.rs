//! Pure display helpers for analysis results.
//!
//! Kept free of Leptos types so risk tiers and truncation rules can be unit
//! tested natively.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

/// Longest finding text shown before truncation, in characters.
pub const FINDING_MAX_CHARS: usize = 200;

const ELLIPSIS: &str = "...";

/// Risk classification derived from the numeric score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// `> 60` is high, `> 30` is medium, anything else is low.
    pub fn from_score(score: f64) -> Self {
        if score > 60.0 {
            Self::High
        } else if score > 30.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    /// CSS color applied to the score readout.
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "var(--accent-green)",
            Self::Medium => "var(--accent-cyan)",
            Self::High => "var(--accent-red)",
        }
    }
}

/// Truncate `text` to [`FINDING_MAX_CHARS`] characters, appending `...` when
/// anything was cut.
pub fn truncate_finding(text: &str) -> String {
    truncate_chars(text, FINDING_MAX_CHARS)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Score as displayed: integral values without a decimal point.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    }
}

/// Width of the risk bar fill, clamped to the bar.
pub fn risk_fill_width(score: f64) -> String {
    format!("{}%", format_score(score.clamp(0.0, 100.0)))
}

/// Full class list for the mood badge.
pub fn mood_badge_class(modifier: &str) -> String {
    let modifier = modifier.trim();
    if modifier.is_empty() {
        "mood-badge".to_owned()
    } else {
        format!("mood-badge {modifier}")
    }
}

/// Counter text under the message box.
pub fn char_count_label(count: usize, max: usize) -> String {
    format!("{count} / {max}")
}
