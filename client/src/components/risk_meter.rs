//! Risk score readout with tier label and fill bar.

use leptos::prelude::*;

use crate::net::types::AnalysisResult;
use crate::util::presentation::{RiskTier, format_score, risk_fill_width};

#[component]
pub fn RiskMeter(result: Signal<AnalysisResult>) -> impl IntoView {
    let score = move || result.get().score;
    let tier = move || RiskTier::from_score(score());

    // Start empty and grow to the score on the next frame so the bar animates.
    let fill_width = RwSignal::new(risk_fill_width(0.0));
    Effect::new(move || {
        let target = risk_fill_width(score());
        fill_width.set(risk_fill_width(0.0));
        request_animation_frame(move || fill_width.set(target));
    });

    view! {
        <div class="risk-meter">
            <div class="risk-meter__header">
                <span class="risk-meter__score" id="riskScore" style:color=move || tier().color()>
                    {move || format_score(score())}
                </span>
                <span class="risk-meter__label" id="riskDescription">{move || tier().label()}</span>
            </div>
            <div class="risk-meter__bar">
                <div class="risk-meter__fill" id="riskFill" style:width=move || fill_width.get()></div>
            </div>
        </div>
    }
}
