//! Stage Card Component
//!
//! Read-only summary of one stage; pages append their action via children.

use leptos::prelude::*;

use crate::models::{display_date, Stage};

#[component]
pub fn StageCard(stage: Stage, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="stage-card">
            <div class="stage-card-head">
                <h4 class="stage-name">{stage.name.clone()}</h4>
                <div class="stage-badges">
                    <span class=stage.status.badge_class()>{stage.status.label()}</span>
                    <span class=stage.coverage_request.badge_class()>{stage.coverage_request.label()}</span>
                </div>
            </div>
            {stage.description.clone().filter(|d| !d.is_empty()).map(|d| view! { <p class="stage-description">{d}</p> })}
            <div class="stage-facts">
                <div>
                    <span class="fact-label">"Fecha de inicio:"</span>" "
                    {display_date(stage.start_date.as_deref())}
                </div>
                <div>
                    <span class="fact-label">"Fecha de fin estimada:"</span>" "
                    {display_date(stage.end_date.as_deref())}
                </div>
                <div>
                    <span class="fact-label">"Requiere contribución:"</span>" "
                    {if stage.requires_contribution { "Sí" } else { "No" }}
                </div>
                {children.map(|c| c())}
            </div>
        </div>
    }
}
