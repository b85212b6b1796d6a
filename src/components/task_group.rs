//! Task Group Component
//!
//! Editable fields of one project stage, scoped by its task identity.

use leptos::prelude::*;

use crate::components::{CircleCheckbox, DateInput, Dropdown, TextInput};
use crate::models::CoverageRequest;
use crate::tasks::{
    format_date_input, parse_date_input, TaskDraft, TaskId, CATEGORY, END_DATE, REQUIRES_CONTRIBUTION, START_DATE,
    TASK_NAME,
};

fn category_options() -> Vec<(&'static str, &'static str)> {
    CoverageRequest::ALL.iter().map(|c| (c.code(), c.label())).collect()
}

/// One stage card. `children` is rendered last (the parent passes the
/// remove button for appended groups).
#[component]
pub fn TaskGroup(task: TaskId, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let draft = RwSignal::new(TaskDraft::default());
    let scope = task.get();

    let start_value = Signal::derive(move || format_date_input(draft.with(|d| d.start())));
    let end_value = Signal::derive(move || format_date_input(draft.with(|d| d.end())));
    let end_min = Signal::derive(move || format_date_input(draft.with(|d| d.end_min())));

    view! {
        <div class="task-card" data-task=scope.to_string()>
            {move || draft.with(|d| d.coverage).map(|c| view! { <span class=c.badge_class()>{c.label()}</span> })}
            <TextInput
                label=TASK_NAME
                scope=scope
                on_input=Callback::new(move |name: String| draft.update(|d| d.name = name))
            />
            <DateInput
                label=START_DATE
                scope=scope
                value=start_value
                on_input=Callback::new(move |raw: String| draft.update(|d| d.set_start(parse_date_input(&raw))))
            />
            <DateInput
                label=END_DATE
                scope=scope
                value=end_value
                min=end_min
                on_input=Callback::new(move |raw: String| draft.update(|d| d.set_end(parse_date_input(&raw))))
            />
            <CircleCheckbox
                label=REQUIRES_CONTRIBUTION
                scope=scope
                checked=Signal::derive(move || draft.with(|d| d.requires_contribution))
                on_change=Callback::new(move |checked: bool| {
                    draft.update(|d| {
                        d.requires_contribution = checked;
                        if !checked {
                            d.coverage = None;
                        }
                    })
                })
            />
            <Show when=move || draft.with(|d| d.requires_contribution)>
                <Dropdown
                    label=CATEGORY
                    scope=scope
                    options=category_options()
                    on_select=Callback::new(move |code: String| {
                        draft.update(|d| d.coverage = CoverageRequest::parse(&code))
                    })
                />
            </Show>
            {children.map(|c| c())}
        </div>
    }
}
