//! Type Selector Component
//!
//! Dropdown for the checklist type label.

use leptos::prelude::*;

use crate::models::ChecklistType;

/// Checklist type dropdown
#[component]
pub fn TypeSelector(
    #[prop(into)] current_type: Signal<ChecklistType>,
    on_change: impl Fn(ChecklistType) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            class="checklist-type-select"
            on:change=move |ev| on_change(ChecklistType::from_label(&event_target_value(&ev)))
        >
            {ChecklistType::ALL.iter().map(|kind| {
                let kind = *kind;
                view! {
                    <option value=kind.as_str() selected=move || current_type.get() == kind>
                        {kind.as_str()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
