//! One labelled control of the qualification form.
//!
//! DESIGN
//! ======
//! Dispatch is an exhaustive match on `FieldKind`: selects render their
//! options in definition order (the placeholder stays selectable and is
//! rejected at submit), every other kind renders a single-line input with the
//! matching native `type`. Edits are reported through `on_edit`; the owning
//! page decides what to do with them.

#[cfg(all(test, feature = "ssr"))]
#[path = "lead_field_test.rs"]
mod lead_field_test;

use leptos::prelude::*;

use crate::state::lead_form::{FieldDefinition, FieldKind};

/// Label plus input/select bound to `value`.
#[component]
pub fn LeadField(
    field: FieldDefinition,
    #[prop(into)] value: Signal<String>,
    on_edit: Callback<(&'static str, String)>,
) -> impl IntoView {
    let name = field.name;
    let control = match field.kind {
        FieldKind::Select { options } => view! {
            <select
                class="lead-field__control lead-field__control--select"
                id=name
                name=name
                required=field.required
                prop:value=move || value.get()
                on:change=move |ev| on_edit.run((name, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || value.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => view! {
            <input
                class="lead-field__control"
                type=field.kind.input_type().unwrap_or("text")
                id=name
                name=name
                required=field.required
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run((name, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div class="lead-field">
            <label class="lead-field__label" for=name>
                {field.label}
            </label>
            {control}
        </div>
    }
}
