//! Labelled text input with its validation message.

use leptos::prelude::*;

use crate::util::validation::{Field, FieldErrors};

/// Input bound to `value`, followed by the message for `field`, if any.
#[component]
pub fn FormField(
    value: RwSignal<String>,
    field: Field,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            class="form-input"
            id=field.name()
            name=field.name()
            type=input_type
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
        <p class="form-error">{move || errors.get().get(field).unwrap_or_default()}</p>
    }
}
