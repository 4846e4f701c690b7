//! Form Field Component
//!
//! Label, input and the validation message under it.

use leptos::prelude::*;

use crate::error::ValidationErrors;

#[component]
pub fn FormField(
    label: &'static str,
    field: &'static str,
    errors: RwSignal<ValidationErrors>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    let message = move || errors.with(|e| e.message_for(field));

    view! {
        <div class=move || if message().is_some() { "form-field has-error" } else { "form-field" }>
            <label>
                {label}
                {required.then_some(view! { <span class="required">"*"</span> })}
            </label>
            {children()}
            {move || message().map(|m| view! { <span class="field-error">{m}</span> })}
        </div>
    }
}
