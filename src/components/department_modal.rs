//! Division Modal Component
//!
//! Create/edit form for a division. The parent selector lists the divisions
//! of the loaded page as a tree under a "no parent" root.

use leptos::prelude::*;

use crate::components::FormField;
use crate::context::use_app_context;
use crate::error::ValidationErrors;
use crate::listing::DepartmentListing;
use crate::models::Department;
use crate::mutations::{save_department, SaveMode};
use crate::store::{close_modal, use_page_store, PageStateStoreFields};
use crate::tree::{build_parent_selector, flatten_selector, ParentChoice};
use crate::validation::DepartmentForm;

#[component]
pub fn DepartmentModal(listing: DepartmentListing, editing: Option<Department>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let editing_id = editing.as_ref().map(|d| d.id);
    let mode = editing_id.map_or(SaveMode::Create, SaveMode::Update);
    let initial = editing.as_ref().map(DepartmentForm::from_department).unwrap_or_default();

    let name = RwSignal::new(initial.name);
    let parent = RwSignal::new(initial.parent);
    let level = RwSignal::new(initial.level);
    let employee_count = RwSignal::new(initial.employee_count);
    let ambassador = RwSignal::new(initial.ambassador_name);
    let errors = RwSignal::new(ValidationErrors::default());

    let parent_options = move || flatten_selector(&build_parent_selector(&listing.rows(), editing_id));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = DepartmentForm {
            name: name.get_untracked(),
            parent: parent.get_untracked(),
            level: level.get_untracked(),
            employee_count: employee_count.get_untracked(),
            ambassador_name: ambassador.get_untracked(),
        };
        match save_department(&ctx, store, listing, mode, &form) {
            Ok(()) => errors.set(ValidationErrors::default()),
            Err(invalid) => errors.set(invalid),
        }
    };

    let title = if editing_id.is_some() { "Edit division" } else { "Create division" };
    let submit_label = if editing_id.is_some() { "Update" } else { "Create" };

    view! {
        <div class="modal-backdrop" on:click=move |_| close_modal(&store)>
            <form class="modal" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                <h2 class="modal-title">{title}</h2>

                <FormField label="Division name" field="name" errors=errors required=true>
                    <input
                        type="text"
                        placeholder="e.g. Human Resources"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </FormField>

                <FormField label="Parent division" field="parent_id" errors=errors>
                    <select
                        prop:value=move || parent.get().key()
                        on:change=move |ev| parent.set(ParentChoice::from_key(&event_target_value(&ev)))
                    >
                        {move || {
                            parent_options()
                                .into_iter()
                                .map(|option| {
                                    let key = option.value.key();
                                    let title = option.indented_title();
                                    let choice = option.value;
                                    view! {
                                        <option
                                            value=key
                                            disabled=option.disabled
                                            selected=move || parent.get_untracked() == choice
                                        >
                                            {title}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </FormField>

                <div class="form-grid">
                    <FormField label="Level" field="level" errors=errors required=true>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || level.get()
                            on:input=move |ev| level.set(event_target_value(&ev))
                        />
                    </FormField>
                    <FormField label="Collaborators" field="employee_count" errors=errors required=true>
                        <input
                            type="number"
                            min="0"
                            prop:value=move || employee_count.get()
                            on:input=move |ev| employee_count.set(event_target_value(&ev))
                        />
                    </FormField>
                </div>

                <FormField label="Ambassador" field="ambassador_name" errors=errors>
                    <input
                        type="text"
                        placeholder="Ambassador name (optional)"
                        prop:value=move || ambassador.get()
                        on:input=move |ev| ambassador.set(event_target_value(&ev))
                    />
                </FormField>

                <div class="modal-actions">
                    <button type="button" class="btn" on:click=move |_| close_modal(&store)>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=move || store.saving().get()>
                        {move || if store.saving().get() { "Saving..." } else { submit_label }}
                    </button>
                </div>
            </form>
        </div>
    }
}
