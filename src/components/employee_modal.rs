//! Collaborator Modal Component
//!
//! Create/edit form for a collaborator. Department and position suggest the
//! values already in use.

use leptos::prelude::*;

use crate::components::FormField;
use crate::context::use_app_context;
use crate::error::ValidationErrors;
use crate::listing::{EmployeeListing, EmployeeLookups};
use crate::models::{Employee, EmployeeStatus};
use crate::mutations::{save_employee, SaveMode};
use crate::store::{close_modal, use_page_store, PageStateStoreFields};
use crate::validation::EmployeeForm;

/// Text input bound to one string signal
#[component]
fn TextInput(
    value: RwSignal<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] list: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            list=list
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn EmployeeModal(listing: EmployeeListing, lookups: EmployeeLookups, editing: Option<Employee>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let mode = editing.as_ref().map_or(SaveMode::Create, |e| SaveMode::Update(e.id));
    let initial = editing.as_ref().map(EmployeeForm::from_employee).unwrap_or_default();

    let first_name = RwSignal::new(initial.first_name);
    let last_name = RwSignal::new(initial.last_name);
    let email = RwSignal::new(initial.email);
    let phone = RwSignal::new(initial.phone);
    let position = RwSignal::new(initial.position);
    let salary = RwSignal::new(initial.salary);
    let hire_date = RwSignal::new(initial.hire_date);
    let department = RwSignal::new(initial.department);
    let status = RwSignal::new(initial.status);
    let address = RwSignal::new(initial.address);
    let notes = RwSignal::new(initial.notes);
    let errors = RwSignal::new(ValidationErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = EmployeeForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            position: position.get_untracked(),
            salary: salary.get_untracked(),
            hire_date: hire_date.get_untracked(),
            department: department.get_untracked(),
            status: status.get_untracked(),
            address: address.get_untracked(),
            notes: notes.get_untracked(),
        };
        match save_employee(&ctx, store, listing, mode, &form) {
            Ok(()) => errors.set(ValidationErrors::default()),
            Err(invalid) => errors.set(invalid),
        }
    };

    let is_edit = mode != SaveMode::Create;
    let title = if is_edit { "Edit collaborator" } else { "Create collaborator" };
    let submit_label = if is_edit { "Update" } else { "Create" };

    let suggestions = |id: &'static str, values: Signal<Vec<String>>| {
        view! {
            <datalist id=id>
                {move || values.get().into_iter().map(|v| view! { <option value=v /> }).collect_view()}
            </datalist>
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| close_modal(&store)>
            <form class="modal modal-wide" on:submit=on_submit on:click=|ev| ev.stop_propagation()>
                <h2 class="modal-title">{title}</h2>

                <div class="form-grid">
                    <FormField label="First name" field="first_name" errors=errors required=true>
                        <TextInput value=first_name placeholder="e.g. Juan" />
                    </FormField>
                    <FormField label="Last name" field="last_name" errors=errors required=true>
                        <TextInput value=last_name placeholder="e.g. Pérez" />
                    </FormField>
                    <FormField label="Email" field="email" errors=errors required=true>
                        <TextInput value=email input_type="email" placeholder="name@company.com" />
                    </FormField>
                    <FormField label="Phone" field="phone" errors=errors>
                        <TextInput value=phone placeholder="e.g. +51 999 999 999" />
                    </FormField>
                    <FormField label="Department" field="department" errors=errors required=true>
                        <TextInput value=department placeholder="Select department" list="department-options" />
                        {suggestions("department-options", Signal::derive(move || lookups.departments()))}
                    </FormField>
                    <FormField label="Position" field="position" errors=errors required=true>
                        <TextInput value=position placeholder="Select position" list="position-options" />
                        {suggestions("position-options", Signal::derive(move || lookups.positions()))}
                    </FormField>
                    <FormField label="Salary" field="salary" errors=errors required=true>
                        <TextInput value=salary input_type="number" placeholder="e.g. 3000" />
                    </FormField>
                    <FormField label="Hire date" field="hire_date" errors=errors required=true>
                        <TextInput value=hire_date input_type="date" />
                    </FormField>
                </div>

                <FormField label="Status" field="status" errors=errors required=true>
                    <select
                        prop:value=move || status.get().as_str()
                        on:change=move |ev| {
                            if let Some(s) = EmployeeStatus::parse(&event_target_value(&ev)) {
                                status.set(s);
                            }
                        }
                    >
                        {EmployeeStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </select>
                </FormField>

                <FormField label="Address" field="address" errors=errors>
                    <TextInput value=address placeholder="e.g. Av. Principal 123, Lima" />
                </FormField>

                <FormField label="Notes" field="notes" errors=errors>
                    <textarea
                        rows="3"
                        placeholder="Additional notes (optional)"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
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
