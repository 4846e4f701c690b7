//! Organization Page Component
//!
//! Divisions and collaborators tabs with their toolbars, tables and the
//! open form.

use leptos::prelude::*;

use crate::components::{
    DepartmentModal, DepartmentTable, DepartmentTreeView, EmployeeModal, EmployeeTable, SearchBar, StatsBar,
};
use crate::context::use_app_context;
use crate::listing::{department_listing, employee_listing, employee_lookups, employee_statistics};
use crate::models::{Department, Employee};
use crate::mutations::{delete_department, delete_employee, edit_department, edit_employee};
use crate::store::{open_modal, toggle_view_mode, use_page_store, ModalState, OrgTab, PageStateStoreFields, ViewMode};

#[component]
pub fn OrganizationPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_page_store();

    let departments = department_listing(&ctx);
    let employees = employee_listing(&ctx);
    let statistics = employee_statistics(&ctx);
    let lookups = employee_lookups(&ctx);

    let on_create = move |_| {
        let modal = match store.active_tab().get_untracked() {
            OrgTab::Divisions => ModalState::CreateDepartment,
            OrgTab::Collaborators => ModalState::CreateEmployee,
        };
        open_modal(&store, modal);
    };

    let department_actions = {
        let edit_ctx = ctx.clone();
        let delete_ctx = ctx.clone();
        (
            Callback::new(move |department: Department| edit_department(&edit_ctx, store, department)),
            Callback::new(move |id: u32| delete_department(&delete_ctx, departments, id)),
        )
    };
    let employee_actions = {
        let edit_ctx = ctx.clone();
        let delete_ctx = ctx.clone();
        (
            Callback::new(move |employee: Employee| edit_employee(&edit_ctx, store, employee)),
            Callback::new(move |id: u32| delete_employee(&delete_ctx, employees, id)),
        )
    };

    let tabs = OrgTab::ALL
        .iter()
        .map(|tab| {
            let tab = *tab;
            view! {
                <button
                    type="button"
                    class=move || if store.active_tab().get() == tab { "tab active" } else { "tab" }
                    on:click=move |_| store.active_tab().set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let divisions_tab = move || store.active_tab().get() == OrgTab::Divisions;

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Organization"</h1>
                <button type="button" class="btn btn-primary" title="Create" on:click=on_create>
                    "+"
                </button>
            </div>

            <nav class="tabs">{tabs}</nav>

            <div class="toolbar">
                <Show when=divisions_tab>
                    <div class="view-toggle">
                        <button
                            type="button"
                            class=move || if store.view_mode().get() == ViewMode::List { "btn active" } else { "btn" }
                            on:click=move |_| {
                                if store.view_mode().get_untracked() != ViewMode::List {
                                    toggle_view_mode(&store);
                                }
                            }
                        >
                            "List"
                        </button>
                        <button
                            type="button"
                            class=move || if store.view_mode().get() == ViewMode::Tree { "btn active" } else { "btn" }
                            on:click=move |_| {
                                if store.view_mode().get_untracked() != ViewMode::Tree {
                                    toggle_view_mode(&store);
                                }
                            }
                        >
                            "Tree"
                        </button>
                    </div>
                </Show>
                {move || {
                    if divisions_tab() {
                        view! {
                            <SearchBar
                                on_search=move |term: String| departments.search(&term)
                                column=Signal::derive(move || departments.filters.with(|f| f.search_column))
                                on_column=Callback::new(move |column| departments.set_search_column(column))
                            />
                        }
                        .into_any()
                    } else {
                        view! { <SearchBar on_search=move |term: String| employees.search(&term) /> }.into_any()
                    }
                }}
            </div>

            <div class="page-body">
                {move || {
                    let (on_edit_department, on_delete_department) = department_actions;
                    let (on_edit_employee, on_delete_employee) = employee_actions;
                    match (store.active_tab().get(), store.view_mode().get()) {
                        (OrgTab::Divisions, ViewMode::List) => view! {
                            <DepartmentTable
                                listing=departments
                                on_edit=on_edit_department
                                on_delete=on_delete_department
                            />
                        }
                        .into_any(),
                        (OrgTab::Divisions, ViewMode::Tree) => view! {
                            <DepartmentTreeView
                                listing=departments
                                on_edit=on_edit_department
                                on_delete=on_delete_department
                            />
                        }
                        .into_any(),
                        (OrgTab::Collaborators, _) => view! {
                            <div class="collaborators">
                                <StatsBar stats=statistics />
                                <EmployeeTable listing=employees on_edit=on_edit_employee on_delete=on_delete_employee />
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </div>

            {move || {
                store
                    .modal()
                    .get()
                    .map(|modal| match modal {
                        ModalState::CreateDepartment => {
                            view! { <DepartmentModal listing=departments editing=None /> }.into_any()
                        }
                        ModalState::EditDepartment(department) => {
                            view! { <DepartmentModal listing=departments editing=Some(department) /> }.into_any()
                        }
                        ModalState::CreateEmployee => {
                            view! { <EmployeeModal listing=employees lookups=lookups editing=None /> }.into_any()
                        }
                        ModalState::EditEmployee(employee) => {
                            view! { <EmployeeModal listing=employees lookups=lookups editing=Some(employee) /> }
                                .into_any()
                        }
                    })
            }}
        </div>
    }
}
