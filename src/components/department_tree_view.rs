//! Division Tree View Component
//!
//! Divisions of the loaded page as an indented hierarchy.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::listing::DepartmentListing;
use crate::models::Department;
use crate::tree::flatten_hierarchy;

#[component]
pub fn DepartmentTreeView(
    listing: DepartmentListing,
    #[prop(into)] on_edit: Callback<Department>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let tree_rows = move || flatten_hierarchy(&listing.rows());

    view! {
        <div class="tree-view">
            <For
                each=tree_rows
                key=|(department, depth)| (department.id, *depth, department.name.clone(), department.employee_count)
                children=move |(department, depth)| {
                    let indent = format!("padding-left: {}px", depth * 20);
                    let row = department.clone();
                    let id = department.id;
                    view! {
                        <div class="tree-row" style=indent>
                            <span class="tree-toggle">{if department.children_count > 0 { "▾" } else { "·" }}</span>
                            <span class="cell-strong">{department.name.clone()}</span>
                            <span class="cell-muted">
                                {format!("Level {} · {} collaborators", department.level, department.employee_count)}
                            </span>
                            <span class="row-actions">
                                <button type="button" class="btn btn-link" on:click=move |_| on_edit.run(row.clone())>
                                    "Edit"
                                </button>
                                <DeleteConfirmButton prompt="Delete this division?" on_confirm=move |_| on_delete.run(id) />
                            </span>
                        </div>
                    }
                }
            />
            <Show when=move || listing.rows().is_empty() && !listing.loading()>
                <p class="empty-row">"No data"</p>
            </Show>
        </div>
    }
}
