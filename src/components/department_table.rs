//! Division Table Component
//!
//! Divisions listing: sortable columns, checkbox filters built from the
//! loaded page, row actions and the pagination bar.

use leptos::prelude::*;

use crate::components::{Column, DataTable, DeleteConfirmButton, PaginationBar, SortIndicator};
use crate::filters::{RawTableChange, TablePagination, LEVEL_COLUMN, NAME_COLUMN, PARENT_COLUMN};
use crate::listing::DepartmentListing;
use crate::models::Department;
use crate::options::{department_name_options, level_options, parent_name_options, FilterOption};

const TOP_LEVEL_LABEL: &str = "General management";

fn level_option(level: u32) -> FilterOption {
    FilterOption {
        value: level.to_string(),
        label: format!("Level {}", level),
    }
}

#[component]
pub fn DepartmentTable(
    listing: DepartmentListing,
    #[prop(into)] on_edit: Callback<Department>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let page_rows = move |f: fn(Option<&[Department]>) -> Vec<String>| {
        Signal::derive(move || {
            listing.result.data.with(|page| {
                f(page.as_ref().map(|p| p.data.as_slice()))
                    .into_iter()
                    .map(FilterOption::plain)
                    .collect()
            })
        })
    };
    let name_options = page_rows(department_name_options);
    let parent_options = page_rows(parent_name_options);
    let level_filter_options = Signal::derive(move || {
        listing.result.data.with(|page| {
            level_options(page.as_ref().map(|p| p.data.as_slice()))
                .into_iter()
                .map(level_option)
                .collect()
        })
    });

    let columns = vec![
        Column::new(NAME_COLUMN, "Division", |d: &Department| {
            view! { <span class="cell-strong">{d.name.clone()}</span> }.into_any()
        })
        .sortable()
        .filter(name_options),
        Column::new(PARENT_COLUMN, "Parent division", |d: &Department| {
            d.parent_name().unwrap_or(TOP_LEVEL_LABEL).to_string().into_any()
        })
        .filter(parent_options),
        Column::new("employee_count", "Collaborators", |d: &Department| d.employee_count.into_any())
            .sortable()
            .class("center"),
        Column::new(LEVEL_COLUMN, "Level", |d: &Department| d.level.into_any())
            .sortable()
            .filter(level_filter_options)
            .class("center"),
        Column::new("children_count", "Subdivisions", |d: &Department| {
            view! { <span class="badge">{d.children_count}</span> }.into_any()
        })
        .class("center"),
        Column::new("ambassador_name", "Ambassadors", |d: &Department| {
            d.ambassador_name.clone().unwrap_or_else(|| "-".to_string()).into_any()
        }),
        Column::new("actions", "", move |d: &Department| {
            let row = d.clone();
            let id = d.id;
            view! {
                <span class="row-actions">
                    <button type="button" class="btn btn-link" on:click=move |_| on_edit.run(row.clone())>
                        "Edit"
                    </button>
                    <DeleteConfirmButton prompt="Delete this division?" on_confirm=move |_| on_delete.run(id) />
                </span>
            }
            .into_any()
        })
        .class("actions"),
    ];

    let sort = Signal::derive(move || {
        let (field, order) = listing.sort_key();
        SortIndicator { field, order }
    });
    let pagination = Signal::derive(move || TablePagination {
        current: Some(listing.page()),
        page_size: Some(listing.per_page()),
    });
    let on_change = Callback::new(move |raw: RawTableChange| listing.table_change(&raw));

    view! {
        <DataTable
            rows=Signal::derive(move || listing.rows())
            columns=columns
            row_key=|d: &Department| d.id
            loading=Signal::derive(move || listing.loading())
            sort=sort
            selections=Signal::derive(move || listing.selections())
            pagination=pagination
            on_change=on_change
        />
        <PaginationBar
            page=Signal::derive(move || listing.page())
            per_page=Signal::derive(move || listing.per_page())
            total=Signal::derive(move || listing.total())
            selections=Signal::derive(move || listing.selections())
            on_change=on_change
        />
    }
}
