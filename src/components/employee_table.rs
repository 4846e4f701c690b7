//! Collaborator Table Component

use leptos::prelude::*;

use crate::components::{Column, DataTable, DeleteConfirmButton, PaginationBar, SortIndicator};
use crate::filters::{RawTableChange, TablePagination, DEPARTMENT_COLUMN, POSITION_COLUMN, STATUS_COLUMN};
use crate::listing::EmployeeListing;
use crate::models::{Employee, EmployeeStatus};
use crate::options::{employee_department_options, position_options, status_options, FilterOption};

/// `3500.5` -> `$3,500.50`
pub fn format_salary(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

fn status_class(status: EmployeeStatus) -> &'static str {
    match status {
        EmployeeStatus::Active => "status-tag active",
        EmployeeStatus::Inactive => "status-tag inactive",
    }
}

#[component]
pub fn EmployeeTable(
    listing: EmployeeListing,
    #[prop(into)] on_edit: Callback<Employee>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let page_options = move |f: fn(Option<&[Employee]>) -> Vec<String>| {
        Signal::derive(move || {
            listing.result.data.with(|page| {
                f(page.as_ref().map(|p| p.data.as_slice()))
                    .into_iter()
                    .map(FilterOption::plain)
                    .collect()
            })
        })
    };

    let columns = vec![
        Column::new("name", "Name", |e: &Employee| {
            view! {
                <div class="cell-stack">
                    <span class="cell-strong">{e.full_name()}</span>
                    <span class="cell-muted">{e.email.clone()}</span>
                </div>
            }
            .into_any()
        })
        .sortable(),
        Column::new(DEPARTMENT_COLUMN, "Department", |e: &Employee| e.department.clone().into_any())
            .sortable()
            .filter(page_options(employee_department_options)),
        Column::new(POSITION_COLUMN, "Position", |e: &Employee| e.position.clone().into_any())
            .sortable()
            .filter(page_options(position_options)),
        Column::new("salary", "Salary", |e: &Employee| format_salary(e.salary).into_any())
            .sortable()
            .class("right"),
        Column::new("hire_date", "Hire date", |e: &Employee| e.hire_day().to_string().into_any()).sortable(),
        Column::new(STATUS_COLUMN, "Status", |e: &Employee| {
            view! { <span class=status_class(e.status)>{e.status.label()}</span> }.into_any()
        })
        .filter(Signal::derive(status_options))
        .class("center"),
        Column::new("actions", "", move |e: &Employee| {
            let row = e.clone();
            let id = e.id;
            view! {
                <span class="row-actions">
                    <button type="button" class="btn btn-link" on:click=move |_| on_edit.run(row.clone())>
                        "Edit"
                    </button>
                    <DeleteConfirmButton prompt="Delete this collaborator?" on_confirm=move |_| on_delete.run(id) />
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
            row_key=|e: &Employee| e.id
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_salary() {
        assert_eq!(format_salary(0.0), "$0.00");
        assert_eq!(format_salary(3500.5), "$3,500.50");
        assert_eq!(format_salary(999_999.99), "$999,999.99");
        assert_eq!(format_salary(1_234_567.0), "$1,234,567.00");
        assert_eq!(format_salary(100.0), "$100.00");
    }
}
