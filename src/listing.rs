//! Listings
//!
//! Filter state of a table paired with the query that loads its page.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filters::{
    apply_search, apply_table_change, reset_to_first_page, set_search_column, translate, ColumnSelections,
    DepartmentFilters, EmployeeFilters, FilterState, RawTableChange, SearchColumn, SortOrder,
};
use crate::models::{Department, Employee, EmployeeStats, Meta, Paginated};
use crate::query::{use_query, QueryScope, QueryState};

/// One paginated table: its filter state and the latest loaded page
pub struct Listing<F: 'static, R: 'static> {
    pub filters: RwSignal<F>,
    pub result: QueryState<Paginated<R>>,
}

impl<F: 'static, R: 'static> Clone for Listing<F, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: 'static, R: 'static> Copy for Listing<F, R> {}

impl<F, R> Listing<F, R>
where
    F: FilterState + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    pub fn search(&self, term: &str) {
        self.filters.update(|f| *f = apply_search(f, term));
    }

    /// Apply a table widget event. Events naming columns or values the
    /// listing doesn't know are dropped and the state is left as is.
    pub fn table_change(&self, raw: &RawTableChange) {
        match translate::<F>(raw) {
            Ok(change) => self.filters.update(|f| *f = apply_table_change(f, change)),
            Err(err) => log::warn!("[LISTING] rejected table event: {}", err),
        }
    }

    pub fn reset_to_first_page(&self) {
        if self.filters.with_untracked(|f| f.page()) != 1 {
            self.filters.update(|f| *f = reset_to_first_page(f));
        }
    }

    pub fn page(&self) -> u32 {
        self.filters.with(|f| f.page())
    }

    pub fn per_page(&self) -> u32 {
        self.filters.with(|f| f.per_page())
    }

    pub fn selections(&self) -> ColumnSelections {
        self.filters.with(|f| f.selections())
    }

    pub fn sort_key(&self) -> (&'static str, SortOrder) {
        self.filters.with(|f| f.sort_key())
    }

    /// Rows of the current page; empty until the first load
    pub fn rows(&self) -> Vec<R> {
        self.result.data.with(|page| page.as_ref().map(|p| p.data.clone()).unwrap_or_default())
    }

    pub fn meta(&self) -> Option<Meta> {
        self.result.data.with(|page| page.as_ref().map(|p| p.meta.clone()))
    }

    pub fn total(&self) -> u64 {
        self.meta().map_or(0, |m| m.total)
    }

    pub fn loading(&self) -> bool {
        self.result.loading.get()
    }
}

impl Listing<DepartmentFilters, Department> {
    pub fn set_search_column(&self, column: SearchColumn) {
        self.filters.update(|f| *f = set_search_column(f, column));
    }
}

pub type DepartmentListing = Listing<DepartmentFilters, Department>;
pub type EmployeeListing = Listing<EmployeeFilters, Employee>;

pub fn department_listing(ctx: &AppContext) -> DepartmentListing {
    let filters = RwSignal::new(DepartmentFilters::default());
    let api = ctx.api.clone();
    let queries = ctx.queries;
    let result = use_query(
        "departments",
        move || queries.version(QueryScope::Departments),
        move || filters.get(),
        move |filters: DepartmentFilters| {
            let api = api.clone();
            async move { api.list_departments(&filters).await }
        },
    );
    Listing { filters, result }
}

pub fn employee_listing(ctx: &AppContext) -> EmployeeListing {
    let filters = RwSignal::new(EmployeeFilters::default());
    let api = ctx.api.clone();
    let queries = ctx.queries;
    let result = use_query(
        "employees",
        move || queries.version(QueryScope::Employees),
        move || filters.get(),
        move |filters: EmployeeFilters| {
            let api = api.clone();
            async move { api.search_employees(&filters).await }
        },
    );
    Listing { filters, result }
}

pub fn employee_statistics(ctx: &AppContext) -> QueryState<EmployeeStats> {
    let api = ctx.api.clone();
    let queries = ctx.queries;
    use_query(
        "statistics",
        move || queries.version(QueryScope::Statistics),
        || (),
        move |()| {
            let api = api.clone();
            async move { api.employee_statistics().await }
        },
    )
}

/// Select options of the collaborator form
#[derive(Clone, Copy)]
pub struct EmployeeLookups {
    pub departments: QueryState<Vec<String>>,
    pub positions: QueryState<Vec<String>>,
}

impl EmployeeLookups {
    pub fn departments(&self) -> Vec<String> {
        self.departments.data.get().unwrap_or_default()
    }

    pub fn positions(&self) -> Vec<String> {
        self.positions.data.get().unwrap_or_default()
    }
}

pub fn employee_lookups(ctx: &AppContext) -> EmployeeLookups {
    let queries = ctx.queries;
    let api = ctx.api.clone();
    let departments = use_query(
        "employee departments",
        move || queries.version(QueryScope::EmployeeLookups),
        || "departments",
        move |_| {
            let api = api.clone();
            async move { api.employee_departments().await }
        },
    );
    let api = ctx.api.clone();
    let positions = use_query(
        "employee positions",
        move || queries.version(QueryScope::EmployeeLookups),
        || "positions",
        move |_| {
            let api = api.clone();
            async move { api.employee_positions().await }
        },
    );
    EmployeeLookups { departments, positions }
}
