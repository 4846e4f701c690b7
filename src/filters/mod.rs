//! Listing Filter State
//!
//! Pagination, sort, search and column-filter state for one listing, and the
//! translation of table widget events into the next state. Every operation
//! returns a fresh value; callers replace the stored state wholesale.

mod department;
mod employee;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use department::*;
pub use employee::*;

/// Page sizes offered by the pagination control
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Sort direction as reported by the table widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSortOrder {
    Ascend,
    Descend,
}

impl From<TableSortOrder> for SortOrder {
    fn from(order: TableSortOrder) -> Self {
        match order {
            TableSortOrder::Ascend => SortOrder::Asc,
            TableSortOrder::Descend => SortOrder::Desc,
        }
    }
}

/// Pagination widget state carried by a table event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TablePagination {
    pub current: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSorter {
    pub field: Option<String>,
    pub order: Option<TableSortOrder>,
}

/// Checked values per column key, as the table widget reports them
pub type ColumnSelections = BTreeMap<String, Vec<String>>;

/// Untyped table event: string keys straight from the widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTableChange {
    pub pagination: TablePagination,
    pub filters: ColumnSelections,
    pub sorter: RawSorter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort<F> {
    pub field: F,
    pub order: SortOrder,
}

/// Table event after validation against one entity's fields
#[derive(Debug, Clone, PartialEq)]
pub struct TableChange<F: FilterState> {
    pub page: u32,
    pub per_page: u32,
    pub columns: F::Columns,
    pub sort: Option<Sort<F::SortField>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter column '{0}'")]
    UnknownColumn(String),
    #[error("column '{0}' cannot be sorted")]
    UnknownSortField(String),
    #[error("invalid value '{value}' for column '{column}'")]
    InvalidValue { column: String, value: String },
    #[error("unsupported page size {0}")]
    PageSize(u32),
}

/// Filter state of one entity listing.
///
/// Each entity enumerates the fields it can sort and filter by; anything
/// else coming from the widget is rejected in [`translate`].
pub trait FilterState: Clone + PartialEq + fmt::Debug + Serialize {
    type SortField: Copy + PartialEq + fmt::Debug;
    type Columns: Clone + PartialEq + fmt::Debug + Default;

    fn parse_sort_field(field: &str) -> Result<Self::SortField, FilterError>;
    fn parse_columns(selections: &ColumnSelections) -> Result<Self::Columns, FilterError>;

    /// Column filters in the widget's string form
    fn selections(&self) -> ColumnSelections;
    /// Active sort as (column key, direction)
    fn sort_key(&self) -> (&'static str, SortOrder);

    fn page(&self) -> u32;
    fn per_page(&self) -> u32;
    fn set_page(&mut self, page: u32);
    fn set_per_page(&mut self, per_page: u32);
    fn set_search(&mut self, search: Option<String>);
    fn set_columns(&mut self, columns: Self::Columns);
    fn set_sort(&mut self, sort: Sort<Self::SortField>);
}

/// New search term; always restarts from the first page
pub fn apply_search<F: FilterState>(prev: &F, term: &str) -> F {
    let mut next = prev.clone();
    let term = term.trim();
    next.set_search(if term.is_empty() { None } else { Some(term.to_string()) });
    next.set_page(1);
    next
}

/// Validate a widget event against `F`'s enumerated fields
pub fn translate<F: FilterState>(raw: &RawTableChange) -> Result<TableChange<F>, FilterError> {
    let page = raw.pagination.current.filter(|p| *p > 0).unwrap_or(1);
    let per_page = match raw.pagination.page_size.filter(|s| *s > 0) {
        None => DEFAULT_PAGE_SIZE,
        Some(size) if PAGE_SIZE_OPTIONS.contains(&size) => size,
        Some(size) => return Err(FilterError::PageSize(size)),
    };
    let columns = F::parse_columns(&raw.filters)?;
    let sort = match raw.sorter.field.as_deref() {
        Some(field) if !field.is_empty() => Some(Sort {
            field: F::parse_sort_field(field)?,
            order: raw.sorter.order.map(SortOrder::from).unwrap_or(SortOrder::Desc),
        }),
        _ => None,
    };
    Ok(TableChange {
        page,
        per_page,
        columns,
        sort,
    })
}

/// Next state for a table event. Sort is only replaced when the event
/// carries one.
pub fn apply_table_change<F: FilterState>(prev: &F, change: TableChange<F>) -> F {
    let mut next = prev.clone();
    next.set_page(change.page);
    next.set_per_page(change.per_page);
    next.set_columns(change.columns);
    if let Some(sort) = change.sort {
        next.set_sort(sort);
    }
    next
}

pub fn reset_to_first_page<F: FilterState>(prev: &F) -> F {
    let mut next = prev.clone();
    next.set_page(1);
    next
}

/// Selected values of one column, `None` when nothing is checked
pub(crate) fn selected<T>(
    selections: &ColumnSelections,
    column: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<Vec<T>>, FilterError> {
    let Some(values) = selections.get(column) else {
        return Ok(None);
    };
    if values.is_empty() {
        return Ok(None);
    }
    values
        .iter()
        .map(|v| {
            parse(v).ok_or_else(|| FilterError::InvalidValue {
                column: column.to_string(),
                value: v.clone(),
            })
        })
        .collect::<Result<Vec<T>, _>>()
        .map(Some)
}

/// Inverse of [`selected`]: write a column's values back as strings
pub(crate) fn insert_selection<T: ToString>(selections: &mut ColumnSelections, column: &str, values: &Option<Vec<T>>) {
    if let Some(values) = values {
        selections.insert(column.to_string(), values.iter().map(T::to_string).collect());
    }
}

/// Reject any column key outside `known`
pub(crate) fn ensure_known_columns(selections: &ColumnSelections, known: &[&str]) -> Result<(), FilterError> {
    match selections.keys().find(|k| !known.contains(&k.as_str())) {
        Some(unknown) => Err(FilterError::UnknownColumn(unknown.clone())),
        None => Ok(()),
    }
}
