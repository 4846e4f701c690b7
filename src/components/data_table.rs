//! Data Table Component
//!
//! Generic sortable table with per-column checkbox filters. Header clicks
//! and filter changes are reported as a single widget event, the same shape
//! for every listing; each listing translates it against its own fields.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::FilterDropdown;
use crate::filters::{ColumnSelections, RawSorter, RawTableChange, SortOrder, TablePagination, TableSortOrder};
use crate::options::FilterOption;

type CellRenderer<R> = Arc<dyn Fn(&R) -> AnyView + Send + Sync>;

/// One table column
pub struct Column<R> {
    pub key: &'static str,
    pub title: &'static str,
    pub sortable: bool,
    pub filter: Option<Signal<Vec<FilterOption>>>,
    pub class: &'static str,
    render: CellRenderer<R>,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title,
            sortable: self.sortable,
            filter: self.filter,
            class: self.class,
            render: Arc::clone(&self.render),
        }
    }
}

impl<R> Column<R> {
    pub fn new(key: &'static str, title: &'static str, render: impl Fn(&R) -> AnyView + Send + Sync + 'static) -> Self {
        Self {
            key,
            title,
            sortable: false,
            filter: None,
            class: "",
            render: Arc::new(render),
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filter(mut self, options: Signal<Vec<FilterOption>>) -> Self {
        self.filter = Some(options);
        self
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }
}

/// Sort state shown in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortIndicator {
    pub field: &'static str,
    pub order: SortOrder,
}

/// Next direction when a header is clicked: a new column starts descending,
/// the active column flips
fn next_order(current: &SortIndicator, key: &str) -> TableSortOrder {
    if current.field == key && current.order == SortOrder::Desc {
        TableSortOrder::Ascend
    } else {
        TableSortOrder::Descend
    }
}

#[component]
pub fn DataTable<R>(
    rows: Signal<Vec<R>>,
    columns: Vec<Column<R>>,
    row_key: fn(&R) -> u32,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] sort: Signal<SortIndicator>,
    #[prop(into)] selections: Signal<ColumnSelections>,
    #[prop(into)] pagination: Signal<TablePagination>,
    #[prop(into)] on_change: Callback<RawTableChange>,
) -> impl IntoView
where
    R: Clone + Send + Sync + 'static,
{
    let columns = Arc::new(columns);
    let column_count = columns.len();

    let on_sort = move |key: &'static str| {
        let current = sort.get_untracked();
        on_change.run(RawTableChange {
            pagination: pagination.get_untracked(),
            filters: selections.get_untracked(),
            sorter: RawSorter {
                field: Some(key.to_string()),
                order: Some(next_order(&current, key)),
            },
        });
    };

    let on_filter = move |key: &'static str, values: Vec<String>| {
        let mut filters = selections.get_untracked();
        filters.insert(key.to_string(), values);
        let current = pagination.get_untracked();
        on_change.run(RawTableChange {
            pagination: TablePagination {
                current: Some(1),
                page_size: current.page_size,
            },
            filters,
            sorter: RawSorter::default(),
        });
    };

    let header = columns
        .iter()
        .map(|column| {
            let key = column.key;
            let sortable = column.sortable;
            let indicator = move || {
                let sort = sort.get();
                match (sort.field == key, sort.order) {
                    (true, SortOrder::Asc) => " ▲",
                    (true, SortOrder::Desc) => " ▼",
                    _ => "",
                }
            };
            let filter = column.filter.map(|options| {
                let selected = Signal::derive(move || selections.get().get(key).cloned().unwrap_or_default());
                view! {
                    <FilterDropdown
                        options=options
                        selected=selected
                        on_apply=Callback::new(move |values: Vec<String>| on_filter(key, values))
                    />
                }
            });
            view! {
                <th class=column.class>
                    <span
                        class=if sortable { "th-label sortable" } else { "th-label" }
                        on:click=move |_| {
                            if sortable {
                                on_sort(key);
                            }
                        }
                    >
                        {column.title}
                        {move || if sortable { indicator() } else { "" }}
                    </span>
                    {filter}
                </th>
            }
        })
        .collect_view();

    view! {
        <div class=move || if loading.get() { "data-table loading" } else { "data-table" }>
            <table>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=move |row| row_key(row)
                        children=move |row: R| {
                            let cells = columns
                                .iter()
                                .map(|column| view! { <td class=column.class>{(column.render)(&row)}</td> })
                                .collect_view();
                            view! { <tr>{cells}</tr> }
                        }
                    />
                    <Show when=move || rows.with(|r| r.is_empty()) && !loading.get()>
                        <tr class="empty-row">
                            <td colspan=column_count.to_string()>"No data"</td>
                        </tr>
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_click_order() {
        let desc = SortIndicator {
            field: "salary",
            order: SortOrder::Desc,
        };
        let asc = SortIndicator {
            field: "salary",
            order: SortOrder::Asc,
        };
        assert_eq!(next_order(&desc, "salary"), TableSortOrder::Ascend);
        assert_eq!(next_order(&asc, "salary"), TableSortOrder::Descend);
        assert_eq!(next_order(&desc, "email"), TableSortOrder::Descend);
    }
}
