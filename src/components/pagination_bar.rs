//! Pagination Bar Component
//!
//! Previous/next, a window of page numbers and the page-size selector.
//! Changes go out as table events so they pass through the same
//! translation as sorting and filtering.

use leptos::prelude::*;

use crate::filters::{ColumnSelections, RawTableChange, TablePagination, PAGE_SIZE_OPTIONS};
use crate::pagination::{last_page, page_window, range_summary, PageLink};

#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] per_page: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] selections: Signal<ColumnSelections>,
    #[prop(into)] on_change: Callback<RawTableChange>,
) -> impl IntoView {
    let last = move || last_page(total.get(), per_page.get());

    let go = move |current: u32, page_size: u32| {
        on_change.run(RawTableChange {
            pagination: TablePagination {
                current: Some(current),
                page_size: Some(page_size),
            },
            filters: selections.get_untracked(),
            ..Default::default()
        });
    };

    let links = move || {
        page_window(page.get(), last())
            .into_iter()
            .map(|link| match link {
                PageLink::Page(n) => view! {
                    <button
                        type="button"
                        class=move || if page.get() == n { "page-btn active" } else { "page-btn" }
                        on:click=move |_| go(n, per_page.get_untracked())
                    >
                        {n}
                    </button>
                }
                .into_any(),
                PageLink::Ellipsis => view! { <span class="page-ellipsis">"…"</span> }.into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="pagination-bar">
            <span class="pagination-summary">
                {move || range_summary(page.get(), per_page.get(), total.get())}
            </span>
            <div class="pagination-controls">
                <button
                    type="button"
                    class="page-btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| go(page.get_untracked().saturating_sub(1).max(1), per_page.get_untracked())
                >
                    "‹ Previous"
                </button>
                {links}
                <button
                    type="button"
                    class="page-btn"
                    disabled=move || page.get() >= last()
                    on:click=move |_| go(page.get_untracked() + 1, per_page.get_untracked())
                >
                    "Next ›"
                </button>
                <select
                    class="page-size"
                    prop:value=move || per_page.get().to_string()
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            go(1, size);
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|size| view! { <option value=size.to_string()>{format!("{} / page", size)}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
