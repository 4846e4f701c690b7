//! Search Bar Component
//!
//! Search box submitted with Enter or the button. When `columns` is given
//! a selector picks which field the term applies to.

use leptos::prelude::*;

use crate::filters::SearchColumn;

#[component]
pub fn SearchBar(
    #[prop(into)] on_search: Callback<String>,
    #[prop(optional)] column: Option<Signal<SearchColumn>>,
    #[prop(optional)] on_column: Option<Callback<SearchColumn>>,
) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(term.get_untracked());
    };

    let selector = column.zip(on_column).map(|(column, on_column)| {
        view! {
            <select
                class="search-column"
                prop:value=move || column.get().as_str()
                on:change=move |ev| {
                    if let Some(col) = SearchColumn::parse(&event_target_value(&ev)) {
                        on_column.run(col);
                    }
                }
            >
                {SearchColumn::ALL
                    .iter()
                    .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                    .collect_view()}
            </select>
        }
    });

    view! {
        <form class="search-bar" on:submit=submit>
            {selector}
            <input
                type="search"
                placeholder="Search"
                prop:value=move || term.get()
                on:input=move |ev| set_term.set(event_target_value(&ev))
            />
            <button type="submit" class="btn">"Search"</button>
        </form>
    }
}
