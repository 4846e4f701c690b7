//! Filter Dropdown Component
//!
//! Checkbox list for one column. Checks are drafted locally and only
//! reported when "Filter" is pressed; "Clear" reports an empty selection.

use leptos::prelude::*;

use crate::options::FilterOption;

#[component]
pub fn FilterDropdown(
    #[prop(into)] options: Signal<Vec<FilterOption>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_apply: Callback<Vec<String>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let draft = RwSignal::new(Vec::<String>::new());

    let toggle_open = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if !open.get_untracked() {
            draft.set(selected.get_untracked());
        }
        open.update(|o| *o = !*o);
    };

    let toggle_value = move |value: String| {
        draft.update(|values| {
            if let Some(pos) = values.iter().position(|v| *v == value) {
                values.remove(pos);
            } else {
                values.push(value);
            }
        });
    };

    let active = move || !selected.with(|s| s.is_empty());

    view! {
        <span class="filter-dropdown">
            <button
                type="button"
                class=move || if active() { "filter-trigger active" } else { "filter-trigger" }
                on:click=toggle_open
            >
                "⏷"
            </button>
            <Show when=move || open.get()>
                <div class="filter-panel" on:click=|ev| ev.stop_propagation()>
                    <div class="filter-options">
                        <For
                            each=move || options.get()
                            key=|option| option.value.clone()
                            children=move |option| {
                                let value = option.value.clone();
                                let checked = {
                                    let value = value.clone();
                                    move || draft.with(|d| d.contains(&value))
                                };
                                view! {
                                    <label class="filter-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| toggle_value(value.clone())
                                        />
                                        {option.label}
                                    </label>
                                }
                            }
                        />
                        <Show when=move || options.with(|o| o.is_empty())>
                            <span class="filter-empty">"No options"</span>
                        </Show>
                    </div>
                    <div class="filter-actions">
                        <button
                            type="button"
                            class="btn btn-primary btn-small"
                            on:click=move |_| {
                                on_apply.run(draft.get_untracked());
                                open.set(false);
                            }
                        >
                            "Filter"
                        </button>
                        <button
                            type="button"
                            class="btn btn-small"
                            on:click=move |_| {
                                draft.set(Vec::new());
                                on_apply.run(Vec::new());
                                open.set(false);
                            }
                        >
                            "Clear"
                        </button>
                    </div>
                </div>
            </Show>
        </span>
    }
}
