//! Toaster Component
//!
//! Renders the notifier's toast queue.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_app_context().notifier;

    view! {
        <div class="toaster">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| notifier.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
