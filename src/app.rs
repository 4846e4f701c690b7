//! Org Admin App
//!
//! Root component: provides the shared services and page store, then lays
//! out the navbar, the organization page and the toast stack.

use console_logger::ConsoleLogger;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Navbar, OrganizationPage, Toaster};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::PageState;

#[component]
pub fn App(config: AppConfig, logger: Option<&'static ConsoleLogger>) -> impl IntoView {
    provide_context(AppContext::new(&config));
    provide_context(Store::new(PageState::default()));

    view! {
        <div class="app-layout">
            <Navbar logger=logger />
            <main class="main-content">
                <OrganizationPage />
            </main>
            <Toaster />
        </div>
    }
}
