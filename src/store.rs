//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Department, Employee};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrgTab {
    #[default]
    Divisions,
    Collaborators,
}

impl OrgTab {
    pub const ALL: [OrgTab; 2] = [OrgTab::Divisions, OrgTab::Collaborators];

    pub fn label(&self) -> &'static str {
        match self {
            OrgTab::Divisions => "Divisions",
            OrgTab::Collaborators => "Collaborators",
        }
    }
}

/// How the divisions tab lays out its rows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    Tree,
}

/// Form currently open, with the record being edited
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState {
    CreateDepartment,
    EditDepartment(Department),
    CreateEmployee,
    EditEmployee(Employee),
}

/// Organization page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    pub active_tab: OrgTab,
    pub view_mode: ViewMode,
    /// Open form, if any
    pub modal: Option<ModalState>,
    /// A mutation from the open form is in flight
    pub saving: bool,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn open_modal(store: &PageStore, modal: ModalState) {
    store.saving().set(false);
    store.modal().set(Some(modal));
}

pub fn close_modal(store: &PageStore) {
    store.modal().set(None);
    store.saving().set(false);
}

pub fn toggle_view_mode(store: &PageStore) {
    store.view_mode().update(|mode| {
        *mode = match mode {
            ViewMode::List => ViewMode::Tree,
            ViewMode::Tree => ViewMode::List,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_state_defaults() {
        let state = PageState::default();
        assert_eq!(state.active_tab, OrgTab::Divisions);
        assert_eq!(state.view_mode, ViewMode::List);
        assert!(state.modal.is_none());
        assert!(!state.saving);
    }
}
