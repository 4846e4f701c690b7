//! Mutation Flows
//!
//! Create, update and delete for divisions and collaborators. Successful
//! mutations never patch list data locally; they invalidate the affected
//! query scopes and the listings refetch.

use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::error::ValidationErrors;
use crate::filters::FilterState;
use crate::listing::{DepartmentListing, EmployeeListing, Listing};
use crate::models::{Department, Employee};
use crate::query::QueryScope;
use crate::store::{close_modal, open_modal, ModalState, PageStateStoreFields, PageStore};
use crate::validation::{DepartmentForm, EmployeeForm};

/// Whether a submission creates a record or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update(u32),
}

struct Messages {
    created: &'static str,
    updated: &'static str,
    deleted: &'static str,
    create_failed: &'static str,
    update_failed: &'static str,
    delete_failed: &'static str,
}

const DEPARTMENT_MESSAGES: Messages = Messages {
    created: "Division created successfully",
    updated: "Division updated successfully",
    deleted: "Division deleted successfully",
    create_failed: "Error creating division",
    update_failed: "Error updating division",
    delete_failed: "Error deleting division",
};

const EMPLOYEE_MESSAGES: Messages = Messages {
    created: "Collaborator created successfully",
    updated: "Collaborator updated successfully",
    deleted: "Collaborator deleted successfully",
    create_failed: "Error creating collaborator",
    update_failed: "Error updating collaborator",
    delete_failed: "Error deleting collaborator",
};

const DEPARTMENT_SCOPES: &[QueryScope] = &[QueryScope::Departments];
const EMPLOYEE_SCOPES: &[QueryScope] = &[QueryScope::Employees, QueryScope::Statistics, QueryScope::EmployeeLookups];

fn invalidate(ctx: &AppContext, scopes: &[QueryScope]) {
    for scope in scopes {
        ctx.queries.invalidate(*scope);
    }
}

/// A created record shows up on page 1; an update keeps the current page
fn after_save<F, R>(listing: Listing<F, R>, mode: SaveMode)
where
    F: FilterState + Send + Sync + 'static,
    R: Clone + Send + Sync + 'static,
{
    if mode == SaveMode::Create {
        listing.reset_to_first_page();
    }
}

// ========================
// Divisions
// ========================

/// Validate and submit the division form. Validation failures are returned
/// for display and nothing is sent.
pub fn save_department(
    ctx: &AppContext,
    store: PageStore,
    listing: DepartmentListing,
    mode: SaveMode,
    form: &DepartmentForm,
) -> Result<(), ValidationErrors> {
    let payload = form.validate()?;
    if store.saving().get_untracked() {
        return Ok(());
    }
    store.saving().set(true);

    let ctx = ctx.clone();
    spawn_local(async move {
        let result = match mode {
            SaveMode::Create => ctx.api.create_department(&payload).await,
            SaveMode::Update(id) => ctx.api.update_department(id, &payload).await,
        };
        match result {
            Ok(_) => {
                let message = match mode {
                    SaveMode::Create => DEPARTMENT_MESSAGES.created,
                    SaveMode::Update(_) => DEPARTMENT_MESSAGES.updated,
                };
                ctx.notifier.success(message);
                invalidate(&ctx, DEPARTMENT_SCOPES);
                close_modal(&store);
                after_save(listing, mode);
            }
            Err(err) => {
                let fallback = match mode {
                    SaveMode::Create => DEPARTMENT_MESSAGES.create_failed,
                    SaveMode::Update(_) => DEPARTMENT_MESSAGES.update_failed,
                };
                log::error!("[MUTATION] division save failed: {}", err);
                ctx.notifier.error(err.user_message(fallback));
                store.saving().set(false);
            }
        }
    });
    Ok(())
}

pub fn delete_department(ctx: &AppContext, listing: DepartmentListing, id: u32) {
    let ctx = ctx.clone();
    spawn_local(async move {
        match ctx.api.delete_department(id).await {
            Ok(()) => {
                ctx.notifier.success(DEPARTMENT_MESSAGES.deleted);
                invalidate(&ctx, DEPARTMENT_SCOPES);
                listing.reset_to_first_page();
            }
            Err(err) => {
                log::error!("[MUTATION] division {} delete failed: {}", id, err);
                ctx.notifier.error(err.user_message(DEPARTMENT_MESSAGES.delete_failed));
            }
        }
    });
}

/// Open the edit form with a fresh copy of the division, falling back to
/// the row as listed when the read fails
pub fn edit_department(ctx: &AppContext, store: PageStore, row: Department) {
    let api = ctx.api.clone();
    spawn_local(async move {
        let department = match api.get_department(row.id).await {
            Ok(department) => department,
            Err(err) => {
                log::warn!("[MUTATION] could not refresh division {}: {}", row.id, err);
                row
            }
        };
        open_modal(&store, ModalState::EditDepartment(department));
    });
}

// ========================
// Collaborators
// ========================

pub fn save_employee(
    ctx: &AppContext,
    store: PageStore,
    listing: EmployeeListing,
    mode: SaveMode,
    form: &EmployeeForm,
) -> Result<(), ValidationErrors> {
    let payload = form.validate(Local::now().date_naive())?;
    if store.saving().get_untracked() {
        return Ok(());
    }
    store.saving().set(true);

    let ctx = ctx.clone();
    spawn_local(async move {
        let result = match mode {
            SaveMode::Create => ctx.api.create_employee(&payload).await,
            SaveMode::Update(id) => ctx.api.update_employee(id, &payload).await,
        };
        match result {
            Ok(_) => {
                let message = match mode {
                    SaveMode::Create => EMPLOYEE_MESSAGES.created,
                    SaveMode::Update(_) => EMPLOYEE_MESSAGES.updated,
                };
                ctx.notifier.success(message);
                invalidate(&ctx, EMPLOYEE_SCOPES);
                close_modal(&store);
                after_save(listing, mode);
            }
            Err(err) => {
                let fallback = match mode {
                    SaveMode::Create => EMPLOYEE_MESSAGES.create_failed,
                    SaveMode::Update(_) => EMPLOYEE_MESSAGES.update_failed,
                };
                log::error!("[MUTATION] collaborator save failed: {}", err);
                ctx.notifier.error(err.user_message(fallback));
                store.saving().set(false);
            }
        }
    });
    Ok(())
}

pub fn delete_employee(ctx: &AppContext, listing: EmployeeListing, id: u32) {
    let ctx = ctx.clone();
    spawn_local(async move {
        match ctx.api.delete_employee(id).await {
            Ok(()) => {
                ctx.notifier.success(EMPLOYEE_MESSAGES.deleted);
                invalidate(&ctx, EMPLOYEE_SCOPES);
                listing.reset_to_first_page();
            }
            Err(err) => {
                log::error!("[MUTATION] collaborator {} delete failed: {}", id, err);
                ctx.notifier.error(err.user_message(EMPLOYEE_MESSAGES.delete_failed));
            }
        }
    });
}

pub fn edit_employee(ctx: &AppContext, store: PageStore, row: Employee) {
    let api = ctx.api.clone();
    spawn_local(async move {
        let employee = match api.get_employee(row.id).await {
            Ok(employee) => employee,
            Err(err) => {
                log::warn!("[MUTATION] could not refresh collaborator {}: {}", row.id, err);
                row
            }
        };
        open_modal(&store, ModalState::EditEmployee(employee));
    });
}
