//! UI Components
//!
//! Reusable Leptos components.

mod data_table;
mod delete_confirm_button;
mod department_modal;
mod department_table;
mod department_tree_view;
mod employee_modal;
mod employee_table;
mod filter_dropdown;
mod form_field;
mod navbar;
mod organization_page;
mod pagination_bar;
mod search_bar;
mod stats_bar;
mod toaster;

pub use data_table::{Column, DataTable, SortIndicator};
pub use delete_confirm_button::DeleteConfirmButton;
pub use department_modal::DepartmentModal;
pub use department_table::DepartmentTable;
pub use department_tree_view::DepartmentTreeView;
pub use employee_modal::EmployeeModal;
pub use employee_table::{format_salary, EmployeeTable};
pub use filter_dropdown::FilterDropdown;
pub use form_field::FormField;
pub use navbar::Navbar;
pub use organization_page::OrganizationPage;
pub use pagination_bar::PaginationBar;
pub use search_bar::SearchBar;
pub use stats_bar::StatsBar;
pub use toaster::Toaster;
