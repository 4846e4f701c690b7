//! Filter Options
//!
//! Distinct values offered by the checkbox filters of each column. Values
//! come from the rows of the page currently loaded, not from the whole
//! collection.

use std::collections::BTreeSet;

use crate::models::{Department, Employee, EmployeeStatus};

/// Values that count as "nothing" and never become a filter option
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for u32 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

/// Checkbox entry rendered by the filter dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn plain(value: impl ToString) -> Self {
        let value = value.to_string();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Distinct non-blank values of `extract` over `rows`, ascending
pub fn distinct_sorted<R, T>(rows: Option<&[R]>, extract: impl Fn(&R) -> Option<T>) -> Vec<T>
where
    T: Ord + Blank,
{
    let Some(rows) = rows else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(extract)
        .filter(|v| !v.is_blank())
        .collect::<BTreeSet<T>>()
        .into_iter()
        .collect()
}

pub fn department_name_options(rows: Option<&[Department]>) -> Vec<String> {
    distinct_sorted(rows, |d| Some(d.name.clone()))
}

pub fn parent_name_options(rows: Option<&[Department]>) -> Vec<String> {
    distinct_sorted(rows, |d| d.parent_name().map(str::to_string))
}

pub fn level_options(rows: Option<&[Department]>) -> Vec<u32> {
    distinct_sorted(rows, |d| Some(d.level))
}

pub fn employee_department_options(rows: Option<&[Employee]>) -> Vec<String> {
    distinct_sorted(rows, |e| Some(e.department.clone()))
}

pub fn position_options(rows: Option<&[Employee]>) -> Vec<String> {
    distinct_sorted(rows, |e| Some(e.position.clone()))
}

/// Status is a fixed enumeration rather than derived from rows
pub fn status_options() -> Vec<FilterOption> {
    EmployeeStatus::ALL
        .iter()
        .map(|s| FilterOption {
            value: s.as_str().to_string(),
            label: s.label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(department: &str, position: &str) -> Employee {
        Employee {
            id: 1,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.test".to_string(),
            phone: None,
            position: position.to_string(),
            salary: 0.0,
            hire_date: "2024-01-01".to_string(),
            department: department.to_string(),
            status: EmployeeStatus::Active,
            address: None,
            notes: None,
            years_of_service: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn department(id: u32, name: &str, level: u32, parent: Option<&str>) -> Department {
        Department {
            id,
            name: name.to_string(),
            parent_id: parent.map(|_| 99),
            parent: parent.map(|p| crate::models::ParentSummary {
                id: 99,
                name: p.to_string(),
            }),
            level,
            employee_count: 0,
            ambassador_name: None,
            children_count: 0,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_distinct_sorted_departments() {
        let rows = vec![employee("HR", "x"), employee("IT", "x"), employee("HR", "x"), employee("", "x")];
        assert_eq!(employee_department_options(Some(rows.as_slice())), vec!["HR", "IT"]);
    }

    #[test]
    fn test_absent_rows_yield_nothing() {
        assert!(position_options(None).is_empty());
        assert!(level_options(Some(&[][..])).is_empty());
    }

    #[test]
    fn test_levels_sorted_numerically() {
        let rows = vec![
            department(1, "A", 10, None),
            department(2, "B", 2, None),
            department(3, "C", 2, None),
            department(4, "D", 0, None),
        ];
        assert_eq!(level_options(Some(rows.as_slice())), vec![2, 10]);
    }

    #[test]
    fn test_parent_names_skip_roots() {
        let rows = vec![
            department(1, "Root", 1, None),
            department(2, "Child", 2, Some("Root")),
            department(3, "Other", 2, Some("Root")),
        ];
        assert_eq!(parent_name_options(Some(rows.as_slice())), vec!["Root"]);
        assert_eq!(department_name_options(Some(rows.as_slice())), vec!["Child", "Other", "Root"]);
    }

    #[test]
    fn test_status_options_fixed() {
        let options = status_options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "active");
        assert_eq!(options[1].label, "Inactive");
    }
}
