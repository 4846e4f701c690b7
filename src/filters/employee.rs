//! Collaborator listing filters

use serde::{Deserialize, Serialize};

use super::{
    ensure_known_columns, insert_selection, selected, ColumnSelections, FilterError, FilterState, Sort, SortOrder,
    DEFAULT_PAGE_SIZE,
};
use crate::models::EmployeeStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeSortField {
    Name,
    Email,
    Position,
    Salary,
    HireDate,
    Department,
    #[default]
    CreatedAt,
}

impl EmployeeSortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeSortField::Name => "name",
            EmployeeSortField::Email => "email",
            EmployeeSortField::Position => "position",
            EmployeeSortField::Salary => "salary",
            EmployeeSortField::HireDate => "hire_date",
            EmployeeSortField::Department => "department",
            EmployeeSortField::CreatedAt => "created_at",
        }
    }
}

pub const DEPARTMENT_COLUMN: &str = "department";
pub const POSITION_COLUMN: &str = "position";
pub const STATUS_COLUMN: &str = "status";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeColumns {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<EmployeeStatus>>,
}

/// Body of `POST /employees/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeFilters {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(flatten)]
    pub columns: EmployeeColumns,
    pub sort_by: EmployeeSortField,
    pub sort_direction: SortOrder,
}

impl Default for EmployeeFilters {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
            search: None,
            columns: EmployeeColumns::default(),
            sort_by: EmployeeSortField::CreatedAt,
            sort_direction: SortOrder::Desc,
        }
    }
}

impl FilterState for EmployeeFilters {
    type SortField = EmployeeSortField;
    type Columns = EmployeeColumns;

    fn parse_sort_field(field: &str) -> Result<EmployeeSortField, FilterError> {
        match field {
            "name" => Ok(EmployeeSortField::Name),
            "email" => Ok(EmployeeSortField::Email),
            "position" => Ok(EmployeeSortField::Position),
            "salary" => Ok(EmployeeSortField::Salary),
            "hire_date" => Ok(EmployeeSortField::HireDate),
            "department" => Ok(EmployeeSortField::Department),
            "created_at" => Ok(EmployeeSortField::CreatedAt),
            other => Err(FilterError::UnknownSortField(other.to_string())),
        }
    }

    fn parse_columns(selections: &ColumnSelections) -> Result<EmployeeColumns, FilterError> {
        ensure_known_columns(selections, &[DEPARTMENT_COLUMN, POSITION_COLUMN, STATUS_COLUMN])?;
        Ok(EmployeeColumns {
            department: selected(selections, DEPARTMENT_COLUMN, |v| Some(v.to_string()))?,
            position: selected(selections, POSITION_COLUMN, |v| Some(v.to_string()))?,
            status: selected(selections, STATUS_COLUMN, EmployeeStatus::parse)?,
        })
    }

    fn selections(&self) -> ColumnSelections {
        let mut selections = ColumnSelections::new();
        insert_selection(&mut selections, DEPARTMENT_COLUMN, &self.columns.department);
        insert_selection(&mut selections, POSITION_COLUMN, &self.columns.position);
        insert_selection(&mut selections, STATUS_COLUMN, &self.columns.status);
        selections
    }

    fn sort_key(&self) -> (&'static str, SortOrder) {
        (self.sort_by.as_str(), self.sort_direction)
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn per_page(&self) -> u32 {
        self.per_page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page;
    }

    fn set_search(&mut self, search: Option<String>) {
        self.search = search;
    }

    fn set_columns(&mut self, columns: EmployeeColumns) {
        self.columns = columns;
    }

    fn set_sort(&mut self, sort: Sort<EmployeeSortField>) {
        self.sort_by = sort.field;
        self.sort_direction = sort.order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{apply_table_change, translate, RawSorter, RawTableChange, TablePagination, TableSortOrder};

    #[test]
    fn test_search_body_shape() {
        let filters = EmployeeFilters {
            search: Some("perez".to_string()),
            columns: EmployeeColumns {
                department: Some(vec!["IT".to_string()]),
                position: None,
                status: Some(vec![EmployeeStatus::Active]),
            },
            ..Default::default()
        };
        let body = serde_json::to_value(&filters).unwrap();
        assert_eq!(body["page"], 1);
        assert_eq!(body["per_page"], 10);
        assert_eq!(body["search"], "perez");
        assert_eq!(body["department"], serde_json::json!(["IT"]));
        assert_eq!(body["status"], serde_json::json!(["active"]));
        assert_eq!(body["sort_by"], "created_at");
        assert_eq!(body["sort_direction"], "desc");
        assert!(body.get("position").is_none());
    }

    #[test]
    fn test_status_filter_parsed() {
        let mut raw = RawTableChange {
            pagination: TablePagination {
                current: Some(2),
                page_size: Some(50),
            },
            ..Default::default()
        };
        raw.filters.insert("status".to_string(), vec!["inactive".to_string()]);
        raw.filters.insert("department".to_string(), vec![]);

        let parsed = translate::<EmployeeFilters>(&raw).unwrap();
        assert_eq!(parsed.columns.status, Some(vec![EmployeeStatus::Inactive]));
        assert_eq!(parsed.columns.department, None);

        raw.filters.insert("status".to_string(), vec!["retired".to_string()]);
        assert!(translate::<EmployeeFilters>(&raw).is_err());
    }

    #[test]
    fn test_selections_mirror_parsed_columns() {
        let mut raw = RawTableChange::default();
        raw.filters.insert("status".to_string(), vec!["active".to_string()]);
        raw.filters.insert("position".to_string(), vec!["Dev".to_string(), "QA".to_string()]);
        let filters = apply_table_change(&EmployeeFilters::default(), translate(&raw).unwrap());

        assert_eq!(filters.selections(), raw.filters);
        assert_eq!(filters.sort_key(), ("created_at", SortOrder::Desc));
    }

    #[test]
    fn test_sort_is_sticky_across_filter_changes() {
        let sort_event = RawTableChange {
            sorter: RawSorter {
                field: Some("salary".to_string()),
                order: Some(TableSortOrder::Ascend),
            },
            ..Default::default()
        };
        let sorted = apply_table_change(&EmployeeFilters::default(), translate(&sort_event).unwrap());
        assert_eq!(sorted.sort_by, EmployeeSortField::Salary);
        assert_eq!(sorted.sort_direction, SortOrder::Asc);

        let mut filter_event = RawTableChange::default();
        filter_event.filters.insert("position".to_string(), vec!["Dev".to_string()]);
        let filtered = apply_table_change(&sorted, translate(&filter_event).unwrap());
        assert_eq!(filtered.sort_by, EmployeeSortField::Salary);
        assert_eq!(filtered.sort_direction, SortOrder::Asc);
        assert_eq!(filtered.columns.position, Some(vec!["Dev".to_string()]));
    }
}
